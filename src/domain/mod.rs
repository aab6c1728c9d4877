//! Доменная модель игры: карты, колода, правила, подсчёт очков.

pub mod card;
pub mod deck;
pub mod rules;
pub mod score;

/// Идентификатор партии в реестре контроллера.
pub type GameId = u64;

/// Индекс игрока: 0 или 1.
pub type PlayerIndex = usize;

/// Игра строго на двоих.
pub const PLAYERS: usize = 2;

/// Соперник игрока `player`.
pub const fn other_player(player: PlayerIndex) -> PlayerIndex {
    1 - player
}

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use rules::*;
pub use score::*;

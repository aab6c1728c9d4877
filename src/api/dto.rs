use serde::{Deserialize, Serialize};

use crate::domain::score::GameSummary;
use crate::domain::{GameId, PlayerIndex};
use crate::engine::PendingResponse;

/// DTO зоны одного игрока. Карты — wire-токенами,
/// скрытые карты — токеном `NO_CARD`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerZoneDto {
    pub player: PlayerIndex,
    /// Рука. Для соперника в режиме игрока — только `xx` по числу карт.
    pub hand: Vec<String>,
    /// Карта в текущей взятке или `xx`.
    pub trick_card: String,
    /// Карты взятых взяток (открыты обоим).
    pub discards: Vec<String>,
    pub tricks_won: usize,
    /// Сброшенные после пятёрки. Для соперника — скрыты.
    pub set_aside: Vec<String>,
}

/// DTO события истории.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEventDto {
    pub index: u32,
    pub step: usize,
    /// Тип события: "CardPlayed", "TrumpTaken", ...
    pub kind: String,
    pub player: Option<PlayerIndex>,
    pub cards: Vec<String>,
}

/// DTO партии на конкретном шаге журнала.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub game_id: GameId,
    /// Сколько ходов журнала применено в этом представлении.
    pub step: usize,
    /// Полная длина журнала (для перемотки по шагам).
    pub log_len: usize,
    /// Для кого построено представление; `None` — полное серверное.
    pub viewer: Option<PlayerIndex>,
    pub players: Vec<PlayerZoneDto>,
    pub trump_card: String,
    pub draw_deck_size: usize,
    /// Сама колода добора — только в полном представлении.
    pub draw_deck: Option<Vec<String>>,
    pub first_player: PlayerIndex,
    pub leader: PlayerIndex,
    pub to_move: Option<PlayerIndex>,
    pub pending: PendingResponse,
    pub finished: bool,
    pub summary: Option<GameSummary>,
    pub events: Vec<GameEventDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Создана новая партия (полное представление).
    GameCreated {
        game_id: GameId,
        view: GameViewDto,
    },

    /// Ход принят; представление — глазами сходившего игрока.
    PlayAccepted(GameViewDto),
}

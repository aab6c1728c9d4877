//! Движок партии: раздача, розыгрыш взяток, реплей журнала, реестр партий.
//!
//! Высокоуровневые объекты: `GameState` и `GameController`.
//! Основные операции:
//!   - `deal` – раздать колоду
//!   - `resolve_trick` – разыграть взятку из двух карт
//!   - `GameState::apply_action` / `replay` – применить ход / восстановить состояние по журналу
//!   - `GameController::apply_play` / `get_state` – то же поверх реестра партий

pub mod actions;
pub mod dealing;
pub mod errors;
pub mod game_controller;
pub mod game_state;
pub mod history;
pub mod trick;
pub mod validation;

pub use actions::{Play, PlayKind, PlayerAction};
pub use dealing::{deal, Deal};
pub use errors::EngineError;
pub use game_controller::{ControllerError, GameController, GameRecord};
pub use game_state::{replay, replay_all, GameState, PendingResponse};
pub use history::{GameEvent, GameEventKind, GameHistory};
pub use trick::{resolve_trick, TrickOutcome};
pub use validation::validate_action;

/// RNG интерфейс для engine.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Случайный индекс в `0..len`; для `len == 0` — 0.
    fn gen_index(&mut self, len: usize) -> usize;
}

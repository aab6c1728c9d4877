//! Движок карточной игры на взятки для двух игроков ("лиса в лесу").
//!
//! Состояние партии — чистая функция от `(раздача, журнал ходов)`:
//! - `domain` — карты, колода, правила, очки;
//! - `engine` — розыгрыш взятки, машина состояний, реплей, реестр партий;
//! - `api` — команды/запросы/DTO для транспорта (wire-токены карт, скрытие руки соперника);
//! - `infra` — id, RNG, хранилище записей, маппинги.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{Card, GameId, PlayerIndex, Rank, RuleConfig, Suit};
pub use engine::{
    ControllerError, Deal, EngineError, GameController, GameRecord, GameState, PendingResponse,
    Play, PlayKind, PlayerAction,
};

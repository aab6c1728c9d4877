//! Внешний API игрового движка.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (новая партия, ход);
//! - запросы (queries.rs) — только чтение, включая перемотку по шагам;
//! - DTO (dto.rs) — удобные структуры для фронта, карты — wire-токенами;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::ParseCardError;
use crate::domain::GameId;
use crate::engine::{ControllerError, EngineError};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битый токен карты, битый JSON).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Партия не найдена.
    #[error("game {0} not found")]
    GameNotFound(GameId),

    /// Ход отклонён правилами; `code` — стабильный машинный код.
    #[error("{code}: {message}")]
    Rejected { code: String, message: String },
}

impl ApiError {
    pub fn code(&self) -> &str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::GameNotFound(_) => "GAME_NOT_FOUND",
            ApiError::Rejected { code, .. } => code,
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Rejected {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<ControllerError> for ApiError {
    fn from(err: ControllerError) -> Self {
        match err {
            ControllerError::GameNotFound(id) => ApiError::GameNotFound(id),
            ControllerError::Engine(e) => e.into(),
        }
    }
}

impl From<ParseCardError> for ApiError {
    fn from(err: ParseCardError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

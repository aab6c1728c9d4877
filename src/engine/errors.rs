use crate::domain::card::Card;
use crate::domain::rules::ConfigError;
use crate::domain::PlayerIndex;
use crate::engine::actions::PlayKind;

use thiserror::Error;

/// Ошибки движка партии.
///
/// Любая из них означает, что ход отклонён и состояние не изменилось.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("игрока с индексом {0} нет, допустимы 0 и 1")]
    InvalidPlayer(PlayerIndex),

    #[error("сейчас не ход игрока {0}")]
    NotPlayersTurn(PlayerIndex),

    #[error("карты {card} нет на руке у игрока {player}")]
    CardNotInHand { player: PlayerIndex, card: Card },

    #[error("ожидается ход типа {expected:?}, получен {got:?}")]
    WrongResponseType { expected: PlayKind, got: PlayKind },

    #[error("карта {0} нарушает обязанность ходить в масть")]
    MustFollowSuit(Card),

    #[error("партия уже завершена")]
    GameFinished,

    #[error("некорректная колода: {0}")]
    MalformedDeck(String),

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

impl EngineError {
    /// Стабильный машинный код ошибки для внешнего API.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidPlayer(_) => "INVALID_PLAYER",
            EngineError::NotPlayersTurn(_) => "NOT_PLAYERS_TURN",
            EngineError::CardNotInHand { .. } => "CARD_NOT_IN_HAND",
            EngineError::WrongResponseType { .. } => "WRONG_RESPONSE_TYPE",
            EngineError::MustFollowSuit(_) => "MUST_FOLLOW_SUIT",
            EngineError::GameFinished => "GAME_FINISHED",
            EngineError::MalformedDeck(_) => "MALFORMED_DECK",
            EngineError::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }
}

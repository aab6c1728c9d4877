use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerIndex;

/// Тип хода. Определяется состоянием партии, а не самой картой.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayKind {
    /// Обычный ход карты во взятку.
    Trick,
    /// Возврат карты на место козыря после тройки.
    TrumpReturn,
    /// Сброс карты после пятёрки.
    Discard,
}

/// Запись журнала ходов: кто и какой картой сходил.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Play {
    pub player: PlayerIndex,
    pub card: Card,
}

impl Play {
    pub fn new(player: PlayerIndex, card: Card) -> Self {
        Self { player, card }
    }
}

/// Конкретное действие игрока, пришедшее от транспорта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// Сам ход.
    pub play: Play,
    /// Какой тип хода игрок имеет в виду.
    /// `None` — какой ожидает состояние партии.
    pub kind: Option<PlayKind>,
}

impl PlayerAction {
    pub fn new(player: PlayerIndex, card: Card) -> Self {
        Self {
            play: Play::new(player, card),
            kind: None,
        }
    }

    pub fn with_kind(player: PlayerIndex, card: Card, kind: PlayKind) -> Self {
        Self {
            play: Play::new(player, card),
            kind: Some(kind),
        }
    }
}

impl From<Play> for PlayerAction {
    fn from(play: Play) -> Self {
        Self { play, kind: None }
    }
}

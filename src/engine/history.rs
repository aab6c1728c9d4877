use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerIndex;

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEventKind {
    /// Карта сыграна во взятку.
    CardPlayed { player: PlayerIndex, card: Card },

    /// Тройка: игрок забрал козырь на руку.
    TrumpTaken { player: PlayerIndex, card: Card },

    /// Игрок положил карту на место козыря.
    TrumpReturned { player: PlayerIndex, card: Card },

    /// Пятёрка: игрок взял карту из колоды добора.
    CardDrawn { player: PlayerIndex, card: Card },

    /// Игрок сбросил карту из игры.
    CardSetAside { player: PlayerIndex, card: Card },

    /// Взятка разыграна.
    TrickWon {
        winner: PlayerIndex,
        next_leader: PlayerIndex,
        cards: [Card; 2],
    },

    /// Руки пусты, партия завершена.
    GameFinished,
}

/// Событие с порядковым номером и номером хода журнала, который его вызвал.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEvent {
    pub index: u32,
    /// Номер записи журнала (с нуля).
    pub step: usize,
    pub kind: GameEventKind,
}

/// Полная история партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, step: usize, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, step, kind });
    }

    /// Разыгранные взятки по порядку.
    pub fn tricks(&self) -> impl Iterator<Item = &GameEventKind> {
        self.events
            .iter()
            .map(|e| &e.kind)
            .filter(|k| matches!(k, GameEventKind::TrickWon { .. }))
    }
}

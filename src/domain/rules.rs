//! Настройки правил партии: состав колоды, размер руки, обязанность
//! ходить в масть и таблица очков за взятки.
//!
//! По умолчанию — компактная колода (18 карт, руки по 6).
//! `RuleConfig::classic()` — полная колода 1..=11 на три масти, руки по 13.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Rank, Suit};

/// Ошибки конфигурации правил.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("список рангов пуст")]
    NoRanks,

    #[error("ранг {0} вне диапазона 1..=11")]
    RankOutOfRange(u8),

    #[error("ранг {0} указан дважды")]
    DuplicateRank(u8),

    #[error("размер руки должен быть больше нуля")]
    ZeroHandSize,

    #[error("колода из {deck} карт не вмещает две руки по {hand} и козырь")]
    DeckTooSmall { deck: usize, hand: usize },

    #[error("не удалось разобрать конфиг: {0}")]
    Parse(String),
}

/// Одна ступень таблицы очков: сколько очков получает игрок,
/// взявший не больше `max_tricks` взяток (и больше предыдущей ступени).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrickBand {
    pub max_tricks: usize,
    pub points: u32,
}

/// Правила партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuleConfig {
    /// Ранги в колоде (каждый во всех трёх мастях).
    pub ranks: Vec<u8>,
    /// Сколько карт получает каждый игрок при раздаче.
    pub hand_size: usize,
    /// Второй игрок во взятке обязан ходить в масть захода.
    pub follow_suit: bool,
    /// Очки за количество взяток. Пусто — считаются только семёрки.
    pub trick_bands: Vec<TrickBand>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::compact()
    }
}

impl RuleConfig {
    /// 18 карт: ранги 1, 3, 5, 7, 9, 11; руки по 6.
    pub fn compact() -> Self {
        Self {
            ranks: vec![1, 3, 5, 7, 9, 11],
            hand_size: 6,
            follow_suit: false,
            trick_bands: Vec::new(),
        }
    }

    /// 33 карты, руки по 13, ход в масть и полная таблица очков.
    pub fn classic() -> Self {
        Self {
            ranks: (Rank::MIN..=Rank::MAX).collect(),
            hand_size: 13,
            follow_suit: true,
            trick_bands: vec![
                TrickBand { max_tricks: 3, points: 6 },  // скромный
                TrickBand { max_tricks: 4, points: 1 },  // побеждённый
                TrickBand { max_tricks: 5, points: 2 },
                TrickBand { max_tricks: 6, points: 3 },
                TrickBand { max_tricks: 9, points: 6 },  // победитель
                TrickBand { max_tricks: 13, points: 0 }, // жадный
            ],
        }
    }

    pub fn deck_size(&self) -> usize {
        self.ranks.len() * Suit::ALL.len()
    }

    /// Сколько карт остаётся в колоде добора после раздачи.
    pub fn draw_deck_size(&self) -> usize {
        self.deck_size().saturating_sub(2 * self.hand_size + 1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ranks.is_empty() {
            return Err(ConfigError::NoRanks);
        }
        let mut seen = Vec::with_capacity(self.ranks.len());
        for &r in &self.ranks {
            if Rank::new(r).is_none() {
                return Err(ConfigError::RankOutOfRange(r));
            }
            if seen.contains(&r) {
                return Err(ConfigError::DuplicateRank(r));
            }
            seen.push(r);
        }
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        if 2 * self.hand_size + 1 > self.deck_size() {
            return Err(ConfigError::DeckTooSmall {
                deck: self.deck_size(),
                hand: self.hand_size,
            });
        }
        Ok(())
    }

    /// Прочитать правила из JSON; недостающие поля берутся из `compact()`.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: RuleConfig =
            serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Очки за `tricks` взяток по таблице; `0`, если таблица пуста.
    pub fn band_points(&self, tricks: usize) -> u32 {
        self.trick_bands
            .iter()
            .find(|b| tricks <= b.max_tricks)
            .map(|b| b.points)
            .unwrap_or(0)
    }
}

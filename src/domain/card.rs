use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Токен "нет карты": козырь отсутствует или карта соперника скрыта.
/// Никогда не парсится как настоящая карта.
pub const NO_CARD: &str = "xx";

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Hearts,  // h
    Spades,  // s
    Clubs,   // c
}

impl Suit {
    pub const ALL: [Suit; 3] = [Suit::Hearts, Suit::Spades, Suit::Clubs];

    pub const fn letter(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Spades => 's',
            Suit::Clubs => 'c',
        }
    }

    pub fn from_letter(ch: char) -> Option<Suit> {
        match ch {
            'h' | 'H' => Some(Suit::Hearts),
            's' | 'S' => Some(Suit::Spades),
            'c' | 'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// Ранг карты, 1..=11. Обёртка над u8, значение проверяется при создании.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 11;

    /// Выигравшая единица отдаёт следующий заход проигравшему.
    pub const SWAN: Rank = Rank(1);
    /// Забрать козырь и вернуть взамен карту.
    pub const TRUMP_SWAP: Rank = Rank(3);
    /// Добрать карту из колоды и сбросить одну.
    pub const DRAW_DISCARD: Rank = Rank(5);
    /// Очко при подсчёте.
    pub const TREASURE: Rank = Rank(7);
    /// Джокер: играет мастью козыря.
    pub const WILD: Rank = Rank(9);
    /// Заставляет ответить старшей картой масти или единицей.
    pub const MONARCH: Rank = Rank(11);

    pub fn new(value: u8) -> Option<Rank> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Rank(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rank {
    type Error = ParseCardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| ParseCardError::InvalidRank(value.to_string()))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Карта игры. Равенство по значению, идентичность неизменна.
///
/// В JSON карта пишется wire-токеном (`"9h"`, `"11c"`), а не структурой.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Удобный конструктор для тестов и фикстур: `Card::of(9, Suit::Hearts)`.
    pub fn of(rank: u8, suit: Suit) -> Option<Self> {
        Rank::new(rank).map(|r| Self::new(r, suit))
    }

    pub fn is_rank(&self, rank: Rank) -> bool {
        self.rank == rank
    }
}

impl fmt::Display for Card {
    /// Формат вида `1h`, `9s`, `11c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Ошибка разбора wire-токена карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("пустой токен карты")]
    Empty,

    #[error("токен `{0}` означает отсутствие карты")]
    Sentinel(String),

    #[error("неизвестная масть `{0}`")]
    InvalidSuit(char),

    #[error("некорректный ранг `{0}`")]
    InvalidRank(String),
}

/// Парсинг токена: цифры ранга + одна буква масти в конце.
/// Масть всегда ровно один последний символ, поэтому "11c" однозначен.
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(NO_CARD) {
            return Err(ParseCardError::Sentinel(s.to_string()));
        }
        let suit_ch = s.chars().last().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_letter(suit_ch).ok_or(ParseCardError::InvalidSuit(suit_ch))?;

        let digits = &s[..s.len() - suit_ch.len_utf8()];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseCardError::InvalidRank(digits.to_string()));
        }
        let rank = digits
            .parse::<u8>()
            .ok()
            .and_then(Rank::new)
            .ok_or_else(|| ParseCardError::InvalidRank(digits.to_string()))?;

        Ok(Card { rank, suit })
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Wire-представление опциональной карты: токен или `NO_CARD`.
pub fn card_token(card: Option<Card>) -> String {
    match card {
        Some(c) => c.to_string(),
        None => NO_CARD.to_string(),
    }
}

/// Обратная операция к `card_token`: `NO_CARD` → `None`.
pub fn parse_card_token(token: &str) -> Result<Option<Card>, ParseCardError> {
    if token.trim().eq_ignore_ascii_case(NO_CARD) {
        return Ok(None);
    }
    token.parse().map(Some)
}

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::rules::RuleConfig;

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Колода по правилам, в порядке: h, s, c; внутри масти ранги по возрастанию.
    pub fn build(rules: &RuleConfig) -> Self {
        let mut cards = Vec::with_capacity(rules.deck_size());
        for suit in Suit::ALL {
            for rank in rules.ranks.iter().filter_map(|&r| Rank::new(r)) {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Стандартная 18-карточная колода.
    pub fn standard() -> Self {
        Self::build(&RuleConfig::compact())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять n карт с начала колоды (FIFO, как колода добора).
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Взять одну карту с начала колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Те же карты, что и в `reference`, каждая ровно один раз (порядок не важен).
    pub fn is_permutation_of(&self, reference: &Deck) -> bool {
        if self.cards.len() != reference.cards.len() {
            return false;
        }
        let mut a = self.cards.clone();
        let mut b = reference.cards.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

/// Полный набор карт по умолчанию (18 штук).
pub fn build_deck() -> Deck {
    Deck::standard()
}

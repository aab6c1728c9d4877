//! Розыгрыш взятки из двух карт.

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::{other_player, PlayerIndex};

/// Результат взятки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrickOutcome {
    pub winner: PlayerIndex,
    pub next_leader: PlayerIndex,
}

/// Масть, которой фактически играет карта: девятка становится козырем,
/// если вторая карта взятки не девятка.
fn effective_suit(card: Card, other: Card, trump: Suit) -> Suit {
    if card.is_rank(Rank::WILD) && !other.is_rank(Rank::WILD) {
        trump
    } else {
        card.suit
    }
}

/// Кто взял взятку и кто заходит следующим.
///
/// `card0` — карта игрока 0, `card1` — карта игрока 1 (порядок по игрокам,
/// а не по очерёдности хода). Ранги внутри одной масти всегда различны.
pub fn resolve_trick(leader: PlayerIndex, card0: Card, card1: Card, trump: Suit) -> TrickOutcome {
    let suit0 = effective_suit(card0, card1, trump);
    let suit1 = effective_suit(card1, card0, trump);

    let winner = if suit0 == suit1 {
        if card0.rank > card1.rank {
            0
        } else {
            1
        }
    } else if suit0 == trump {
        0
    } else if suit1 == trump {
        1
    } else {
        leader
    };

    let winning_card = if winner == 0 { card0 } else { card1 };
    let next_leader = if winning_card.is_rank(Rank::SWAN) {
        other_player(winner)
    } else {
        winner
    };

    TrickOutcome { winner, next_leader }
}

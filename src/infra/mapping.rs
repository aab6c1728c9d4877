use crate::api::dto::{GameEventDto, PlayerZoneDto};
use crate::api::errors::ApiError;
use crate::domain::card::{card_token, Card, NO_CARD};
use crate::domain::{PlayerIndex, PLAYERS};
use crate::engine::{GameEvent, GameEventKind, GameState};

/// Токен карты из API → Card. `xx` и мусор — BadRequest.
pub fn parse_card(token: &str) -> Result<Card, ApiError> {
    Ok(token.parse::<Card>()?)
}

/// Проверка индекса игрока на входе API.
pub fn parse_player(player: PlayerIndex) -> Result<PlayerIndex, ApiError> {
    if player < PLAYERS {
        Ok(player)
    } else {
        Err(ApiError::BadRequest(format!("player must be 0 or 1, got {player}")))
    }
}

pub fn tokens(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::to_string).collect()
}

pub fn hidden_tokens(count: usize) -> Vec<String> {
    vec![NO_CARD.to_string(); count]
}

/// Видит ли `viewer` карты зоны игрока `owner`.
/// `None` — полное серверное представление, видно всё.
fn can_see(viewer: Option<PlayerIndex>, owner: PlayerIndex) -> bool {
    viewer.map_or(true, |v| v == owner)
}

/// Маппинг зоны игрока в DTO с учётом того, кто смотрит.
pub fn map_player_zone(
    state: &GameState,
    owner: PlayerIndex,
    viewer: Option<PlayerIndex>,
) -> PlayerZoneDto {
    let visible = can_see(viewer, owner);

    let hand = if visible {
        tokens(&state.hands[owner])
    } else {
        hidden_tokens(state.hands[owner].len())
    };
    let set_aside = if visible {
        tokens(&state.set_aside[owner])
    } else {
        hidden_tokens(state.set_aside[owner].len())
    };

    PlayerZoneDto {
        player: owner,
        hand,
        trick_card: card_token(state.current_trick[owner]),
        discards: tokens(&state.discard_piles[owner]),
        tricks_won: state.tricks_won(owner),
        set_aside,
    }
}

/// Маппинг события истории. Карта, добранная соперником после пятёрки,
/// и карта, которую он сбросил, для `viewer` скрыты.
pub fn map_event(event: &GameEvent, viewer: Option<PlayerIndex>) -> GameEventDto {
    let (kind, player, cards): (&str, Option<PlayerIndex>, Vec<Option<Card>>) = match &event.kind {
        GameEventKind::CardPlayed { player, card } => ("CardPlayed", Some(*player), vec![Some(*card)]),
        GameEventKind::TrumpTaken { player, card } => ("TrumpTaken", Some(*player), vec![Some(*card)]),
        GameEventKind::TrumpReturned { player, card } => {
            ("TrumpReturned", Some(*player), vec![Some(*card)])
        }
        GameEventKind::CardDrawn { player, card } => (
            "CardDrawn",
            Some(*player),
            vec![can_see(viewer, *player).then_some(*card)],
        ),
        GameEventKind::CardSetAside { player, card } => (
            "CardSetAside",
            Some(*player),
            vec![can_see(viewer, *player).then_some(*card)],
        ),
        GameEventKind::TrickWon { winner, cards, .. } => (
            "TrickWon",
            Some(*winner),
            cards.iter().copied().map(Some).collect(),
        ),
        GameEventKind::GameFinished => ("GameFinished", None, Vec::new()),
    };

    GameEventDto {
        index: event.index,
        step: event.step,
        kind: kind.to_string(),
        player,
        cards: cards.into_iter().map(card_token).collect(),
    }
}

use crate::domain::card::{Card, Rank};
use crate::domain::{other_player, PlayerIndex, PLAYERS};
use crate::engine::actions::{PlayKind, PlayerAction};
use crate::engine::errors::EngineError;
use crate::engine::game_state::GameState;

/// Проверка, может ли игрок сделать этот ход в текущем состоянии.
///
/// Возвращает тип хода, который ожидает состояние. Порядок проверок:
/// игрок → очередь → тип ответа → карта на руке → ход в масть.
pub fn validate_action(state: &GameState, action: &PlayerAction) -> Result<PlayKind, EngineError> {
    let player = action.play.player;
    let card = action.play.card;

    if player >= PLAYERS {
        return Err(EngineError::InvalidPlayer(player));
    }

    let to_move = state.to_move().ok_or(EngineError::GameFinished)?;
    if player != to_move {
        return Err(EngineError::NotPlayersTurn(player));
    }

    let expected = state.expected_kind();
    if let Some(got) = action.kind {
        if got != expected {
            return Err(EngineError::WrongResponseType { expected, got });
        }
    }

    if !state.hands[player].contains(&card) {
        return Err(EngineError::CardNotInHand { player, card });
    }

    if expected == PlayKind::Trick && state.rules.follow_suit {
        check_follow_suit(state, player, card)?;
    }

    Ok(expected)
}

/// Ход в масть для второго игрока взятки.
///
/// Масть захода — натуральная масть карты соперника (девятка тут не джокер).
/// На одиннадцать в масть отвечают единицей или своей старшей картой масти.
fn check_follow_suit(state: &GameState, player: PlayerIndex, card: Card) -> Result<(), EngineError> {
    let led = match state.current_trick[other_player(player)] {
        Some(led) if state.current_trick[player].is_none() => led,
        _ => return Ok(()),
    };

    let in_suit: Vec<Card> = state.hands[player]
        .iter()
        .copied()
        .filter(|c| c.suit == led.suit)
        .collect();

    if in_suit.is_empty() {
        return Ok(());
    }
    if card.suit != led.suit {
        return Err(EngineError::MustFollowSuit(card));
    }

    if led.is_rank(Rank::MONARCH) && !card.is_rank(Rank::SWAN) {
        let highest = in_suit.iter().map(|c| c.rank).max();
        if highest != Some(card.rank) {
            return Err(EngineError::MustFollowSuit(card));
        }
    }

    Ok(())
}

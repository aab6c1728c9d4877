use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::domain::card::{Card, Rank};
use crate::domain::rules::RuleConfig;
use crate::domain::score::{score_discards, GameSummary};
use crate::domain::{PlayerIndex, PLAYERS};
use crate::engine::actions::{Play, PlayKind, PlayerAction};
use crate::engine::dealing::Deal;
use crate::engine::errors::EngineError;
use crate::engine::history::{GameEventKind, GameHistory};
use crate::engine::trick::resolve_trick;
use crate::engine::validation::validate_action;

/// Кто должен ответное действие после спецкарты.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PendingResponse {
    #[default]
    None,
    /// Сыграна тройка: игрок должен положить карту на место козыря.
    AwaitTrumpReturn(PlayerIndex),
    /// Сыграна пятёрка: игрок должен сбросить карту.
    AwaitDiscard(PlayerIndex),
}

/// Полное (серверное) состояние партии.
///
/// Строится только через `GameState::from_deal` и применение ходов журнала;
/// других путей изменения нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub rules: RuleConfig,
    pub hands: [Vec<Card>; PLAYERS],
    /// Колода добора; берём с начала.
    pub draw_deck: VecDeque<Card>,
    pub trump_card: Option<Card>,
    /// Карты текущей взятки по игрокам.
    pub current_trick: [Option<Card>; PLAYERS],
    /// Карты взятых взяток.
    pub discard_piles: [Vec<Card>; PLAYERS],
    /// Карты, сброшенные после пятёрки. Вне игры навсегда.
    pub set_aside: [Vec<Card>; PLAYERS],
    pub first_player: PlayerIndex,
    /// Кто заходил в текущую взятку.
    pub leader: PlayerIndex,
    pub pending: PendingResponse,
    /// Сколько записей журнала применено.
    pub steps: usize,
    pub history: GameHistory,
}

impl GameState {
    /// Начальное состояние по раздаче.
    pub fn from_deal(deal: &Deal) -> Self {
        Self {
            rules: deal.rules.clone(),
            hands: deal.hands.clone(),
            draw_deck: deal.draw_deck.clone(),
            trump_card: Some(deal.trump_card),
            current_trick: [None; PLAYERS],
            discard_piles: [Vec::new(), Vec::new()],
            set_aside: [Vec::new(), Vec::new()],
            first_player: deal.first_player,
            leader: deal.first_player,
            pending: PendingResponse::None,
            steps: 0,
            history: GameHistory::new(),
        }
    }

    /// Руки пусты, взятка разыграна, ответов никто не должен.
    pub fn is_finished(&self) -> bool {
        self.hands.iter().all(|h| h.is_empty())
            && self.current_trick.iter().all(|c| c.is_none())
            && self.pending == PendingResponse::None
    }

    /// Чей сейчас ход (`None`, если партия завершена).
    pub fn to_move(&self) -> Option<PlayerIndex> {
        if self.is_finished() {
            return None;
        }
        match self.pending {
            PendingResponse::AwaitTrumpReturn(p) | PendingResponse::AwaitDiscard(p) => Some(p),
            PendingResponse::None => match self.current_trick {
                [Some(_), None] => Some(1),
                [None, Some(_)] => Some(0),
                _ => Some(self.leader),
            },
        }
    }

    /// Какой тип хода ожидается сейчас.
    pub fn expected_kind(&self) -> PlayKind {
        match self.pending {
            PendingResponse::None => PlayKind::Trick,
            PendingResponse::AwaitTrumpReturn(_) => PlayKind::TrumpReturn,
            PendingResponse::AwaitDiscard(_) => PlayKind::Discard,
        }
    }

    pub fn tricks_won(&self, player: PlayerIndex) -> usize {
        self.discard_piles[player].len() / 2
    }

    /// Очки партии; `None`, пока партия не завершена.
    pub fn summary(&self) -> Option<GameSummary> {
        self.is_finished()
            .then(|| score_discards(&self.discard_piles, &self.rules))
    }

    /// Все карты во всех зонах (для проверки сохранения карт).
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.hands.iter().flatten().copied().collect();
        cards.extend(self.draw_deck.iter().copied());
        cards.extend(self.trump_card);
        cards.extend(self.current_trick.iter().flatten().copied());
        cards.extend(self.discard_piles.iter().flatten().copied());
        cards.extend(self.set_aside.iter().flatten().copied());
        cards
    }

    /// Карты, которыми `player` может сходить прямо сейчас.
    pub fn legal_plays(&self, player: PlayerIndex) -> Vec<Card> {
        if player >= PLAYERS || self.to_move() != Some(player) {
            return Vec::new();
        }
        self.hands[player]
            .iter()
            .copied()
            .filter(|&card| validate_action(self, &PlayerAction::new(player, card)).is_ok())
            .collect()
    }

    /// Чистое применение хода: возвращает новое состояние, `self` не трогает.
    pub fn apply(&self, play: Play) -> Result<GameState, EngineError> {
        let mut next = self.clone();
        next.apply_action(&PlayerAction::from(play))?;
        Ok(next)
    }

    /// Применить действие на месте.
    ///
    /// Сначала полная проверка, потом мутация: при ошибке состояние не меняется.
    pub fn apply_action(&mut self, action: &PlayerAction) -> Result<PlayKind, EngineError> {
        let kind = validate_action(self, action)?;
        let Play { player, card } = action.play;
        let step = self.steps;

        remove_card(&mut self.hands[player], card);

        match kind {
            PlayKind::Trick => self.play_to_trick(step, player, card),
            PlayKind::TrumpReturn => {
                self.trump_card = Some(card);
                self.pending = PendingResponse::None;
                self.history
                    .push(step, GameEventKind::TrumpReturned { player, card });
                self.finish_trick_if_complete(step);
            }
            PlayKind::Discard => {
                self.set_aside[player].push(card);
                self.pending = PendingResponse::None;
                self.history
                    .push(step, GameEventKind::CardSetAside { player, card });
                self.finish_trick_if_complete(step);
            }
        }

        self.steps += 1;
        trace!(step, player, %card, ?kind, pending = ?self.pending, "ход применён");
        Ok(kind)
    }

    fn play_to_trick(&mut self, step: usize, player: PlayerIndex, card: Card) {
        self.current_trick[player] = Some(card);
        self.history
            .push(step, GameEventKind::CardPlayed { player, card });

        if card.is_rank(Rank::TRUMP_SWAP) {
            if let Some(trump) = self.trump_card.take() {
                self.hands[player].push(trump);
                self.pending = PendingResponse::AwaitTrumpReturn(player);
                self.history
                    .push(step, GameEventKind::TrumpTaken { player, card: trump });
                return;
            }
        } else if card.is_rank(Rank::DRAW_DISCARD) {
            // Пустая колода добора: пятёрка играет как обычная карта.
            if let Some(drawn) = self.draw_deck.pop_front() {
                self.hands[player].push(drawn);
                self.pending = PendingResponse::AwaitDiscard(player);
                self.history
                    .push(step, GameEventKind::CardDrawn { player, card: drawn });
                return;
            }
        }

        self.finish_trick_if_complete(step);
    }

    /// Если во взятке обе карты — разыграть её.
    fn finish_trick_if_complete(&mut self, step: usize) {
        let (Some(card0), Some(card1), Some(trump)) =
            (self.current_trick[0], self.current_trick[1], self.trump_card)
        else {
            return;
        };

        let outcome = resolve_trick(self.leader, card0, card1, trump.suit);
        self.discard_piles[outcome.winner].extend([card0, card1]);
        self.current_trick = [None; PLAYERS];
        self.leader = outcome.next_leader;

        debug!(
            step,
            winner = outcome.winner,
            next_leader = outcome.next_leader,
            trump = %trump,
            "взятка разыграна: {card0} / {card1}"
        );
        self.history.push(
            step,
            GameEventKind::TrickWon {
                winner: outcome.winner,
                next_leader: outcome.next_leader,
                cards: [card0, card1],
            },
        );

        if self.is_finished() {
            self.history.push(step, GameEventKind::GameFinished);
        }
    }
}

fn remove_card(hand: &mut Vec<Card>, card: Card) {
    if let Some(pos) = hand.iter().position(|c| *c == card) {
        hand.remove(pos);
    }
}

/// Состояние после первых `upto` ходов журнала.
///
/// `upto` обрезается до длины журнала. Чистая функция: одинаковый вход —
/// одинаковое состояние, кэш не нужен.
pub fn replay(deal: &Deal, log: &[Play], upto: usize) -> Result<GameState, EngineError> {
    let upto = upto.min(log.len());
    let mut state = GameState::from_deal(deal);
    for play in &log[..upto] {
        state.apply_action(&PlayerAction::from(*play))?;
    }
    Ok(state)
}

/// Состояние после всего журнала.
pub fn replay_all(deal: &Deal, log: &[Play]) -> Result<GameState, EngineError> {
    replay(deal, log, log.len())
}

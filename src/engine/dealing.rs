//! Раздача: из перемешанной колоды получаем две руки, козырь и колоду добора.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::rules::RuleConfig;
use crate::domain::{PlayerIndex, PLAYERS};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Исходная раскладка партии. Вместе с журналом ходов полностью
/// определяет состояние игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deal {
    pub rules: RuleConfig,
    pub hands: [Vec<Card>; PLAYERS],
    /// Колода добора; берём с начала.
    pub draw_deck: VecDeque<Card>,
    pub trump_card: Card,
    /// Кто заходит в первую взятку.
    pub first_player: PlayerIndex,
}

impl Deal {
    /// Собрать раздачу вручную (тесты, импорт) с проверкой по правилам:
    /// карты должны в точности совпадать с колодой, размеры рук — с `hand_size`.
    pub fn from_parts(
        rules: RuleConfig,
        hands: [Vec<Card>; PLAYERS],
        draw_deck: Vec<Card>,
        trump_card: Card,
        first_player: PlayerIndex,
    ) -> Result<Self, EngineError> {
        let deal = Deal {
            rules,
            hands,
            draw_deck: draw_deck.into(),
            trump_card,
            first_player,
        };
        deal.validate()?;
        Ok(deal)
    }

    /// Проверить раздачу: правила корректны, руки нужного размера,
    /// все карты колоды присутствуют ровно по одному разу.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.rules.validate()?;

        if self.first_player >= PLAYERS {
            return Err(EngineError::InvalidPlayer(self.first_player));
        }
        for (p, hand) in self.hands.iter().enumerate() {
            if hand.len() != self.rules.hand_size {
                return Err(EngineError::MalformedDeck(format!(
                    "у игрока {p} {} карт вместо {}",
                    hand.len(),
                    self.rules.hand_size
                )));
            }
        }

        let dealt = Deck { cards: self.all_cards() };
        if !dealt.is_permutation_of(&Deck::build(&self.rules)) {
            return Err(EngineError::MalformedDeck(format!(
                "набор из {} карт не совпадает с колодой из {}",
                dealt.len(),
                self.rules.deck_size()
            )));
        }
        Ok(())
    }

    /// Все карты раздачи в одном списке.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.hands.iter().flatten().copied().collect();
        cards.extend(self.draw_deck.iter().copied());
        cards.push(self.trump_card);
        cards
    }
}

/// Раздать перемешанную колоду.
///
/// Колода должна ровно совпадать с колодой правил, иначе `MalformedDeck`.
/// Порядок: первые `hand_size` карт игроку 0, следующие — игроку 1,
/// следующая — козырь, остальное — колода добора. Первый игрок тоже
/// выбирается через `rng`, так что при одинаковом seed раздача одинакова.
pub fn deal<R: RandomSource>(
    mut deck: Deck,
    rng: &mut R,
    rules: &RuleConfig,
) -> Result<Deal, EngineError> {
    rules.validate()?;
    if !deck.is_permutation_of(&Deck::build(rules)) {
        return Err(EngineError::MalformedDeck(format!(
            "ожидалось {} карт колоды, передано {}",
            rules.deck_size(),
            deck.len()
        )));
    }

    rng.shuffle(&mut deck.cards);

    let hand0 = deck.draw_n(rules.hand_size);
    let hand1 = deck.draw_n(rules.hand_size);
    let trump_card = deck
        .draw_one()
        .ok_or_else(|| EngineError::MalformedDeck("не осталось карты для козыря".into()))?;
    let first_player = rng.gen_index(PLAYERS);

    debug!(
        trump = %trump_card,
        first_player,
        draw_deck = deck.len(),
        "раздача готова"
    );

    Ok(Deal {
        rules: rules.clone(),
        hands: [hand0, hand1],
        draw_deck: deck.cards.into(),
        trump_card,
        first_player,
    })
}

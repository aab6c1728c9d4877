// tests/common/mod.rs
//
// Общие помощники для интеграционных тестов: логирование, фикстуры раздач,
// случайный прогон партии.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use fox_engine::domain::{Card, Deck, RuleConfig};
use fox_engine::engine::{Deal, GameState, Play, RandomSource};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Логи для тестов. Уровень: TEST_LOG -> RUST_LOG -> "warn".
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Простой детерминированный RNG для тестов:
/// shuffle ничего не делает => колода остаётся в стандартном порядке,
/// первым ходит игрок 0.
#[derive(Default)]
pub struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }

    fn gen_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// Карта из токена: `c("9h")`.
pub fn c(token: &str) -> Card {
    token.parse().expect("valid card token in test")
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| c(t)).collect()
}

/// Компактная раздача с известной раскладкой:
///   P0: 1h 3h 5h 7h 9h 11h
///   P1: 1s 3s 5s 7s 9s 11s
///   козырь: 7c
///   добор: 1c 3c 5c 9c 11c
/// Первым ходит P0.
pub fn scripted_deal() -> Deal {
    Deal::from_parts(
        RuleConfig::compact(),
        [
            cards(&["1h", "3h", "5h", "7h", "9h", "11h"]),
            cards(&["1s", "3s", "5s", "7s", "9s", "11s"]),
        ],
        cards(&["1c", "3c", "5c", "9c", "11c"]),
        c("7c"),
        0,
    )
    .expect("scripted deal is valid")
}

/// Классическая раздача для проверки хода в масть:
///   P0: 11s 2s 1h..11h
///   P1: 1s 3s..10s 1c 2c 3c 4c
///   козырь: 5c, добор: 6c..11c. Первым ходит P0.
pub fn scripted_classic_deal() -> Deal {
    let mut hand0 = cards(&["11s", "2s"]);
    hand0.extend((1..=11).map(|r| c(&format!("{r}h"))));

    let mut hand1 = cards(&["1s"]);
    hand1.extend((3..=10).map(|r| c(&format!("{r}s"))));
    hand1.extend(cards(&["1c", "2c", "3c", "4c"]));

    let draw: Vec<Card> = (6..=11).map(|r| c(&format!("{r}c"))).collect();

    Deal::from_parts(RuleConfig::classic(), [hand0, hand1], draw, c("5c"), 0)
        .expect("scripted classic deal is valid")
}

/// Все ли карты колоды на месте, каждая ровно один раз.
pub fn assert_conservation(state: &GameState) {
    let mut seen = state.all_cards();
    let mut expected = Deck::build(&state.rules).cards;
    seen.sort_unstable();
    expected.sort_unstable();
    assert_eq!(seen, expected, "card conservation violated at step {}", state.steps);
}

/// Прогнать партию до конца случайными допустимыми ходами.
/// Возвращает журнал ходов и состояния после каждого хода (включая начальное).
pub fn random_playout<R: RandomSource>(deal: &Deal, rng: &mut R) -> (Vec<Play>, Vec<GameState>) {
    let mut state = GameState::from_deal(deal);
    let mut log = Vec::new();
    let mut states = vec![state.clone()];

    while let Some(player) = state.to_move() {
        let legal = state.legal_plays(player);
        assert!(!legal.is_empty(), "player {player} to move without legal plays");
        let card = legal[rng.gen_index(legal.len())];
        let play = Play::new(player, card);
        state = state.apply(play).expect("legal play must apply");
        log.push(play);
        states.push(state.clone());
    }

    (log, states)
}

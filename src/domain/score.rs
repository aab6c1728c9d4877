use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::rules::RuleConfig;
use crate::domain::{PlayerIndex, PLAYERS};

/// Итог партии. Удобно для истории/реплеера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummary {
    /// Взяток у каждого игрока (`len(discard) / 2`).
    pub tricks_won: [usize; PLAYERS],
    /// Очки за семёрки во взятках.
    pub treasure_points: [u32; PLAYERS],
    /// Очки по таблице взяток (0, если таблица пуста).
    pub band_points: [u32; PLAYERS],
    /// Итого.
    pub points: [u32; PLAYERS],
    /// Победитель; `None` при равенстве очков.
    pub winner: Option<PlayerIndex>,
}

/// Подсчёт очков по стопкам взяток.
///
/// Каждая семёрка во взятках — одно очко. Если у правил есть таблица
/// взяток, каждый игрок дополнительно получает очки своей ступени.
pub fn score_discards(discards: &[Vec<Card>; PLAYERS], rules: &RuleConfig) -> GameSummary {
    let mut tricks_won = [0usize; PLAYERS];
    let mut treasure_points = [0u32; PLAYERS];
    let mut band_points = [0u32; PLAYERS];
    let mut points = [0u32; PLAYERS];

    for p in 0..PLAYERS {
        tricks_won[p] = discards[p].len() / 2;
        treasure_points[p] = discards[p]
            .iter()
            .filter(|c| c.is_rank(Rank::TREASURE))
            .count() as u32;
        band_points[p] = rules.band_points(tricks_won[p]);
        points[p] = treasure_points[p] + band_points[p];
    }

    let winner = match points[0].cmp(&points[1]) {
        std::cmp::Ordering::Greater => Some(0),
        std::cmp::Ordering::Less => Some(1),
        std::cmp::Ordering::Equal => None,
    };

    GameSummary {
        tricks_won,
        treasure_points,
        band_points,
        points,
        winner,
    }
}

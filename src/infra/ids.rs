use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::GameId;

/// Простая генерация ID на основе монотонного счётчика.
/// Номера партий уникальны в пределах одного контроллера.
#[derive(Debug)]
pub struct IdGenerator {
    game_counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1.
    pub fn new() -> Self {
        Self {
            game_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_game_id(&self) -> GameId {
        self.game_counter.fetch_add(1, Ordering::Relaxed)
    }
}

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::GameId;
use crate::engine::{ControllerError, GameController, GameRecord, RandomSource};

/// Ошибки слоя хранения.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("битый JSON записи партии: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Controller(#[from] ControllerError),
}

/// Абстракция хранилища партий.
///
/// Хранится только `(раздача, журнал ходов)` — состояние всегда
/// восстанавливается реплеем. Удобно:
/// - для интеграционных тестов контроллера,
/// - для сервера партий, который переживает рестарт.
pub trait GameStorage {
    /// Загрузить запись партии.
    fn load_game(&self, id: GameId) -> Option<GameRecord>;

    /// Сохранить запись партии (перезаписывает старую).
    fn save_game(&mut self, id: GameId, record: &GameRecord);

    /// Удалить запись.
    fn remove_game(&mut self, id: GameId) -> bool;

    /// Все сохранённые id.
    fn game_ids(&self) -> Vec<GameId>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryGameStorage {
    games: HashMap<GameId, GameRecord>,
}

impl InMemoryGameStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStorage for InMemoryGameStorage {
    fn load_game(&self, id: GameId) -> Option<GameRecord> {
        self.games.get(&id).cloned()
    }

    fn save_game(&mut self, id: GameId, record: &GameRecord) {
        self.games.insert(id, record.clone());
    }

    fn remove_game(&mut self, id: GameId) -> bool {
        self.games.remove(&id).is_some()
    }

    fn game_ids(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self.games.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Запись партии в JSON (карты — wire-токенами).
pub fn record_to_json(record: &GameRecord) -> Result<String, StorageError> {
    Ok(serde_json::to_string(record)?)
}

/// Запись партии из JSON. Раздача и журнал здесь ещё не проверяются —
/// это делает `GameController::import`.
pub fn record_from_json(json: &str) -> Result<GameRecord, StorageError> {
    Ok(serde_json::from_str(json)?)
}

/// Снять партию из контроллера и положить в хранилище.
pub fn persist_game<R: RandomSource, S: GameStorage>(
    controller: &GameController<R>,
    storage: &mut S,
    game_id: GameId,
) -> Result<(), StorageError> {
    let record = controller.export(game_id)?;
    storage.save_game(game_id, &record);
    Ok(())
}

/// Загрузить все партии из хранилища в контроллер.
/// Возвращает пары (id в хранилище, новый id в контроллере).
pub fn restore_games<R: RandomSource, S: GameStorage>(
    controller: &GameController<R>,
    storage: &S,
) -> Result<Vec<(GameId, GameId)>, StorageError> {
    let mut restored = Vec::new();
    for stored_id in storage.game_ids() {
        if let Some(record) = storage.load_game(stored_id) {
            let new_id = controller.import(record)?;
            restored.push((stored_id, new_id));
        }
    }
    Ok(restored)
}

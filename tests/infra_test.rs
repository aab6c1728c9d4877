// tests/infra_test.rs
//
// Инфраструктура: ID, хранилище записей партий, JSON-формат записи.

mod common;

use common::{c, init_logging, scripted_deal};
use fox_engine::domain::RuleConfig;
use fox_engine::engine::GameController;
use fox_engine::infra::{
    persist_game, record_from_json, record_to_json, restore_games, DeterministicRng,
    GameStorage, IdGenerator, InMemoryGameStorage, StorageError,
};

fn controller(seed: u64) -> GameController<DeterministicRng> {
    init_logging();
    GameController::new(RuleConfig::compact(), DeterministicRng::from_seed(seed)).unwrap()
}

#[test]
fn id_generator_is_monotonic() {
    let ids = IdGenerator::new();
    assert_eq!(ids.next_game_id(), 1);
    assert_eq!(ids.next_game_id(), 2);
}

#[test]
fn in_memory_storage_basic_ops() {
    let ctl = controller(1);
    let (id, _) = ctl.new_game_with_deal(scripted_deal()).unwrap();
    let record = ctl.export(id).unwrap();

    let mut storage = InMemoryGameStorage::new();
    assert!(storage.load_game(id).is_none());

    storage.save_game(id, &record);
    assert_eq!(storage.load_game(id), Some(record));
    assert_eq!(storage.game_ids(), vec![id]);

    assert!(storage.remove_game(id));
    assert!(!storage.remove_game(id));
    assert!(storage.game_ids().is_empty());
}

#[test]
fn record_json_uses_card_tokens() {
    let ctl = controller(1);
    let (id, _) = ctl.new_game_with_deal(scripted_deal()).unwrap();
    ctl.apply_play(id, 0, c("7h")).unwrap();
    let record = ctl.export(id).unwrap();

    let json = record_to_json(&record).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["deal"]["trump_card"], "7c");
    assert_eq!(value["deal"]["hands"][1][0], "1s");
    assert_eq!(value["plays"][0]["card"], "7h");
    assert_eq!(value["plays"][0]["player"], 0);

    assert_eq!(record_from_json(&json).unwrap(), record);
}

#[test]
fn broken_json_is_storage_error() {
    assert!(matches!(
        record_from_json(r#"{"deal": 1}"#),
        Err(StorageError::Json(_))
    ));
}

#[test]
fn persist_and_restore_games() {
    let source = controller(5);
    let (a, _) = source.new_game().unwrap();
    let (b, _) = source.new_game_with_deal(scripted_deal()).unwrap();
    source.apply_play(b, 0, c("3h")).unwrap();
    source.apply_play(b, 0, c("11h")).unwrap();

    let mut storage = InMemoryGameStorage::new();
    persist_game(&source, &mut storage, a).unwrap();
    persist_game(&source, &mut storage, b).unwrap();
    assert!(persist_game(&source, &mut storage, 77).is_err());

    let target = controller(6);
    let restored = restore_games(&target, &storage).unwrap();
    assert_eq!(restored.len(), 2);

    for (stored, new_id) in restored {
        assert_eq!(
            target.get_state(new_id, None).unwrap(),
            source.get_state(stored, None).unwrap()
        );
    }
}

//! Integration tests for persisting board state

use ikanban::{
    board::{CreateBoard, SetBoardBackground},
    card::CreateCard,
    column::CreateColumn,
    storage::{JsonFileStorage, StorageError},
    types::{Background, BackgroundKind, ChecklistItem, Link},
    BoardConfig, BoardError, BoardStore, Execute,
};
use tempfile::TempDir;

#[test]
fn test_state_roundtrips_through_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state").join("board.json");

    let saved = {
        let storage = JsonFileStorage::open(&path).unwrap();
        let mut store = BoardStore::open(Box::new(storage), BoardConfig::default()).unwrap();
        CreateBoard::new("Home").execute(&mut store).into_result().unwrap();
        SetBoardBackground::new(Background::new(
            BackgroundKind::Image,
            "https://example.com/bg.jpg",
        ))
        .execute(&mut store)
        .into_result()
        .unwrap();
        let col = CreateColumn::new("Todo").execute(&mut store).into_result().unwrap();
        CreateCard::new(col["id"].as_str().unwrap(), "Groceries")
            .with_checklist(vec![ChecklistItem::new("milk").checked(true)])
            .with_links(vec![Link::new("https://shop.example")])
            .execute(&mut store)
            .into_result()
            .unwrap();
        store.state().clone()
    };

    let storage = JsonFileStorage::open(&path).unwrap();
    let store = BoardStore::open(Box::new(storage), BoardConfig::default()).unwrap();
    assert_eq!(store.state(), &saved);
    assert_eq!(store.current_board().unwrap().name, "Home");

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["version"], 1);
    assert_eq!(raw["boards"][0]["background"]["kind"], "image");
}

#[test]
fn test_quota_error_keeps_memory_state() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("board.json");
    let storage = JsonFileStorage::open(&path).unwrap().with_quota(64);
    let mut store = BoardStore::open(Box::new(storage), BoardConfig::default()).unwrap();

    let err = CreateBoard::new("A board whose snapshot will not fit")
        .execute(&mut store)
        .into_result()
        .unwrap_err();

    assert!(err.is_storage());
    assert!(matches!(
        err,
        BoardError::Storage(StorageError::QuotaExceeded { limit: 64, .. })
    ));
    assert_eq!(store.state().boards.len(), 1);
    assert!(!path.exists());
}

#[test]
fn test_second_store_on_same_file_is_refused() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("board.json");
    let _first = JsonFileStorage::open(&path).unwrap();

    let err = JsonFileStorage::open(&path).unwrap_err();
    assert!(matches!(err, StorageError::LockBusy { .. }));
    assert!(BoardError::from(err).is_retryable());
}

#[test]
fn test_legacy_camel_case_selection_loads() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("board.json");
    std::fs::write(
        &path,
        r##"{"currentBoardId": "b1", "boards": [{"id": "b1", "name": "Old",
            "background": {"type": "color", "value": "#fff"}, "columns": []}]}"##,
    )
    .unwrap();

    let storage = JsonFileStorage::open(&path).unwrap();
    let store = BoardStore::open(Box::new(storage), BoardConfig::default()).unwrap();
    let board = store.current_board().unwrap();
    assert_eq!(board.name, "Old");
    assert_eq!(board.background.kind, BackgroundKind::Color);
    assert!(!board.archived);
}

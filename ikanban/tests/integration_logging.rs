//! Integration tests for activity logging

use ikanban::{
    board::{CreateBoard, GetBoard, ListBoards},
    card::{CreateCard, MoveCard},
    column::CreateColumn,
    storage::JsonFileStorage,
    dispatch::execute_json,
    BoardConfig, BoardOperationProcessor, BoardStore, OperationProcessor,
};
use serde_json::json;
use tempfile::TempDir;

fn open(path: &std::path::Path) -> BoardStore {
    let storage = JsonFileStorage::open(path).unwrap();
    BoardStore::open(Box::new(storage), BoardConfig::default()).unwrap()
}

#[test_log::test]
fn test_activity_logging_end_to_end() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("board.json");
    let mut store = open(&path);
    let processor = BoardOperationProcessor::with_actor("tester");

    processor.process(&CreateBoard::new("Home"), &mut store).unwrap();
    let todo = processor
        .process(&CreateColumn::new("Todo"), &mut store)
        .unwrap();
    let todo = todo["id"].as_str().unwrap().to_string();
    let card = processor
        .process(&CreateCard::new(todo.as_str(), "Write tests"), &mut store)
        .unwrap();
    let card = card["id"].as_str().unwrap().to_string();
    processor
        .process(
            &MoveCard::new(card.as_str(), todo.as_str(), todo.as_str()).to_index(0),
            &mut store,
        )
        .unwrap();

    // Queries are not logged
    processor.process(&GetBoard::current(), &mut store).unwrap();
    processor.process(&ListBoards::default(), &mut store).unwrap();

    let entries = store.read_activity(None).unwrap();
    let ops: Vec<_> = entries.iter().map(|e| e.op.as_str()).collect();
    assert_eq!(
        ops,
        vec!["move card", "create card", "create column", "create board"]
    );
    assert!(entries.iter().all(|e| e.actor.as_deref() == Some("tester")));
    assert!(entries[0].affected.contains(&card));

    let activity_path = path.with_extension("activity.jsonl");
    assert!(
        activity_path.exists(),
        "activity log should exist at {:?}",
        activity_path
    );
}

#[test_log::test]
fn test_activity_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("board.json");

    {
        let mut store = open(&path);
        let processor = BoardOperationProcessor::new();
        processor.process(&CreateBoard::new("Home"), &mut store).unwrap();
        // fails: column does not exist, still recorded
        processor
            .process(&CreateCard::new("ghost", "x"), &mut store)
            .unwrap_err();
    }

    let store = open(&path);
    let entries = store.read_activity(Some(10)).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].is_error());
    assert_eq!(entries[1].op, "create board");
    assert_eq!(store.state().boards.len(), 1);
}

#[test_log::test]
fn test_unwritable_activity_log_does_not_fail_committed_batch() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("board.json");
    std::fs::create_dir(path.with_extension("activity.jsonl")).unwrap();
    let mut store = open(&path);

    let results = execute_json(
        json!([
            { "op": "create board", "name": "A" },
            { "op": "create board", "name": "B" },
        ]),
        &mut store,
        &BoardOperationProcessor::new(),
    )
    .unwrap();
    assert_eq!(results.as_array().unwrap().len(), 2);
    drop(store);

    let store = open(&path);
    let names: Vec<_> = store.state().boards.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

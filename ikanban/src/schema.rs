//! Schema document for board operations
//!
//! Wraps the generic generator from `ikanban-operations` with the board
//! operation list, verb aliases and usage examples.

use crate::activity::ListActivity;
use crate::board::{
    ArchiveBoard, CreateBoard, DeleteBoard, GetBoard, ListArchivedBoards, ListBoards,
    SelectBoard, SetBoardBackground, UnarchiveBoard,
};
use crate::card::{
    ArchiveCard, CreateCard, DeleteArchivedCard, DeleteCard, ListArchivedCards, MoveCard,
    UnarchiveCard, UpdateCard,
};
use crate::column::{CreateColumn, DeleteColumn, ReorderColumns};
use crate::task::{GetTaskFeed, ToggleTask};
use crate::types::{Background, CardFields, Verb};
use ikanban_operations::{generate_schema, Operation, SchemaConfig};
use serde_json::{json, Value};

/// One instance of every board operation, for metadata
pub fn operations() -> Vec<Box<dyn Operation>> {
    vec![
        Box::new(CreateBoard::new("")),
        Box::new(ArchiveBoard::new("")),
        Box::new(UnarchiveBoard::new("")),
        Box::new(DeleteBoard::new("")),
        Box::new(SetBoardBackground::new(Background::color(""))),
        Box::new(SelectBoard::new("")),
        Box::new(GetBoard::current()),
        Box::new(ListBoards::default()),
        Box::new(ListArchivedBoards::default()),
        Box::new(CreateColumn::new("")),
        Box::new(DeleteColumn::new("")),
        Box::new(ReorderColumns::new(0, 0)),
        Box::new(CreateCard::new("", "")),
        Box::new(UpdateCard::new("", "", CardFields::new(""))),
        Box::new(DeleteCard::new("", "")),
        Box::new(ArchiveCard::new("", "")),
        Box::new(UnarchiveCard::new("", "", "")),
        Box::new(MoveCard::new("", "", "")),
        Box::new(ListArchivedCards::default()),
        Box::new(DeleteArchivedCard::new("", "", "")),
        Box::new(GetTaskFeed::default()),
        Box::new(ToggleTask::new("", "", "", 0, false)),
        Box::new(ListActivity::default()),
    ]
}

/// Generate the schema for every board operation
pub fn generate_board_schema() -> Value {
    let operations = operations();
    let refs: Vec<&dyn Operation> = operations.iter().map(|op| op.as_ref()).collect();

    let config = SchemaConfig::new(
        "Kanban board operations: boards, columns, cards, checklists and the task feed. \
         Accepts forgiving input with aliases and inference.",
    )
    .with_examples(examples())
    .with_verb_aliases(Verb::alias_map());

    generate_schema(&refs, config)
}

fn examples() -> Vec<Value> {
    vec![
        json!({
            "description": "Create a board and select it",
            "value": {"op": "create board", "name": "Home"}
        }),
        json!({
            "description": "Add a column to the current board",
            "value": {"add": "column", "name": "Todo"}
        }),
        json!({
            "description": "Create a card with a checklist",
            "value": {"op": "create card", "column_id": "01COL...", "title": "Groceries",
                      "checklist": ["milk", "eggs"], "due_date": "2025-01-31"}
        }),
        json!({
            "description": "Create a card - inferred from column and title",
            "value": {"columnId": "01COL...", "title": "Call the plumber"}
        }),
        json!({
            "description": "Move a card to the top of another column",
            "value": {"op": "move card", "card_id": "01CARD...", "from": "01COL...",
                      "to": "01DONE...", "target_index": 0}
        }),
        json!({
            "description": "Drag the first column to the end",
            "value": {"op": "reorder columns", "from_index": 0, "to_index": 2}
        }),
        json!({
            "description": "Tick a checklist item from the task feed",
            "value": {"op": "toggle task", "board_id": "01BOARD...", "column_id": "01COL...",
                      "card_id": "01CARD...", "item_index": 1, "checked": true}
        }),
        json!({
            "description": "Set an image background",
            "value": {"op": "set background", "kind": "image", "value": "https://example.com/bg.jpg"}
        }),
        json!({
            "description": "List archived cards across boards",
            "value": {"op": "list archived cards"}
        }),
    ]
}

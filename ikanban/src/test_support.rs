//! Shared setup for command tests

use crate::board::CreateBoard;
use crate::card::CreateCard;
use crate::column::CreateColumn;
use crate::types::{BoardId, CardId, ColumnId};
use crate::{BoardConfig, BoardStore};
use ikanban_operations::Execute;
use serde_json::Value;

pub fn store() -> BoardStore {
    BoardStore::in_memory(BoardConfig::default())
}

fn id_of(value: &Value) -> &str {
    value["id"].as_str().unwrap()
}

/// Create a board; it becomes the current board
pub fn board(store: &mut BoardStore, name: &str) -> BoardId {
    let result = CreateBoard::new(name).execute(store).into_result().unwrap();
    BoardId::from_string(id_of(&result))
}

/// Create a column on the current board
pub fn column(store: &mut BoardStore, name: &str) -> ColumnId {
    let result = CreateColumn::new(name).execute(store).into_result().unwrap();
    ColumnId::from_string(id_of(&result))
}

/// Create a card in a column of the current board
pub fn card(store: &mut BoardStore, column_id: &ColumnId, title: &str) -> CardId {
    let result = CreateCard::new(column_id.clone(), title)
        .execute(store)
        .into_result()
        .unwrap();
    CardId::from_string(id_of(&result))
}

/// Titles of the cards in a column of the current board, archived included
pub fn titles(store: &BoardStore, column_id: &ColumnId) -> Vec<String> {
    store
        .current_board()
        .and_then(|b| b.column(column_id))
        .map(|c| c.cards.iter().map(|card| card.title.clone()).collect())
        .unwrap_or_default()
}

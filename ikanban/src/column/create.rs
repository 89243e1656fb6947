//! CreateColumn command

use crate::command_input;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{BoardId, Column};
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Append a column to a board
#[operation(
    verb = "create",
    noun = "column",
    description = "Append a new column to a board"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateColumn {
    /// The column display name
    #[param(alias = "title")]
    pub name: String,
    /// Board to add to (defaults to the current board)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[param(alias = "board")]
    pub board_id: Option<BoardId>,
}

impl CreateColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board_id: None,
        }
    }

    pub fn with_board(mut self, board_id: impl Into<BoardId>) -> Self {
        self.board_id = Some(board_id.into());
        self
    }

    fn run(&self, ctx: &mut BoardStore) -> Result<Value> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(BoardError::missing_field("name"));
        }

        let board = ctx.target_board_mut(self.board_id.as_ref())?;
        let column = Column::new(name);
        let mut result = serde_json::to_value(&column)?;
        result["board_id"] = serde_json::json!(board.id);
        board.columns.push(column);

        ctx.commit()?;
        Ok(result)
    }
}

impl Execute<BoardStore, BoardError> for CreateColumn {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let result = self.run(ctx);
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        result
            .get("id")
            .and_then(|v| v.as_str())
            .map(|id| vec![id.to_string()])
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{board, store};

    #[test]
    fn test_create_column_appends() {
        let mut store = store();
        let id = board(&mut store, "Home");

        for name in ["Todo", "Doing", "Done"] {
            CreateColumn::new(name).execute(&mut store).into_result().unwrap();
        }

        let names: Vec<_> = store
            .board(&id)
            .unwrap()
            .columns
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, vec!["Todo", "Doing", "Done"]);
    }

    #[test]
    fn test_create_column_on_explicit_board() {
        let mut store = store();
        let first = board(&mut store, "First");
        board(&mut store, "Second");

        let result = CreateColumn::new("Backlog")
            .with_board(first.clone())
            .execute(&mut store)
            .into_result()
            .unwrap();

        assert_eq!(result["board_id"], first.as_str());
        assert_eq!(store.board(&first).unwrap().columns.len(), 1);
        assert!(store.current_board().unwrap().columns.is_empty());
    }

    #[test]
    fn test_create_column_needs_name_and_board() {
        let mut store = store();
        let err = CreateColumn::new("Todo").execute(&mut store).into_result().unwrap_err();
        assert!(matches!(err, BoardError::NoCurrentBoard));

        board(&mut store, "Home");
        let err = CreateColumn::new(" ").execute(&mut store).into_result().unwrap_err();
        assert!(err.is_validation());
    }
}

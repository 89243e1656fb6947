//! DeleteColumn command

use crate::command_input;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{BoardId, ColumnId};
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Delete a column together with its cards
#[operation(
    verb = "delete",
    noun = "column",
    description = "Delete a column and all of its cards"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    #[param(alias = "column_id")]
    pub id: ColumnId,
    /// Board the column is on (defaults to the current board)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[param(alias = "board")]
    pub board_id: Option<BoardId>,
}

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            board_id: None,
        }
    }

    pub fn with_board(mut self, board_id: impl Into<BoardId>) -> Self {
        self.board_id = Some(board_id.into());
        self
    }

    fn run(&self, ctx: &mut BoardStore) -> Result<Value> {
        let board = ctx.target_board_mut(self.board_id.as_ref())?;
        let index = board
            .column_index(&self.id)
            .ok_or_else(|| BoardError::column_not_found(&self.id))?;
        let column = board.columns.remove(index);

        ctx.commit()?;
        Ok(json!({
            "deleted": true,
            "id": self.id,
            "cards": column.cards.len(),
        }))
    }
}

impl Execute<BoardStore, BoardError> for DeleteColumn {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let result = self.run(ctx);
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.id.to_string()]
    }
}

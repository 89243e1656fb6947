//! DeleteBoard command

use crate::command_input;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::BoardId;
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;
use tracing::debug;

/// Permanently delete a board with all its columns and cards
#[operation(
    verb = "delete",
    noun = "board",
    description = "Permanently delete a board and everything on it"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteBoard {
    /// The board ID
    #[param(alias = "board_id")]
    pub id: BoardId,
}

impl DeleteBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }

    fn run(&self, ctx: &mut BoardStore) -> Result<Value> {
        let index = ctx
            .state()
            .board_index(&self.id)
            .ok_or_else(|| BoardError::board_not_found(&self.id))?;

        let board = ctx.boards_mut().remove(index);
        ctx.deselect(&self.id);
        debug!(id = %self.id, columns = board.columns.len(), "deleted board");

        ctx.commit()?;
        Ok(json!({
            "deleted": true,
            "id": self.id,
            "columns": board.columns.len(),
            "cards": board.card_count(),
        }))
    }
}

impl Execute<BoardStore, BoardError> for DeleteBoard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let result = self.run(ctx);
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.id.to_string()]
    }
}

//! ReorderColumns command

use crate::command_input;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{order, BoardId};
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;
use tracing::debug;

/// Drag a column to a new position
#[operation(
    verb = "reorder",
    noun = "columns",
    description = "Move the column at from_index to to_index (splice semantics)"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct ReorderColumns {
    /// Current position of the column
    #[param(alias = "from")]
    pub from_index: usize,
    /// Position in the sequence after removal; past the end appends
    #[param(alias = "to")]
    pub to_index: usize,
    /// Board to reorder (defaults to the current board)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[param(alias = "board")]
    pub board_id: Option<BoardId>,
}

impl ReorderColumns {
    pub fn new(from_index: usize, to_index: usize) -> Self {
        Self {
            from_index,
            to_index,
            board_id: None,
        }
    }

    pub fn with_board(mut self, board_id: impl Into<BoardId>) -> Self {
        self.board_id = Some(board_id.into());
        self
    }

    fn run(&self, ctx: &mut BoardStore) -> Result<Value> {
        let board = ctx.target_board_mut(self.board_id.as_ref())?;
        order::reorder(&mut board.columns, self.from_index, self.to_index, "column")?;
        debug!(board = %board.id, from = self.from_index, to = self.to_index, "reordered columns");

        let result = json!({
            "board_id": board.id,
            "columns": board.columns.iter().map(|c| &c.id).collect::<Vec<_>>(),
        });
        ctx.commit()?;
        Ok(result)
    }
}

impl Execute<BoardStore, BoardError> for ReorderColumns {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let result = self.run(ctx);
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        result
            .get("board_id")
            .and_then(|v| v.as_str())
            .map(|id| vec![id.to_string()])
            .unwrap_or_default()
    }
}

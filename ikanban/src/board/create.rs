//! CreateBoard command

use crate::command_input;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{Background, Board};
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

/// Create a board and make it the current board
#[operation(
    verb = "create",
    noun = "board",
    description = "Create a new board and select it"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateBoard {
    /// The board name
    #[param(alias = "title")]
    pub name: String,
}

impl CreateBoard {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn run(&self, ctx: &mut BoardStore) -> Result<Value> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(BoardError::missing_field("name"));
        }

        let board =
            Board::new(name).with_background(Background::default_for_theme(ctx.config().dark_mode));
        let result = serde_json::to_value(&board)?;
        debug!(id = %board.id, name, "creating board");

        ctx.set_current_board(Some(board.id.clone()));
        ctx.boards_mut().push(board);
        ctx.commit()?;
        Ok(result)
    }
}

impl Execute<BoardStore, BoardError> for CreateBoard {
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

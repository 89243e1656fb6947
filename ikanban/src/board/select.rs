//! SelectBoard command

use crate::command_input;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::BoardId;
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Make a board the current board
#[operation(
    verb = "select",
    noun = "board",
    description = "Make a board the current board"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct SelectBoard {
    /// The board ID
    #[param(alias = "board_id")]
    pub id: BoardId,
}

impl SelectBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }

    fn run(&self, ctx: &mut BoardStore) -> Result<Value> {
        if ctx.board(&self.id)?.archived {
            return Err(BoardError::BoardArchived {
                id: self.id.to_string(),
            });
        }
        ctx.set_current_board(Some(self.id.clone()));
        ctx.commit()?;
        Ok(json!({ "current_board_id": self.id }))
    }
}

impl Execute<BoardStore, BoardError> for SelectBoard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let result = self.run(ctx);
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }
}

//! SetBoardBackground command

use crate::command_input;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{Background, BoardId};
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Replace a board's background
#[operation(
    verb = "set",
    noun = "background",
    description = "Replace a board's background with a color, image url or inline image"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct SetBoardBackground {
    /// Board to change (defaults to the current board)
    #[param(alias = "board_id")]
    pub id: Option<BoardId>,
    /// The new background: {"kind": "color" | "image" | "file", "value": ...}
    #[param(alias = "bg")]
    pub background: Background,
}

impl SetBoardBackground {
    pub fn new(background: Background) -> Self {
        Self {
            id: None,
            background,
        }
    }

    pub fn with_board(mut self, id: impl Into<BoardId>) -> Self {
        self.id = Some(id.into());
        self
    }

    fn run(&self, ctx: &mut BoardStore) -> Result<Value> {
        let background = self.background.clone().validated()?;
        let board = ctx.target_board_mut(self.id.as_ref())?;
        board.background = background;
        let result = json!({ "id": board.id, "background": board.background });
        ctx.commit()?;
        Ok(result)
    }
}

impl Execute<BoardStore, BoardError> for SetBoardBackground {
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

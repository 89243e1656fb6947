//! ArchiveBoard and UnarchiveBoard commands

use crate::command_input;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::BoardId;
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;
use tracing::debug;

/// Set a board's archived flag; archiving the current board clears the selection
fn set_archived(ctx: &mut BoardStore, id: &BoardId, archived: bool) -> Result<Value> {
    ctx.board_mut(id)?.archived = archived;
    let deselected = archived && ctx.deselect(id);
    debug!(%id, archived, deselected, "board archive flag set");
    ctx.commit()?;
    Ok(json!({ "id": id, "archived": archived }))
}

/// Archive a board
#[operation(
    verb = "archive",
    noun = "board",
    description = "Archive a board, hiding it from the board list"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct ArchiveBoard {
    /// The board ID
    #[param(alias = "board_id")]
    pub id: BoardId,
}

impl ArchiveBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardStore, BoardError> for ArchiveBoard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let result = set_archived(ctx, &self.id, true);
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.id.to_string()]
    }
}

/// Restore an archived board
#[operation(
    verb = "unarchive",
    noun = "board",
    description = "Restore an archived board"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct UnarchiveBoard {
    /// The board ID
    #[param(alias = "board_id")]
    pub id: BoardId,
}

impl UnarchiveBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardStore, BoardError> for UnarchiveBoard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let result = set_archived(ctx, &self.id, false);
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.id.to_string()]
    }
}

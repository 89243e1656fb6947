//! GetTaskFeed command

use crate::error::BoardError;
use crate::store::BoardStore;
use ikanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every checklist item on every active board, grouped by board and card
#[operation(
    verb = "get",
    noun = "tasks",
    description = "Get the task feed with checklist totals across all boards"
)]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GetTaskFeed {}

impl Execute<BoardStore, BoardError> for GetTaskFeed {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        ExecutionResult::unlogged(serde_json::to_value(ctx.task_feed()).map_err(BoardError::from))
    }
}

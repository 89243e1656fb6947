//! ListActivity command

use crate::error::BoardError;
use crate::store::BoardStore;
use ikanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Recent activity, newest first
#[operation(
    verb = "list",
    noun = "activity",
    description = "List recorded operations, newest first"
)]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListActivity {
    /// Maximum number of entries (defaults to the configured activity limit)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[param(alias = "count")]
    pub limit: Option<usize>,
}

impl ListActivity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Execute<BoardStore, BoardError> for ListActivity {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let limit = self.limit.unwrap_or(ctx.config().activity_limit);
        ExecutionResult::unlogged(ctx.read_activity(Some(limit)).and_then(|entries| {
            Ok(json!({
                "count": entries.len(),
                "entries": serde_json::to_value(&entries)?,
            }))
        }))
    }
}

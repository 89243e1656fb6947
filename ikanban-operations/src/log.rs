//! Log entry type for the activity log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One executed operation, as recorded in the activity log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique ID for this log entry (ULID format)
    pub id: String,

    /// When the operation occurred
    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g., "create card", "move card")
    pub op: String,

    /// The normalized input parameters (as JSON)
    pub input: Value,

    /// The result value or `{"error": ...}`
    pub output: Value,

    /// Who performed the operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// Ids of the boards, columns or cards the operation touched
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affected: Vec<String>,

    pub duration_ms: u64,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(
        op: impl Into<String>,
        input: Value,
        output: Value,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor,
            affected: Vec::new(),
            duration_ms,
        }
    }

    /// Set the actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Record the resources touched by the operation
    pub fn with_affected(mut self, affected: Vec<String>) -> Self {
        self.affected = affected;
        self
    }

    /// Whether this entry records a failed operation
    pub fn is_error(&self) -> bool {
        self.output.get("error").is_some()
    }
}

//! Execution result types for operations

use crate::LogEntry;
use serde_json::{json, Value};
use std::fmt::Display;
use std::time::Instant;

/// Result of executing an operation
///
/// Distinguishes between:
/// - Logged: the operation changed state and belongs in the activity log
/// - Unlogged: read-only queries and no-op outcomes
/// - Failed: errors, logged when the operation would have mutated state
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    /// Operation succeeded and should be logged
    Logged { value: T, log_entry: LogEntry },
    /// Operation succeeded but no logging needed
    Unlogged { value: T },
    /// Operation failed
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<E: Display> ExecutionResult<Value, E> {
    /// Wrap the outcome of a mutating operation, timing it from `started`.
    ///
    /// Both success and failure produce a log entry carrying the op string and
    /// the normalized input.
    pub fn logged(
        op: impl Into<String>,
        input: Value,
        started: Instant,
        result: Result<Value, E>,
    ) -> Self {
        let duration_ms = started.elapsed().as_millis() as u64;
        let op = op.into();
        match result {
            Ok(value) => Self::Logged {
                log_entry: LogEntry::new(op, input, value.clone(), None, duration_ms),
                value,
            },
            Err(error) => {
                let output = json!({ "error": error.to_string() });
                Self::Failed {
                    log_entry: Some(LogEntry::new(op, input, output, None, duration_ms)),
                    error,
                }
            }
        }
    }

    /// Wrap the outcome of a read-only operation. Failures are not logged.
    pub fn unlogged(result: Result<Value, E>) -> Self {
        match result {
            Ok(value) => Self::Unlogged { value },
            Err(error) => Self::Failed {
                error,
                log_entry: None,
            },
        }
    }
}

impl<T, E> ExecutionResult<T, E> {
    /// Extract the result (Ok or Err)
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Logged { value, .. } => Ok(value),
            Self::Unlogged { value } => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    /// Get the value and log entry separately
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    /// Check if this should be logged
    pub fn should_log(&self) -> bool {
        matches!(
            self,
            Self::Logged { .. }
                | Self::Failed {
                    log_entry: Some(_),
                    ..
                }
        )
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

//! Board operation processor
//!
//! Executes commands against a [`BoardStore`] and appends their log entries to
//! the store's activity log. The activity log is best effort: by the time an
//! entry is written the command has already committed, so a failed append is
//! logged and never becomes the command's error.

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use ikanban_operations::{LogEntry, OperationProcessor};
use tracing::{debug, warn};

/// Processor that records every logged operation in the activity log
#[derive(Debug, Clone, Default)]
pub struct BoardOperationProcessor {
    actor: Option<String>,
}

impl BoardOperationProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute every logged operation to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }
}

impl OperationProcessor<BoardStore, BoardError> for BoardOperationProcessor {
    fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    fn write_log(&self, ctx: &mut BoardStore, log_entry: &LogEntry) -> Result<()> {
        if log_entry.is_error() {
            debug!(op = %log_entry.op, "recording failed operation");
        }
        if let Err(e) = ctx.append_activity(log_entry) {
            warn!(op = %log_entry.op, error = %e, "failed to write activity log");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CreateBoard, ListBoards};
    use crate::column::CreateColumn;
    use crate::test_support::store;

    #[test]
    fn test_mutations_are_recorded_with_actor() {
        let mut store = store();
        let processor = BoardOperationProcessor::with_actor("alice");

        let board = processor.process(&CreateBoard::new("Home"), &mut store).unwrap();
        processor.process(&ListBoards::default(), &mut store).unwrap();

        let entries = store.read_activity(None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].op, "create board");
        assert_eq!(entries[0].actor.as_deref(), Some("alice"));
        assert_eq!(entries[0].affected, vec![board["id"].as_str().unwrap().to_string()]);
    }

    #[test]
    fn test_failures_are_recorded() {
        let mut store = store();
        let processor = BoardOperationProcessor::new();

        let err = processor
            .process(&CreateColumn::new("Todo"), &mut store)
            .unwrap_err();
        assert!(matches!(err, BoardError::NoCurrentBoard));

        let entries = store.read_activity(None).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_error());
        assert!(entries[0].actor.is_none());
    }
}

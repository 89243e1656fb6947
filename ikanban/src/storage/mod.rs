//! Persistence collaborator
//!
//! The store hands the whole [`BoardState`] to [`Storage::save`] after every
//! mutation and calls [`Storage::load`] once when it opens. Backends may also
//! keep the activity log.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::types::BoardState;
use ikanban_operations::LogEntry;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// The serialized snapshot does not fit the configured quota
    #[error("storage quota exceeded: {size} bytes > {limit} bytes")]
    QuotaExceeded { size: u64, limit: u64 },

    /// Another process holds the state lock
    #[error("lock busy: {} is held by another process", path.display())]
    LockBusy { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot or log entry failed to (de)serialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Save/load of full-state snapshots
pub trait Storage {
    /// The last saved snapshot, or `None` when nothing was ever saved
    fn load(&self) -> Result<Option<BoardState>, StorageError>;

    /// Replace the stored snapshot
    fn save(&mut self, state: &BoardState) -> Result<(), StorageError>;

    /// Record one executed operation. Backends without a log drop it.
    fn append_activity(&mut self, _entry: &LogEntry) -> Result<(), StorageError> {
        Ok(())
    }

    /// Logged operations, newest first
    fn read_activity(&self, _limit: Option<usize>) -> Result<Vec<LogEntry>, StorageError> {
        Ok(Vec::new())
    }
}

/// Fail when `size` exceeds a configured quota
fn check_quota(size: usize, quota: Option<u64>) -> Result<(), StorageError> {
    match quota {
        Some(limit) if size as u64 > limit => Err(StorageError::QuotaExceeded {
            size: size as u64,
            limit,
        }),
        _ => Ok(()),
    }
}

/// The bytes a backend stores for `state`, checked against `quota`.
///
/// Every backend measures and stores this same pretty-printed form.
pub(crate) fn encode_snapshot(
    state: &BoardState,
    quota: Option<u64>,
) -> Result<String, StorageError> {
    let content = serde_json::to_string_pretty(state)?;
    check_quota(content.len(), quota)?;
    Ok(content)
}

/// Newest-first slice of an oldest-first log
pub(crate) fn newest_first(mut entries: Vec<LogEntry>, limit: Option<usize>) -> Vec<LogEntry> {
    entries.reverse();
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}

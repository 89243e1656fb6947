//! In-memory storage for tests and embedding

use super::{encode_snapshot, newest_first, Storage, StorageError};
use crate::types::BoardState;
use ikanban_operations::LogEntry;

/// Keeps the last snapshot as serialized JSON, the way a browser's local
/// storage keeps a string.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    snapshot: Option<String>,
    activity: Vec<LogEntry>,
    quota: Option<u64>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot
    pub fn with_state(state: &BoardState) -> Result<Self, StorageError> {
        Ok(Self {
            snapshot: Some(encode_snapshot(state, None)?),
            ..Default::default()
        })
    }

    /// Reject snapshots larger than `bytes`
    pub fn with_quota(mut self, bytes: u64) -> Self {
        self.quota = Some(bytes);
        self
    }

    pub fn set_quota(&mut self, bytes: Option<u64>) {
        self.quota = bytes;
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// The raw stored snapshot
    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<BoardState>, StorageError> {
        self.snapshot
            .as_deref()
            .map(|json| serde_json::from_str(json))
            .transpose()
            .map_err(StorageError::from)
    }

    fn save(&mut self, state: &BoardState) -> Result<(), StorageError> {
        self.snapshot = Some(encode_snapshot(state, self.quota)?);
        self.saves += 1;
        Ok(())
    }

    fn append_activity(&mut self, entry: &LogEntry) -> Result<(), StorageError> {
        self.activity.push(entry.clone());
        Ok(())
    }

    fn read_activity(&self, limit: Option<usize>) -> Result<Vec<LogEntry>, StorageError> {
        Ok(newest_first(self.activity.clone(), limit))
    }
}

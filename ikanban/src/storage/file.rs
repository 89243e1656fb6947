//! Single-file JSON storage with an advisory lock and a JSONL activity log

use super::{encode_snapshot, newest_first, Storage, StorageError};
use crate::types::BoardState;
use fs2::FileExt;
use ikanban_operations::LogEntry;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Snapshot in `<name>.json`, activity in `<name>.activity.jsonl`, lock in `<name>.lock`.
///
/// The lock is taken in [`JsonFileStorage::open`] and held until the storage
/// is dropped.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    quota: Option<u64>,
    _lock: StorageLock,
}

impl JsonFileStorage {
    /// Open (or prepare) the state file at `path`. Fails with
    /// [`StorageError::LockBusy`] if another process has it open.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let lock = StorageLock::acquire(&path.with_extension("lock"))?;
        tracing::debug!(path = %path.display(), "opened state file");
        Ok(Self {
            path,
            quota: None,
            _lock: lock,
        })
    }

    /// Reject snapshots larger than `bytes`
    pub fn with_quota(mut self, bytes: u64) -> Self {
        self.quota = Some(bytes);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn activity_path(&self) -> PathBuf {
        self.path.with_extension("activity.jsonl")
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Option<BoardState>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&mut self, state: &BoardState) -> Result<(), StorageError> {
        let content = encode_snapshot(state, self.quota)?;
        atomic_write(&self.path, content.as_bytes())
    }

    fn append_activity(&mut self, entry: &LogEntry) -> Result<(), StorageError> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.activity_path())?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn read_activity(&self, limit: Option<usize>) -> Result<Vec<LogEntry>, StorageError> {
        let path = self.activity_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let entries = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str(line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable activity line");
                    None
                }
            })
            .collect();

        Ok(newest_first(entries, limit))
    }
}

/// RAII lock guard - releases on drop
#[derive(Debug)]
struct StorageLock {
    file: fs::File,
}

impl StorageLock {
    /// Non-blocking exclusive lock on `path`
    fn acquire(path: &Path) -> Result<Self, StorageError> {
        let file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Self { file }),
            Err(_) => Err(StorageError::LockBusy {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl Drop for StorageLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

/// Atomic write via temp file and rename
fn atomic_write(path: &Path, content: &[u8]) -> Result<(), StorageError> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

//! # ikanban
//!
//! A single-user kanban board store: boards hold ordered columns, columns
//! hold ordered cards, cards carry checklists, links and due dates.
//!
//! ## Architecture
//!
//! Every operation is a command struct implementing
//! `Execute<BoardStore, BoardError>`. [`BoardStore`] owns the state and the
//! [`storage::Storage`] collaborator and only offers primitives and queries;
//! commands do the work and call [`BoardStore::commit`] after mutating.
//!
//! ```ignore
//! use ikanban::{board::CreateBoard, column::CreateColumn, BoardStore, BoardConfig};
//! use ikanban_operations::Execute;
//!
//! let mut store = BoardStore::in_memory(BoardConfig::default());
//! CreateBoard::new("Home").execute(&mut store).into_result()?;
//! CreateColumn::new("Todo").execute(&mut store).into_result()?;
//! ```
//!
//! JSON input goes through [`dispatch::execute_json`], which accepts several
//! spellings of each operation (see [`parse`]).

pub mod activity;
pub mod board;
pub mod card;
pub mod column;
pub mod config;
pub mod dispatch;
mod error;
mod logging;
pub mod parse;
pub mod processor;
pub mod schema;
pub mod storage;
mod store;
pub mod task;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{BoardConfig, ConfigError};
pub use error::{BoardError, Result};
pub use logging::Pretty;
pub use processor::BoardOperationProcessor;
pub use store::BoardStore;

// Re-export operations framework types
pub use ikanban_operations::{Execute, ExecutionResult, LogEntry, Operation, OperationProcessor};

/// Serialized command parameters, recorded as the log entry input
pub(crate) fn command_input<T: serde::Serialize>(command: &T) -> serde_json::Value {
    serde_json::to_value(command).unwrap_or_default()
}

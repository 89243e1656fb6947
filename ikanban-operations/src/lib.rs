//! # ikanban operations
//!
//! Commands in ikanban are plain structs whose fields ARE the parameters.
//! The `#[operation]` attribute derives the [`Operation`] metadata from the
//! struct definition, and the command implements [`Execute`] against whatever
//! context it needs.
//!
//! Execution is synchronous: a command receives exclusive access to its
//! context, does its work and reports back through [`ExecutionResult`].
//!
//! ## Example
//!
//! ```ignore
//! use ikanban_operations::*;
//!
//! #[operation(verb = "create", noun = "column", description = "Add a column to a board")]
//! #[derive(Debug, Deserialize, Serialize)]
//! pub struct CreateColumn {
//!     /// The column name
//!     pub name: String,
//!     /// Board to add the column to (defaults to the current board)
//!     #[param(alias = "board")]
//!     pub board_id: Option<String>,
//! }
//!
//! impl Execute<BoardStore, BoardError> for CreateColumn {
//!     fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
//!         // mutate, commit, and return ExecutionResult::Logged
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod parameter;
mod processor;
mod schema;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation, OperationMeta};
pub use parameter::{ParamMeta, ParamType};
pub use processor::OperationProcessor;
pub use schema::{generate_schema, SchemaConfig};

// Re-export the proc macro
pub use ikanban_operations_macros::operation;

// Re-export for use in implementations
pub use serde_json::Value;

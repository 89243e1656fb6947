//! Operation processing: execute, attribute, and record

use crate::{Execute, LogEntry};
use serde_json::Value;

/// Runs operations and routes their log entries to a sink
///
/// Implementors decide where log entries go (`write_log`) and who performed
/// the operation (`actor`); `process` ties execution and logging together.
pub trait OperationProcessor<C, E> {
    /// Actor recorded on every log entry, if any
    fn actor(&self) -> Option<&str> {
        None
    }

    /// Persist one log entry
    fn write_log(&self, ctx: &mut C, log_entry: &LogEntry) -> Result<(), E>;

    /// Execute `operation` and write its log entry, if it produced one.
    ///
    /// A failure to write the log of a failed operation is dropped in favour of
    /// the operation's own error.
    fn process<T>(&self, operation: &T, ctx: &mut C) -> Result<Value, E>
    where
        T: Execute<C, E>,
    {
        let (result, log_entry) = operation.execute(ctx).split();

        let Some(mut entry) = log_entry else {
            return result;
        };
        if let Some(actor) = self.actor() {
            entry = entry.with_actor(actor);
        }

        match result {
            Ok(value) => {
                let entry = entry.with_affected(operation.affected_resource_ids(&value));
                self.write_log(ctx, &entry)?;
                Ok(value)
            }
            Err(error) => {
                let _ = self.write_log(ctx, &entry);
                Err(error)
            }
        }
    }
}

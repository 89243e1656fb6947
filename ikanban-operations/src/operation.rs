//! Operation metadata and execution traits

use crate::{ExecutionResult, ParamMeta};
use serde_json::Value;

/// Metadata every command exposes, derived by `#[operation]`
pub trait Operation {
    /// The action, e.g. "create", "move", "toggle"
    fn verb(&self) -> &'static str;

    /// The entity acted on, e.g. "board", "card", "task"
    fn noun(&self) -> &'static str;

    /// One-line description for help output and schemas
    fn description(&self) -> &'static str;

    /// Parameter metadata, one entry per struct field
    fn parameters(&self) -> &'static [ParamMeta];

    /// Canonical op string, "verb noun"
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Metadata available without an instance, for decoding input into `Self`
pub trait OperationMeta {
    const VERB: &'static str;
    const NOUN: &'static str;

    fn params() -> &'static [ParamMeta];
}

/// Execute a command against a context `C`, failing with `E`
///
/// Commands get exclusive access to the context for the duration of the call;
/// nothing else can observe the context between a command's read and its write.
pub trait Execute<C, E>: Operation {
    fn execute(&self, ctx: &mut C) -> ExecutionResult<Value, E>;

    /// Ids of the resources touched, recorded on the log entry.
    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        Vec::new()
    }
}

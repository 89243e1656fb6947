//! Helpers for structured log output

use serde::Serialize;
use std::fmt::Debug;

/// Renders a value as YAML on a fresh line inside log messages
///
/// ```ignore
/// use ikanban::Pretty;
/// tracing::debug!("moved card: {}", Pretty(&card));
/// ```
///
/// Falls back to `{:#?}` when the value does not serialize.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> Debug for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

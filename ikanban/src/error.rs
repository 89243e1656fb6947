//! Error types for the board store

use crate::storage::StorageError;
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Board not found
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    /// Column not found on the targeted board
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Card not found in the targeted column
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// Operation needed the current board but none is selected
    #[error("no board selected")]
    NoCurrentBoard,

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Position outside a sequence
    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange {
        what: String,
        index: usize,
        len: usize,
    },

    /// Board is archived and cannot be selected
    #[error("board '{id}' is archived")]
    BoardArchived { id: String },

    /// Storage collaborator failed; in-memory state already reflects the mutation
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Parse error
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Op string that matches no known command
    #[error("unknown operation: {op}")]
    UnknownOperation { op: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an index-out-of-range error
    pub fn index_out_of_range(what: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            what: what.into(),
            index,
            len,
        }
    }

    pub fn board_not_found(id: impl ToString) -> Self {
        Self::BoardNotFound { id: id.to_string() }
    }

    pub fn column_not_found(id: impl ToString) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    pub fn card_not_found(id: impl ToString) -> Self {
        Self::CardNotFound { id: id.to_string() }
    }

    /// Lookup failures. These never mutate, so callers may treat them as no-ops.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BoardNotFound { .. }
                | Self::ColumnNotFound { .. }
                | Self::CardNotFound { .. }
                | Self::NoCurrentBoard
        )
    }

    /// Input rejected before anything changed
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::InvalidValue { .. }
                | Self::IndexOutOfRange { .. }
                | Self::BoardArchived { .. }
        )
    }

    /// The save step failed after the mutation was applied in memory
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(StorageError::LockBusy { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::card_not_found("01ABC");
        assert_eq!(err.to_string(), "card not found: 01ABC");

        let err = BoardError::index_out_of_range("column", 4, 3);
        assert_eq!(err.to_string(), "column index 4 out of range (len 3)");
    }

    #[test]
    fn test_error_classes() {
        assert!(BoardError::NoCurrentBoard.is_not_found());
        assert!(BoardError::board_not_found("b").is_not_found());
        assert!(!BoardError::missing_field("title").is_not_found());
        assert!(BoardError::missing_field("title").is_validation());

        let quota = BoardError::from(StorageError::QuotaExceeded {
            size: 10,
            limit: 5,
        });
        assert!(quota.is_storage());
        assert!(!quota.is_retryable());
    }

    #[test]
    fn test_parse_error() {
        let err = BoardError::parse("unexpected token");
        assert!(err.to_string().contains("unexpected token"));
    }
}

//! Centralized error types for LendGraph.

use thiserror::Error;

/// Main error type for LendGraph operations.
#[derive(Error, Debug)]
pub enum LendError {
    #[error("{label} '{name}' not found")]
    NodeNotFound { label: String, name: String },

    #[error("Unknown node label: {0}")]
    UnknownLabel(String),

    #[error("Graph database unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed graph record: {0}")]
    Malformed(String),
}

/// Result type for LendGraph operations.
pub type LendResult<T> = Result<T, LendError>;

impl LendError {
    /// Create a not-found error for a label/name lookup.
    pub fn not_found(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NodeNotFound {
            label: label.into(),
            name: name.into(),
        }
    }

    /// Create an unavailable error from a driver failure.
    pub fn unavailable(msg: impl ToString) -> Self {
        Self::Unavailable(msg.to_string())
    }

    /// Create a malformed-record error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

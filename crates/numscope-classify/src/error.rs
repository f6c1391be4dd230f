//! Error types for the classification subsystem.

use thiserror::Error;

/// Errors that can occur in classification operations.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// A requested check has no registered definition
    #[error("check not registered: {check_id}")]
    UnknownCheck {
        /// The check ID that was not found
        check_id: String,
    },

    /// Accumulator overflow while evaluating a check
    #[error("arithmetic overflow while classifying {value}")]
    Overflow {
        /// The input value being classified
        value: i64,
    },

    /// Invalid check ID format
    #[error("invalid check ID: {0}")]
    InvalidId(#[from] numscope_core::NumscopeError),
}

/// Result type for classification operations.
pub type Result<T> = std::result::Result<T, ClassifyError>;

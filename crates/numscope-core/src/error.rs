//! Core error types for the numscope workspace.
//!
//! This module defines the central error type used across all subsystems.
//! Each subsystem error is represented as a variant for clear error propagation.

use thiserror::Error;

/// Central error type for all numscope operations.
///
/// Each variant represents an error from a specific subsystem, allowing
/// for clear error propagation and handling across crate boundaries.
#[derive(Error, Debug)]
pub enum NumscopeError {
    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input boundary errors (text that never became a valid integer)
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Validation errors (invalid identifiers, constraints)
    #[error("validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Config file not found (may be first run)
    #[error("config file not found at {path}")]
    NotFound {
        /// Path where config was expected
        path: String,
    },

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Errors at the text-to-integer input boundary.
///
/// The classifier itself never sees raw text; these conditions are surfaced
/// to the caller before classification is ever invoked. Invalid format and
/// out-of-range are deliberately distinct so the caller can report them
/// differently.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// Input text was empty or all whitespace
    #[error("input is empty")]
    Empty,

    /// Input text is not a decimal integer
    #[error("invalid number format: '{text}'")]
    InvalidFormat {
        /// The offending input text
        text: String,
    },

    /// Input text is a decimal integer but exceeds the supported width
    #[error("value out of supported range (64-bit signed): '{text}'")]
    OutOfRange {
        /// The offending input text
        text: String,
    },

    /// Free-form text contained no digit run at all
    #[error("no number found in text")]
    NoNumberFound,
}

/// Result type alias using `NumscopeError`.
pub type Result<T> = std::result::Result<T, NumscopeError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

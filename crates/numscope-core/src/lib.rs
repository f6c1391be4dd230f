//! Numscope Core - Foundation crate for the numscope number classifier.
//!
//! This crate provides shared types, error handling, configuration
//! management, and the text-to-integer input boundary that the classifier
//! crate depends on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes (`CheckId`)
//! - [`input`] - Validated text-to-integer parsing and extraction
//!
//! # Example
//!
//! ```rust
//! use numscope_core::{input, AppConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration
//! let config = AppConfig::default();
//!
//! // Parse host-supplied text at the boundary
//! let value = input::parse_integer("153")?;
//! assert_eq!(value, 153);
//! assert!(!config.classifier.enabled_checks.is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod input;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, ClassifierConfig, ReportConfig};
pub use error::{ConfigError, ConfigResult, InputError, NumscopeError, Result};
pub use types::CheckId;

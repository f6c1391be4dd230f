//! Shared types used across the numscope workspace.
//!
//! This module defines the common identifier newtype that provides type
//! safety and clear domain modeling for classification checks.

use crate::error::NumscopeError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Newtype for check identifiers with validation.
///
/// Check IDs must be lowercase alphanumeric with hyphens, 3-32 characters.
/// The builtin checks use the ids `armstrong`, `happy`, `palindrome`,
/// `perfect` and `prime`; hosts registering their own checks pick ids in
/// the same format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckId(String);

impl CheckId {
    /// Create a new `CheckId` from a string.
    ///
    /// # Errors
    /// Returns error if the ID doesn't match the required format.
    pub fn new(id: impl Into<String>) -> Result<Self, NumscopeError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate check ID format: lowercase alphanumeric with hyphens, 3-32 chars.
    fn validate(id: &str) -> Result<(), NumscopeError> {
        static CHECK_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = CHECK_REGEX
            .get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9-]{1,30}[a-z0-9]$").expect("valid regex"));

        if id.len() < 3 || id.len() > 32 {
            return Err(NumscopeError::Validation(format!(
                "invalid check ID: must be 3-32 characters, got {} characters",
                id.len()
            )));
        }

        if regex.is_match(id) {
            Ok(())
        } else {
            Err(NumscopeError::Validation(format!(
                "invalid check ID: must be lowercase alphanumeric with hyphens, got '{id}'"
            )))
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

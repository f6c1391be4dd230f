//! Text-to-integer input boundary.
//!
//! The classifier only ever receives validated integers. These helpers are
//! the boundary that turns raw host text (typed input, or free-form scanned
//! text) into an `i64`, surfacing invalid-format and out-of-range conditions
//! as distinct errors.

use crate::error::InputError;
use regex::Regex;
use std::sync::OnceLock;

/// Parse trimmed decimal text into an `i64`.
///
/// Accepts an optional leading `-`. Empty text, non-decimal text and
/// values outside the 64-bit signed range map to distinct error variants.
///
/// # Errors
/// Returns [`InputError::Empty`], [`InputError::InvalidFormat`] or
/// [`InputError::OutOfRange`].
pub fn parse_integer(text: &str) -> Result<i64, InputError> {
    static INTEGER_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = INTEGER_REGEX.get_or_init(|| Regex::new(r"^-?[0-9]+$").expect("valid regex"));

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    if !regex.is_match(trimmed) {
        return Err(InputError::InvalidFormat {
            text: trimmed.to_string(),
        });
    }

    // Format is already known good, so the only remaining failure is width.
    trimmed.parse::<i64>().map_err(|_| InputError::OutOfRange {
        text: trimmed.to_string(),
    })
}

/// Extract and parse the first embedded number in free-form text.
///
/// This mirrors the scanned-text path: detected text blocks are searched
/// for the first run of decimal digits, which is then parsed with the same
/// validation as typed input.
///
/// # Errors
/// Returns [`InputError::NoNumberFound`] if the text contains no digits,
/// or [`InputError::OutOfRange`] if the digit run exceeds the 64-bit
/// signed range.
pub fn extract_integer(text: &str) -> Result<i64, InputError> {
    static DIGIT_RUN_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = DIGIT_RUN_REGEX.get_or_init(|| Regex::new(r"[0-9]+").expect("valid regex"));

    let matched = regex.find(text).ok_or(InputError::NoNumberFound)?;
    parse_integer(matched.as_str())
}

//! Decimal palindrome check.

use crate::digits;
use crate::error::Result;

/// Check identifier.
pub const ID: &str = "palindrome";

/// Display label.
pub const LABEL: &str = "Palindrome";

/// Decide whether the decimal digits of `n` read the same in both
/// directions.
///
/// The written form of a negative number starts with a sign, so negatives
/// never match. Every single-digit value, including `0`, is a palindrome.
pub fn is_palindrome(n: i64) -> Result<bool> {
    if n < 0 {
        return Ok(false);
    }

    let sequence = digits::digits(n);
    let symmetric = sequence
        .iter()
        .zip(sequence.iter().rev())
        .all(|(a, b)| a == b);
    Ok(symmetric)
}

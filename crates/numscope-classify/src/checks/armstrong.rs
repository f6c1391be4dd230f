//! Armstrong (narcissistic) number check.

use crate::digits;
use crate::error::{ClassifyError, Result};

/// Check identifier.
pub const ID: &str = "armstrong";

/// Display label.
pub const LABEL: &str = "Armstrong Number";

/// Decide whether `n` equals the sum of its own decimal digits each raised
/// to the power of the digit count.
///
/// The comparison is against the signed input, while the digit-power sum is
/// always non-negative, so no negative number ever matches. `0` has digit
/// count 1 and `0^1 == 0`, so `0` matches.
///
/// The sum accumulates in `i128` with checked arithmetic. An `i64` has at
/// most 19 digits and `19 * 9^19` is far below `i128::MAX`, so overflow
/// cannot occur for any supported input; the checked operations keep the
/// arithmetic total rather than ever wrapping.
pub fn is_armstrong(n: i64) -> Result<bool> {
    let count = digits::digit_count(n);

    let mut sum: i128 = 0;
    for digit in digits::digits(n) {
        let powered = i128::from(digit)
            .checked_pow(count)
            .ok_or(ClassifyError::Overflow { value: n })?;
        sum = sum
            .checked_add(powered)
            .ok_or(ClassifyError::Overflow { value: n })?;
    }

    Ok(i128::from(n) == sum)
}

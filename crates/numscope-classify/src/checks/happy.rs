//! Happy number check.

use crate::digits::square_digit_sum;
use crate::error::Result;

/// Check identifier.
pub const ID: &str = "happy";

/// Display label.
pub const LABEL: &str = "Happy Number";

/// Decide whether repeatedly replacing `n` with the sum of the squares of
/// its decimal digits eventually reaches the fixed point `1`.
///
/// Negative input is normalized to its absolute value before iterating.
/// Every non-happy non-negative integer falls into the single cycle
/// `{4, 16, 37, 58, 89, 145, 42, 20}`, so Floyd's tortoise-and-hare
/// guarantees termination without an iteration cap: the cursors must meet
/// either at `1` or inside that cycle.
pub fn is_happy(n: i64) -> Result<bool> {
    let mut slow = n.unsigned_abs();
    let mut fast = slow;

    loop {
        slow = square_digit_sum(slow);
        fast = square_digit_sum(square_digit_sum(fast));
        if slow == fast {
            break;
        }
    }

    Ok(slow == 1)
}

//! Builtin classification checks.
//!
//! Each check is an independent, pure predicate over an `i64` with the
//! same signature; none of them share state or depend on another check.
//! The submodules each expose the check's id, its display label, and the
//! predicate itself.

pub mod armstrong;
pub mod happy;
pub mod palindrome;
pub mod perfect;
pub mod prime;

pub use armstrong::is_armstrong;
pub use happy::is_happy;
pub use palindrome::is_palindrome;
pub use perfect::is_perfect;
pub use prime::is_prime;

use crate::registry::CheckDefinition;
use numscope_core::CheckId;

/// The builtin check definitions, in their fixed registration order:
/// armstrong, happy, palindrome, perfect, prime.
///
/// Classification output order follows this order; it never depends on
/// the input value or on caller-supplied configuration order.
#[must_use]
pub fn builtin_definitions() -> Vec<CheckDefinition> {
    vec![
        CheckDefinition::new(builtin_id(armstrong::ID), armstrong::LABEL, is_armstrong),
        CheckDefinition::new(builtin_id(happy::ID), happy::LABEL, is_happy),
        CheckDefinition::new(builtin_id(palindrome::ID), palindrome::LABEL, is_palindrome),
        CheckDefinition::new(builtin_id(perfect::ID), perfect::LABEL, is_perfect),
        CheckDefinition::new(builtin_id(prime::ID), prime::LABEL, is_prime),
    ]
}

fn builtin_id(id: &str) -> CheckId {
    CheckId::new(id).expect("builtin check ID is valid")
}

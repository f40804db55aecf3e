//! Comparison rules that deliver their outcome through the deferred path.
//!
//! Declaring any of these on a field makes every call of that validator
//! asynchronous, even though the comparison itself needs no waiting.

use fieldcheck_core::{Constraint, Value};

/// Deferred [`equal_to`](crate::equal_to).
pub fn equal_to(expected: impl Into<Value>) -> Constraint {
    crate::equal_to(expected).deferred()
}

/// Deferred [`greater_than`](crate::greater_than).
pub fn greater_than(bound: impl Into<Value>) -> Constraint {
    crate::greater_than(bound).deferred()
}

/// Deferred [`less_than`](crate::less_than).
pub fn less_than(bound: impl Into<Value>) -> Constraint {
    crate::less_than(bound).deferred()
}

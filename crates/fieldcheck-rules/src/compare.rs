//! Comparison rules.
//!
//! Comparisons follow [`Value::compare`]: integers and floats compare
//! numerically, and values of unrelated kinds never satisfy a comparison.

use std::cmp::Ordering;

use fieldcheck_core::{SyncConstraint, Value};

fn related(expected: Value, wanted: Ordering, relation: &'static str) -> SyncConstraint {
    SyncConstraint::new(move |_, value, _| {
        if value.compare(&expected) == Some(wanted) {
            None
        } else {
            Some(format!("Expected {value} to {relation} {expected}"))
        }
    })
}

/// Value must equal `expected`.
pub fn equal_to(expected: impl Into<Value>) -> SyncConstraint {
    related(expected.into(), Ordering::Equal, "equal")
}

/// Value must be strictly greater than `bound`.
pub fn greater_than(bound: impl Into<Value>) -> SyncConstraint {
    related(bound.into(), Ordering::Greater, "be greater than")
}

/// Value must be strictly less than `bound`.
pub fn less_than(bound: impl Into<Value>) -> SyncConstraint {
    related(bound.into(), Ordering::Less, "be less than")
}

/// Value must be greater than or equal to `bound`. The message names the
/// field rather than the value.
pub fn at_least(bound: impl Into<Value>) -> SyncConstraint {
    let bound = bound.into();
    SyncConstraint::new(move |key, value, _| match value.compare(&bound) {
        Some(Ordering::Greater | Ordering::Equal) => None,
        _ => Some(format!("{key} should be at least {bound}")),
    })
}

/// Value must be a number divisible by `divisor`.
pub fn divisible_by(divisor: i64) -> SyncConstraint {
    SyncConstraint::new(move |_, value, _| {
        let divisible = match value {
            // Only i64::MIN % -1 overflows, and it divides evenly.
            Value::Int(n) => divisor != 0 && n.checked_rem(divisor).unwrap_or(0) == 0,
            Value::Float(x) => divisor != 0 && x.is_finite() && x % divisor as f64 == 0.0,
            _ => false,
        };
        if divisible {
            None
        } else {
            Some(format!("Expected {value} to be divisible by {divisor}"))
        }
    })
}

/// Value must equal one of `allowed`.
pub fn one_of<I, V>(allowed: I) -> SyncConstraint
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let allowed: Vec<Value> = allowed.into_iter().map(Into::into).collect();
    SyncConstraint::new(move |_, value, _| {
        if allowed
            .iter()
            .any(|candidate| value.compare(candidate) == Some(Ordering::Equal))
        {
            return None;
        }
        let choices = allowed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("Expected {value} to be one of {choices}"))
    })
}

/// Value must equal the sibling field `other`.
pub fn same_as(other: impl Into<String>) -> SyncConstraint {
    let other = other.into();
    SyncConstraint::new(move |key, value, fields| {
        if value.compare(fields.value(&other)) == Some(Ordering::Equal) {
            None
        } else {
            Some(format!("{key} does not match {other}"))
        }
    })
}

#[cfg(test)]
mod tests {
    use fieldcheck_core::Fields;

    use super::*;

    fn run(rule: &SyncConstraint, value: impl Into<Value>) -> Option<String> {
        let value = value.into();
        rule.call("age", &value, &Fields::new()).unwrap()
    }

    #[test]
    fn test_greater_than() {
        assert_eq!(run(&greater_than(25), 30), None);
        assert_eq!(
            run(&greater_than(25), 20).as_deref(),
            Some("Expected 20 to be greater than 25")
        );
        assert_eq!(
            run(&greater_than(25), 25).as_deref(),
            Some("Expected 25 to be greater than 25")
        );
        assert_eq!(run(&greater_than(2.5), 3), None);
        assert!(run(&greater_than(25), "thirty").is_some());
    }

    #[test]
    fn test_less_than_and_equal_to() {
        assert_eq!(
            run(&less_than(15), 20).as_deref(),
            Some("Expected 20 to be less than 15")
        );
        assert_eq!(run(&less_than(15), 10), None);
        assert_eq!(
            run(&equal_to("Bob"), "Sam").as_deref(),
            Some("Expected Sam to equal Bob")
        );
        assert_eq!(run(&equal_to(30), 30.0), None);
    }

    #[test]
    fn test_at_least_names_the_field() {
        assert_eq!(run(&at_least(30), 30), None);
        assert_eq!(run(&at_least(30), 28).as_deref(), Some("age should be at least 30"));
    }

    #[test]
    fn test_divisible_by() {
        assert_eq!(run(&divisible_by(10), 20), None);
        assert_eq!(run(&divisible_by(10), 20.0), None);
        assert_eq!(
            run(&divisible_by(10), 25).as_deref(),
            Some("Expected 25 to be divisible by 10")
        );
        assert!(run(&divisible_by(0), 20).is_some());
        assert_eq!(run(&divisible_by(-1), i64::MIN), None);
        assert_eq!(run(&divisible_by(-5), 20), None);
        assert!(run(&divisible_by(10), "20").is_some());
    }

    #[test]
    fn test_one_of() {
        let rule = one_of(["red", "green"]);
        assert_eq!(run(&rule, "green"), None);
        assert_eq!(
            run(&rule, "blue").as_deref(),
            Some("Expected blue to be one of red, green")
        );
    }

    #[test]
    fn test_same_as_reads_sibling() {
        let fields = Fields::new()
            .with("password", "bobsdabest")
            .with("confirm_password", "bobadaworst");
        let rule = same_as("password");

        assert_eq!(
            rule.call("confirm_password", fields.value("confirm_password"), &fields)
                .unwrap()
                .as_deref(),
            Some("confirm_password does not match password")
        );
        assert_eq!(
            rule.call("copy", fields.value("password"), &fields).unwrap(),
            None
        );
    }
}

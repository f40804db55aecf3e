//! Presence and kind rules.

use fieldcheck_core::{SyncConstraint, Value};

fn expect_kind(kind: &'static str, accepts: fn(&Value) -> bool) -> SyncConstraint {
    SyncConstraint::new(move |_, value, _| {
        if accepts(value) {
            None
        } else {
            Some(format!("Expected a {kind}"))
        }
    })
}

/// Value must be a string.
pub fn is_string() -> SyncConstraint {
    expect_kind("string", Value::is_string)
}

/// Value must be an integer or a float.
pub fn is_number() -> SyncConstraint {
    expect_kind("number", Value::is_number)
}

/// Value must be a boolean.
pub fn is_bool() -> SyncConstraint {
    expect_kind("boolean", Value::is_bool)
}

/// Value must be present. Null and the empty string count as absent.
pub fn required() -> SyncConstraint {
    SyncConstraint::new(|key, value, _| match value {
        Value::Null => Some(format!("{key} is required")),
        Value::String(s) if s.is_empty() => Some(format!("{key} is required")),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use fieldcheck_core::Fields;

    use super::*;

    fn run(rule: &SyncConstraint, value: impl Into<Value>) -> Option<String> {
        let value = value.into();
        rule.call("field", &value, &Fields::new()).unwrap()
    }

    #[test]
    fn test_kind_rules() {
        assert_eq!(run(&is_string(), "Bob"), None);
        assert_eq!(run(&is_string(), 30).as_deref(), Some("Expected a string"));
        assert_eq!(run(&is_number(), 2.5), None);
        assert_eq!(run(&is_number(), 30), None);
        assert_eq!(run(&is_number(), "30").as_deref(), Some("Expected a number"));
        assert_eq!(run(&is_bool(), true), None);
        assert_eq!(run(&is_bool(), Value::Null).as_deref(), Some("Expected a boolean"));
    }

    #[test]
    fn test_required() {
        assert_eq!(run(&required(), "x"), None);
        assert_eq!(run(&required(), 0), None);
        assert_eq!(run(&required(), "").as_deref(), Some("field is required"));
        assert_eq!(run(&required(), Value::Null).as_deref(), Some("field is required"));
    }
}

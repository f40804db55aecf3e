//! String rules.

use fieldcheck_core::{SyncConstraint, Value};

/// Value must be a string of at least `min` characters.
pub fn min_length(min: usize) -> SyncConstraint {
    SyncConstraint::new(move |key, value, _| match value {
        Value::String(s) if s.chars().count() >= min => None,
        _ => Some(format!("{key} should be at least {min} characters")),
    })
}

/// Value must be a string of at most `max` characters.
pub fn max_length(max: usize) -> SyncConstraint {
    SyncConstraint::new(move |key, value, _| match value {
        Value::String(s) if s.chars().count() <= max => None,
        _ => Some(format!("{key} should be at most {max} characters")),
    })
}

/// Value must look like an email address: a non-empty local part, an `@`,
/// and a domain containing a dot.
pub fn email() -> SyncConstraint {
    SyncConstraint::new(|_, value, _| {
        if value.as_str().is_some_and(looks_like_email) {
            None
        } else {
            Some("Not a valid email".to_string())
        }
    })
}

fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

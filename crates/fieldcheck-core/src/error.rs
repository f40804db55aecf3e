//! Core error types.

use thiserror::Error;

use crate::result::ValidationResult;

/// Errors raised from inside a constraint body.
///
/// A constraint that judges a value invalid returns a message, never one of
/// these. A `ConstraintError` means the constraint itself could not run.
#[derive(Debug, Error)]
pub enum ConstraintError {
    /// Constraint failed with a plain description.
    #[error("{0}")]
    Message(String),

    /// Constraint failed with an underlying error.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// A spawned deferred check panicked.
    #[error("constraint task panicked")]
    Panicked,

    /// A spawned deferred check was cancelled by the runtime.
    #[error("constraint task cancelled")]
    Cancelled,
}

impl ConstraintError {
    /// Create an error from a plain description.
    pub fn msg(message: impl Into<String>) -> Self {
        ConstraintError::Message(message.into())
    }

    /// Wrap any error type.
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConstraintError::Other(Box::new(error))
    }
}

impl From<tokio::task::JoinError> for ConstraintError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            ConstraintError::Panicked
        } else {
            ConstraintError::Cancelled
        }
    }
}

/// Validation engine errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The constraint declaration or validator configuration is unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The supplied fields are not a flat record.
    #[error("invalid fields: {0}")]
    InvalidFields(String),

    /// A constraint could not run. Aborts the whole call.
    #[error("constraint {index} on field `{field}` failed: {source}")]
    Constraint {
        /// Field the constraint was declared on.
        field: String,
        /// Zero-based position of the constraint in the field's declaration.
        index: usize,
        /// Error raised by the constraint.
        #[source]
        source: ConstraintError,
    },
}

impl Error {
    /// Check if this error came from a constraint body rather than the engine.
    pub fn is_constraint(&self) -> bool {
        matches!(self, Error::Constraint { .. })
    }

    /// Field name the error relates to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Constraint { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Why [`check`](crate::Validator::check) did not hand the fields back.
#[derive(Debug, Error)]
pub enum Rejection {
    /// At least one field has a message. Every declared field is present.
    #[error("{} field(s) failed validation", .0.error_count())]
    Invalid(ValidationResult),

    /// The call itself failed.
    #[error(transparent)]
    Failed(#[from] Error),
}

impl Rejection {
    /// The per-field result, if the fields were judged invalid.
    pub fn result(&self) -> Option<&ValidationResult> {
        match self {
            Rejection::Invalid(result) => Some(result),
            Rejection::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_error_display() {
        let err = Error::Constraint {
            field: "email".to_string(),
            index: 1,
            source: ConstraintError::msg("lookup service unavailable"),
        };

        assert_eq!(
            err.to_string(),
            "constraint 1 on field `email` failed: lookup service unavailable"
        );
        assert!(err.is_constraint());
        assert_eq!(err.field(), Some("email"));
    }

    #[test]
    fn test_wrapped_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = ConstraintError::other(io);
        assert_eq!(err.to_string(), "timed out");
    }

    #[test]
    fn test_configuration_error() {
        let err = Error::Configuration("field `name` declared more than once".to_string());
        assert!(!err.is_constraint());
        assert_eq!(err.field(), None);
        assert!(err.to_string().starts_with("configuration error"));
    }

    #[test]
    fn test_rejection_display() {
        let result: ValidationResult = [("name", None), ("age", Some("too young"))]
            .into_iter()
            .collect();
        let rejection = Rejection::Invalid(result);
        assert_eq!(rejection.to_string(), "1 field(s) failed validation");
        assert_eq!(rejection.result().map(|r| r.len()), Some(2));

        let failed = Rejection::from(Error::InvalidFields("nested value".to_string()));
        assert_eq!(failed.to_string(), "invalid fields: nested value");
        assert!(failed.result().is_none());
    }
}

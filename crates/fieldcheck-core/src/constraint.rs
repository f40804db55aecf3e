//! Constraint callables and the outcomes they produce.
//!
//! A constraint receives the field name, the field's value and the whole
//! record. It answers with `None` (no error) or `Some(message)`, either
//! immediately or through a deferred check that settles later.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};

use crate::error::ConstraintError;
use crate::value::{Fields, Value};

/// A field-level outcome that settles later.
pub type DeferredCheck = BoxFuture<'static, Result<Option<String>, ConstraintError>>;

/// Raw outcome of invoking one constraint.
pub enum Check {
    /// Outcome known at invocation time.
    Immediate(Option<String>),
    /// Outcome delivered by a deferred computation.
    Deferred(DeferredCheck),
}

impl Check {
    /// An immediate "no error" outcome.
    pub fn pass() -> Self {
        Check::Immediate(None)
    }

    /// An immediate failure carrying `message`.
    pub fn fail(message: impl Into<String>) -> Self {
        Check::Immediate(Some(message.into()))
    }

    /// Wrap a future as a deferred outcome.
    pub fn deferred<F>(fut: F) -> Self
    where
        F: Future<Output = Result<Option<String>, ConstraintError>> + Send + 'static,
    {
        Check::Deferred(fut.boxed())
    }

    /// Check if the outcome is deferred.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Check::Deferred(_))
    }

    /// The outcome, if it is already known.
    pub fn immediate(&self) -> Option<Option<&str>> {
        match self {
            Check::Immediate(outcome) => Some(outcome.as_deref()),
            Check::Deferred(_) => None,
        }
    }

    /// Treat the outcome as deferred; an immediate outcome is already settled.
    pub fn into_deferred(self) -> DeferredCheck {
        match self {
            Check::Immediate(outcome) => future::ready(Ok(outcome)).boxed(),
            Check::Deferred(fut) => fut,
        }
    }
}

impl From<Option<String>> for Check {
    fn from(outcome: Option<String>) -> Self {
        Check::Immediate(outcome)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Immediate(outcome) => f.debug_tuple("Immediate").field(outcome).finish(),
            Check::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Anything the engine can invoke for a field.
pub trait Evaluate: Clone + Send + Sync + 'static {
    /// Raw outcome produced by one invocation.
    type Output: From<Option<String>> + Send;

    /// Invoke the constraint once.
    fn evaluate(
        &self,
        key: &str,
        value: &Value,
        fields: &Fields,
    ) -> Result<Self::Output, ConstraintError>;
}

type SyncFn =
    dyn Fn(&str, &Value, &Fields) -> Result<Option<String>, ConstraintError> + Send + Sync;

/// A constraint that always answers immediately.
#[derive(Clone)]
pub struct SyncConstraint {
    check: Arc<SyncFn>,
}

impl SyncConstraint {
    /// Create a constraint from an infallible function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, &Value, &Fields) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(
                move |key: &str,
                      value: &Value,
                      fields: &Fields|
                      -> Result<Option<String>, ConstraintError> {
                    Ok(f(key, value, fields))
                },
            ),
        }
    }

    /// Create a constraint whose body may fail outright.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&str, &Value, &Fields) -> Result<Option<String>, ConstraintError>
            + Send
            + Sync
            + 'static,
    {
        Self { check: Arc::new(f) }
    }

    /// Invoke the constraint.
    pub fn call(
        &self,
        key: &str,
        value: &Value,
        fields: &Fields,
    ) -> Result<Option<String>, ConstraintError> {
        (self.check)(key, value, fields)
    }

    /// Deliver this constraint's outcome through the deferred path.
    pub fn deferred(self) -> Constraint {
        Constraint::fallible(move |key: &str, value: &Value, fields: &Fields| {
            let outcome = self.call(key, value, fields);
            Ok(Check::deferred(future::ready(outcome)))
        })
    }
}

impl Evaluate for SyncConstraint {
    type Output = Option<String>;

    fn evaluate(
        &self,
        key: &str,
        value: &Value,
        fields: &Fields,
    ) -> Result<Option<String>, ConstraintError> {
        self.call(key, value, fields)
    }
}

impl fmt::Debug for SyncConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SyncConstraint(..)")
    }
}

type CheckFn = dyn Fn(&str, &Value, &Fields) -> Result<Check, ConstraintError> + Send + Sync;

/// A constraint that may defer its outcome.
#[derive(Clone)]
pub struct Constraint {
    check: Arc<CheckFn>,
}

impl Constraint {
    /// Create a constraint returning a raw [`Check`].
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, &Value, &Fields) -> Check + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(
                move |key: &str, value: &Value, fields: &Fields| -> Result<Check, ConstraintError> {
                    Ok(f(key, value, fields))
                },
            ),
        }
    }

    /// Create a constraint whose body may fail before producing a check.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&str, &Value, &Fields) -> Result<Check, ConstraintError> + Send + Sync + 'static,
    {
        Self { check: Arc::new(f) }
    }

    /// Create a constraint that answers immediately.
    pub fn immediate<F>(f: F) -> Self
    where
        F: Fn(&str, &Value, &Fields) -> Option<String> + Send + Sync + 'static,
    {
        SyncConstraint::new(f).into()
    }

    /// Create a constraint whose outcome is produced by a future.
    ///
    /// The function runs at invocation time; the returned future must own
    /// whatever it needs from its arguments.
    pub fn deferred<F, Fut>(f: F) -> Self
    where
        F: Fn(&str, &Value, &Fields) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<String>, ConstraintError>> + Send + 'static,
    {
        Self {
            check: Arc::new(
                move |key: &str, value: &Value, fields: &Fields| -> Result<Check, ConstraintError> {
                    Ok(Check::deferred(f(key, value, fields)))
                },
            ),
        }
    }

    /// Invoke the constraint.
    pub fn call(&self, key: &str, value: &Value, fields: &Fields) -> Result<Check, ConstraintError> {
        (self.check)(key, value, fields)
    }
}

impl Evaluate for Constraint {
    type Output = Check;

    fn evaluate(&self, key: &str, value: &Value, fields: &Fields) -> Result<Check, ConstraintError> {
        self.call(key, value, fields)
    }
}

impl From<SyncConstraint> for Constraint {
    fn from(constraint: SyncConstraint) -> Self {
        Constraint::fallible(move |key: &str, value: &Value, fields: &Fields| {
            constraint.call(key, value, fields).map(Check::Immediate)
        })
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Constraint(..)")
    }
}

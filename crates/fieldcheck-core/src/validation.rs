//! The value returned by a validation call.

use std::fmt;
use std::future::IntoFuture;

use futures::future::{self, BoxFuture, FutureExt};

use crate::engine::Mode;
use crate::error::Error;
use crate::result::ValidationResult;

/// Result of [`Validator::validate`](crate::Validator::validate).
///
/// `Ready` when every raw outcome was immediate, `Pending` when at least one
/// was deferred. A pending validation settles every field before it yields,
/// and it can be awaited directly:
///
/// ```no_run
/// # async fn demo(validator: fieldcheck_core::Validator, fields: fieldcheck_core::Fields) {
/// let result = validator.validate(&fields).await;
/// # }
/// ```
pub enum Validation {
    /// Result available now.
    Ready(Result<ValidationResult, Error>),
    /// Result available once every deferred check has settled.
    Pending(BoxFuture<'static, Result<ValidationResult, Error>>),
}

impl Validation {
    /// The mode the call ran in.
    pub fn mode(&self) -> Mode {
        match self {
            Validation::Ready(_) => Mode::Synchronous,
            Validation::Pending(_) => Mode::Asynchronous,
        }
    }

    /// Check if the result is available without awaiting.
    pub fn is_ready(&self) -> bool {
        matches!(self, Validation::Ready(_))
    }

    /// Take the result if it is available now, otherwise give the pending
    /// validation back.
    pub fn into_ready(self) -> Result<Result<ValidationResult, Error>, Validation> {
        match self {
            Validation::Ready(result) => Ok(result),
            pending => Err(pending),
        }
    }
}

impl IntoFuture for Validation {
    type Output = Result<ValidationResult, Error>;
    type IntoFuture = BoxFuture<'static, Result<ValidationResult, Error>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Validation::Ready(result) => future::ready(result).boxed(),
            Validation::Pending(fut) => fut,
        }
    }
}

impl fmt::Debug for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Ready(result) => f.debug_tuple("Ready").field(result).finish(),
            Validation::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

//! Per-call mode detection.

use tracing::debug;

use super::invoker::FieldInvocation;
use crate::constraint::Check;

/// How a validation call delivers its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No deferred outcome was observed; the result is returned directly.
    Synchronous,
    /// At least one deferred outcome was observed; every field settles
    /// through the deferred path.
    Asynchronous,
}

/// Raw outcomes sorted by the mode they imply.
pub(crate) enum Detected {
    Synchronous(Vec<FieldInvocation<Option<String>>>),
    Asynchronous(Vec<FieldInvocation<Check>>),
}

impl Detected {
    pub(crate) fn mode(&self) -> Mode {
        match self {
            Detected::Synchronous(_) => Mode::Synchronous,
            Detected::Asynchronous(_) => Mode::Asynchronous,
        }
    }
}

/// Scan every raw outcome across all fields and pick the call's mode.
///
/// A single deferred outcome anywhere makes the whole call asynchronous.
pub(crate) fn detect(invocations: Vec<FieldInvocation<Check>>) -> Detected {
    let immediate: Option<Vec<FieldInvocation<Option<String>>>> = invocations
        .iter()
        .map(|invocation| {
            invocation
                .outcomes
                .iter()
                .map(|check| check.immediate().map(|outcome| outcome.map(str::to_string)))
                .collect::<Option<Vec<_>>>()
                .map(|outcomes| FieldInvocation {
                    field: invocation.field.clone(),
                    outcomes,
                })
        })
        .collect();

    match immediate {
        Some(immediate) => {
            debug!(deferred = 0, fields = immediate.len(), "detected validation mode");
            Detected::Synchronous(immediate)
        }
        None => {
            let deferred = invocations
                .iter()
                .flat_map(|invocation| invocation.outcomes.iter())
                .filter(|check| check.is_deferred())
                .count();
            debug!(deferred, fields = invocations.len(), "detected validation mode");
            Detected::Asynchronous(invocations)
        }
    }
}

//! Per-field outcome selection.
//!
//! Both modes pick the first message in declaration order. The synchronous
//! selector works on outcomes that are already known; the asynchronous one
//! first waits for every outcome of the field to settle, so a constraint
//! declared earlier wins over one that happened to finish sooner.

use futures::future::join_all;
use tracing::trace;

use super::invoker::report;
use crate::config::ErrorPolicy;
use crate::constraint::DeferredCheck;
use crate::error::Error;

/// Check if an outcome carries a message. Empty text is not a message.
pub(crate) fn is_message(outcome: &Option<String>) -> bool {
    outcome.as_deref().is_some_and(|message| !message.is_empty())
}

/// First message in declaration order, if any.
pub(crate) fn select_first<I>(outcomes: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    outcomes.into_iter().find(is_message).flatten()
}

/// Pick a field's outcome from immediate outcomes.
pub(crate) fn select_sync(field: &str, outcomes: Vec<Option<String>>) -> Option<String> {
    let selected = select_first(outcomes);
    trace!(field, failed = selected.is_some(), "selected field outcome");
    selected
}

/// Wait for all of a field's checks to settle, then pick its outcome.
///
/// Nothing is cancelled early: every check is driven to completion even
/// when an earlier one already failed. Under [`ErrorPolicy::Propagate`] the
/// first error in declaration order is returned once all have settled.
pub(crate) async fn select_async(
    field: String,
    checks: Vec<DeferredCheck>,
    policy: ErrorPolicy,
) -> Result<(String, Option<String>), Error> {
    let settled = join_all(checks).await;

    let mut outcomes = Vec::with_capacity(settled.len());
    for (index, result) in settled.into_iter().enumerate() {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(source) => match policy {
                ErrorPolicy::Propagate => {
                    return Err(Error::Constraint {
                        field,
                        index,
                        source,
                    })
                }
                ErrorPolicy::Report => outcomes.push(Some(report(&field, index, &source))),
            },
        }
    }

    let selected = select_first(outcomes);
    trace!(field = %field, failed = selected.is_some(), "settled field outcome");
    Ok((field, selected))
}

//! Assembly of per-field outcomes into a [`ValidationResult`].

use futures::future::{join_all, BoxFuture, FutureExt};
use tracing::{debug, Instrument, Span};

use super::invoker::FieldInvocation;
use super::launch::Launcher;
use super::select::{select_async, select_sync};
use crate::config::ErrorPolicy;
use crate::constraint::Check;
use crate::error::Error;
use crate::result::ValidationResult;

pub(crate) fn aggregate_sync(invocations: Vec<FieldInvocation<Option<String>>>) -> ValidationResult {
    let result: ValidationResult = invocations
        .into_iter()
        .map(|FieldInvocation { field, outcomes }| {
            let selected = select_sync(&field, outcomes);
            (field, selected)
        })
        .collect();

    debug!(failed = result.error_count(), "validation complete");
    result
}

/// Launch every check and build the future that settles the whole result.
///
/// Launching happens here, at call time. The returned future only waits.
pub(crate) fn aggregate_async(
    invocations: Vec<FieldInvocation<Check>>,
    launcher: &Launcher,
    policy: ErrorPolicy,
) -> BoxFuture<'static, Result<ValidationResult, Error>> {
    let fields: Vec<_> = invocations
        .into_iter()
        .map(|FieldInvocation { field, outcomes }| {
            let checks = outcomes
                .into_iter()
                .map(|check| launcher.launch(check))
                .collect();
            select_async(field, checks, policy)
        })
        .collect();

    async move {
        // Fields are joined in declaration order, so collecting yields the
        // first error in that order once everything has settled.
        let result = join_all(fields)
            .await
            .into_iter()
            .collect::<Result<ValidationResult, Error>>()?;

        debug!(failed = result.error_count(), "validation complete");
        Ok(result)
    }
    .instrument(Span::current())
    .boxed()
}

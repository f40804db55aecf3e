//! The evaluation pipeline: invoke, detect, select, aggregate.

mod aggregate;
mod invoker;
mod launch;
mod mode;
mod select;

pub use mode::Mode;

use tracing::{debug, instrument};

use crate::config::{SyncEvaluation, ValidatorConfig};
use crate::constraint::{Check, Constraint, SyncConstraint};
use crate::error::Error;
use crate::result::ValidationResult;
use crate::spec::ConstraintSpec;
use crate::validation::Validation;
use crate::value::Fields;

use aggregate::{aggregate_async, aggregate_sync};
use launch::Launcher;
use mode::{detect, Detected};

/// Validate against constraints that always answer immediately.
#[instrument(skip_all, fields(validator = %config.name, fields = spec.len()))]
pub(crate) fn run_sync(
    spec: &ConstraintSpec<SyncConstraint>,
    fields: &Fields,
    config: &ValidatorConfig,
) -> Result<ValidationResult, Error> {
    let stop = match config.sync_evaluation {
        SyncEvaluation::Eager => None,
        SyncEvaluation::ShortCircuit => Some(select::is_message as fn(&Option<String>) -> bool),
    };

    let invocations = invoker::invoke(spec, fields, config.error_policy, stop)?;
    Ok(aggregate_sync(invocations))
}

/// Validate against constraints that may defer their outcome.
///
/// Every constraint is invoked before this returns. The call's mode is
/// decided from the raw outcomes and applies to every field.
#[instrument(skip_all, fields(validator = %config.name, fields = spec.len()))]
pub(crate) fn run(
    spec: &ConstraintSpec<Constraint>,
    fields: &Fields,
    config: &ValidatorConfig,
) -> Validation {
    let invocations = match invoker::invoke(spec, fields, config.error_policy, None) {
        Ok(invocations) => invocations,
        Err(aborted) => {
            release(aborted.invoked, config);
            return Validation::Ready(Err(aborted.error));
        }
    };

    let detected = detect(invocations);
    debug!(mode = ?detected.mode(), execution = ?config.execution, "evaluating");

    match detected {
        Detected::Synchronous(invocations) => Validation::Ready(Ok(aggregate_sync(invocations))),
        Detected::Asynchronous(invocations) => match Launcher::new(config.execution) {
            Ok(launcher) => {
                Validation::Pending(aggregate_async(invocations, &launcher, config.error_policy))
            }
            Err(err) => Validation::Ready(Err(err)),
        },
    }
}

/// Hand checks invoked before an abort to the launcher so spawned execution
/// still drives them to settlement.
fn release(invoked: Vec<invoker::FieldInvocation<Check>>, config: &ValidatorConfig) {
    let Ok(launcher) = Launcher::new(config.execution) else {
        return;
    };
    let checks = invoked
        .into_iter()
        .flat_map(|invocation| invocation.outcomes)
        .filter(Check::is_deferred);

    let mut released = 0usize;
    for check in checks {
        launcher.detach(check);
        released += 1;
    }
    debug!(released, execution = ?config.execution, "released checks invoked before abort");
}

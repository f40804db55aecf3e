//! Eager invocation of every declared constraint.

use tracing::warn;

use crate::config::ErrorPolicy;
use crate::constraint::Evaluate;
use crate::error::{ConstraintError, Error};
use crate::spec::ConstraintSpec;
use crate::value::Fields;

/// Raw outcomes collected for one field, in declaration order.
#[derive(Debug)]
pub(crate) struct FieldInvocation<T> {
    pub field: String,
    pub outcomes: Vec<T>,
}

/// An invocation cut short by a constraint error.
///
/// Carries every outcome produced before the error so that work already
/// started by earlier constraints is not lost with it.
#[derive(Debug)]
pub(crate) struct Aborted<T> {
    pub error: Error,
    pub invoked: Vec<FieldInvocation<T>>,
}

impl<T> From<Aborted<T>> for Error {
    fn from(aborted: Aborted<T>) -> Self {
        aborted.error
    }
}

/// Invoke constraints for every declared field, collecting raw outcomes.
///
/// Every constraint runs exactly once unless `stop` is given, in which case
/// a field's remaining constraints are skipped once `stop` accepts an
/// outcome. A constraint error aborts immediately under
/// [`ErrorPolicy::Propagate`]; constraints after it are not invoked.
pub(crate) fn invoke<C: Evaluate>(
    spec: &ConstraintSpec<C>,
    fields: &Fields,
    policy: ErrorPolicy,
    stop: Option<fn(&C::Output) -> bool>,
) -> Result<Vec<FieldInvocation<C::Output>>, Aborted<C::Output>> {
    let mut invocations = Vec::with_capacity(spec.len());

    for (field, constraints) in spec.iter() {
        let value = fields.value(field);
        let mut outcomes = Vec::with_capacity(constraints.len());

        for (index, constraint) in constraints.iter().enumerate() {
            let outcome = match constraint.evaluate(field, value, fields) {
                Ok(outcome) => outcome,
                Err(source) => match policy {
                    ErrorPolicy::Propagate => {
                        invocations.push(FieldInvocation {
                            field: field.to_string(),
                            outcomes,
                        });
                        return Err(Aborted {
                            error: Error::Constraint {
                                field: field.to_string(),
                                index,
                                source,
                            },
                            invoked: invocations,
                        });
                    }
                    ErrorPolicy::Report => Some(report(field, index, &source)).into(),
                },
            };

            let halt = stop.is_some_and(|stop| stop(&outcome));
            outcomes.push(outcome);
            if halt {
                break;
            }
        }

        invocations.push(FieldInvocation {
            field: field.to_string(),
            outcomes,
        });
    }

    Ok(invocations)
}

/// Turn a constraint error into a field message.
pub(crate) fn report(field: &str, index: usize, source: &ConstraintError) -> String {
    warn!(field, index, error = %source, "constraint error reported as field message");
    let text = source.to_string();
    if text.is_empty() {
        "constraint failed".to_string()
    } else {
        text
    }
}

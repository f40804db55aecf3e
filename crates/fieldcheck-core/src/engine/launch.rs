//! Driving deferred checks once a call is known to be asynchronous.

use futures::future::{self, FutureExt};
use tokio::runtime::Handle;

use crate::config::Execution;
use crate::constraint::{Check, DeferredCheck};
use crate::error::{ConstraintError, Error};

pub(crate) enum Launcher {
    Inline,
    Spawn(Handle),
}

impl Launcher {
    /// Resolve the execution strategy. Spawning needs a runtime to spawn on.
    pub(crate) fn new(execution: Execution) -> Result<Self, Error> {
        match execution {
            Execution::Inline => Ok(Launcher::Inline),
            Execution::Spawn => Handle::try_current().map(Launcher::Spawn).map_err(|_| {
                Error::Configuration(
                    "spawned execution requires a running tokio runtime".to_string(),
                )
            }),
        }
    }

    /// Turn a raw check into something the asynchronous selector can await.
    ///
    /// Immediate outcomes become already-settled checks. Under
    /// [`Execution::Spawn`] deferred checks start running here, before the
    /// caller awaits anything.
    pub(crate) fn launch(&self, check: Check) -> DeferredCheck {
        match (self, check) {
            (_, Check::Immediate(outcome)) => future::ready(Ok(outcome)).boxed(),
            (Launcher::Inline, Check::Deferred(fut)) => fut,
            (Launcher::Spawn(handle), Check::Deferred(fut)) => {
                let task = handle.spawn(fut);
                async move {
                    task.await
                        .unwrap_or_else(|err| Err(ConstraintError::from(err)))
                }
                .boxed()
            }
        }
    }

    /// Release a check whose result nobody will read.
    ///
    /// Under [`Execution::Spawn`] a deferred check keeps running to
    /// settlement on the runtime. Under [`Execution::Inline`] it has not
    /// started and is dropped unpolled.
    pub(crate) fn detach(&self, check: Check) {
        if let (Launcher::Spawn(handle), Check::Deferred(fut)) = (self, check) {
            handle.spawn(fut);
        }
    }
}

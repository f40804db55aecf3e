//! Validator configuration.

/// Default label recorded on each validation span.
pub const DEFAULT_NAME: &str = "validator";

/// What to do when a constraint body fails outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the whole call with [`Error::Constraint`](crate::Error::Constraint).
    #[default]
    Propagate,
    /// Use the error's text as that field's message and carry on.
    Report,
}

/// How deferred checks are driven once a call turns asynchronous.
///
/// Constraints are always invoked at call time. What differs is when the
/// futures they return start making progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// Poll every deferred check concurrently inside the returned future.
    ///
    /// Deferred bodies do not start until the validation is awaited, and
    /// checks from a call that fails during invocation are dropped unpolled.
    /// Work a constraint starts in its invocation body, before returning its
    /// future, still happens at call time.
    #[default]
    Inline,
    /// Spawn every deferred check onto the current tokio runtime at call time.
    ///
    /// Checks run whether or not the validation is awaited, including checks
    /// from a call that fails during invocation. Requires a runtime.
    Spawn,
}

/// How an all-immediate validator invokes a field's constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncEvaluation {
    /// Invoke every constraint; outcomes after the first message are discarded.
    #[default]
    Eager,
    /// Stop invoking a field's constraints after its first message.
    ShortCircuit,
}

/// Validator configuration.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Label recorded on each validation span.
    pub name: String,

    /// Handling of constraint-internal errors.
    pub error_policy: ErrorPolicy,

    /// Driving of deferred checks.
    pub execution: Execution,

    /// Invocation strategy for all-immediate validators.
    ///
    /// Validators that accept deferred constraints always invoke eagerly.
    pub sync_evaluation: SyncEvaluation,
}

impl ValidatorConfig {
    /// Create a configuration with the given span label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            error_policy: ErrorPolicy::default(),
            execution: Execution::default(),
            sync_evaluation: SyncEvaluation::default(),
        }
    }

    /// Set the error policy.
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Set how deferred checks are driven.
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Set the invocation strategy for all-immediate validators.
    pub fn with_sync_evaluation(mut self, evaluation: SyncEvaluation) -> Self {
        self.sync_evaluation = evaluation;
        self
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

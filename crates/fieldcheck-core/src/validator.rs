//! Validator entry points.
//!
//! [`SyncValidator`] takes constraints that can only answer immediately and
//! returns its result directly. [`Validator`] takes constraints that may
//! defer and returns a [`Validation`], settled now or later depending on
//! what the constraints produced for this call.

use std::sync::Arc;

use crate::config::ValidatorConfig;
use crate::constraint::{Constraint, SyncConstraint};
use crate::engine;
use crate::error::{Error, Rejection};
use crate::result::ValidationResult;
use crate::spec::ConstraintSpec;
use crate::validation::Validation;
use crate::value::Fields;

/// Validator over constraints that always answer immediately.
///
/// Cheap to clone; clones share the same declaration.
#[derive(Debug, Clone)]
pub struct SyncValidator {
    spec: Arc<ConstraintSpec<SyncConstraint>>,
    config: ValidatorConfig,
}

impl SyncValidator {
    /// Create a validator with the default configuration.
    pub fn new(spec: ConstraintSpec<SyncConstraint>) -> Self {
        Self::with_config(spec, ValidatorConfig::default())
    }

    /// Create a validator with a custom configuration.
    pub fn with_config(spec: ConstraintSpec<SyncConstraint>, config: ValidatorConfig) -> Self {
        Self {
            spec: Arc::new(spec),
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Get the constraint declaration.
    pub fn spec(&self) -> &ConstraintSpec<SyncConstraint> {
        &self.spec
    }

    /// Validate `fields`, producing one outcome per declared field.
    pub fn validate(&self, fields: &Fields) -> Result<ValidationResult, Error> {
        engine::run_sync(&self.spec, fields, &self.config)
    }

    /// Hand `fields` back if every declared field is valid.
    pub fn check(&self, fields: Fields) -> Result<Fields, Rejection> {
        let result = self.validate(&fields)?;
        result.into_result(fields).map_err(Rejection::Invalid)
    }
}

/// Validator over constraints that may defer their outcome.
///
/// Cheap to clone; clones share the same declaration.
#[derive(Debug, Clone)]
pub struct Validator {
    spec: Arc<ConstraintSpec<Constraint>>,
    config: ValidatorConfig,
}

impl Validator {
    /// Create a validator with the default configuration.
    pub fn new(spec: ConstraintSpec<Constraint>) -> Self {
        Self::with_config(spec, ValidatorConfig::default())
    }

    /// Create a validator with a custom configuration.
    pub fn with_config(spec: ConstraintSpec<Constraint>, config: ValidatorConfig) -> Self {
        Self {
            spec: Arc::new(spec),
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Get the constraint declaration.
    pub fn spec(&self) -> &ConstraintSpec<Constraint> {
        &self.spec
    }

    /// Validate `fields`.
    ///
    /// Every constraint is invoked before this returns. If any of them
    /// deferred its outcome the whole result is [`Validation::Pending`];
    /// otherwise it is [`Validation::Ready`].
    pub fn validate(&self, fields: &Fields) -> Validation {
        engine::run(&self.spec, fields, &self.config)
    }

    /// Hand `fields` back if every declared field is valid.
    pub async fn check(&self, fields: Fields) -> Result<Fields, Rejection> {
        let result = self.validate(&fields).await?;
        result.into_result(fields).map_err(Rejection::Invalid)
    }
}

/// Validate `fields` against `spec` with the default configuration.
pub fn validate(fields: &Fields, spec: &ConstraintSpec<Constraint>) -> Validation {
    engine::run(spec, fields, &ValidatorConfig::default())
}

/// Validate `fields` against all-immediate `spec` with the default
/// configuration.
pub fn validate_sync(
    fields: &Fields,
    spec: &ConstraintSpec<SyncConstraint>,
) -> Result<ValidationResult, Error> {
    engine::run_sync(spec, fields, &ValidatorConfig::default())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::{ErrorPolicy, Execution, SyncEvaluation};
    use crate::engine::Mode;
    use crate::error::ConstraintError;

    fn too_small(limit: i64) -> SyncConstraint {
        SyncConstraint::new(move |_, value, _| match value.as_i64() {
            Some(n) if n <= limit => Some(format!("Expected {n} to be greater than {limit}")),
            _ => None,
        })
    }

    fn counted(counter: &Arc<AtomicUsize>, message: Option<&'static str>) -> SyncConstraint {
        let counter = Arc::clone(counter);
        SyncConstraint::new(move |_, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            message.map(str::to_string)
        })
    }

    fn expected(pairs: &[(&str, Option<&str>)]) -> ValidationResult {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_sync_validator_eager_invokes_everything() {
        let counter = Arc::new(AtomicUsize::new(0));
        let spec = ConstraintSpec::builder()
            .field(
                "age",
                [counted(&counter, Some("first")), counted(&counter, Some("second"))],
            )
            .build()
            .unwrap();

        let result = SyncValidator::new(spec).validate(&Fields::new()).unwrap();

        assert_eq!(result, expected(&[("age", Some("first"))]));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_sync_validator_short_circuit() {
        let counter = Arc::new(AtomicUsize::new(0));
        let spec = ConstraintSpec::builder()
            .field(
                "age",
                [counted(&counter, Some("first")), counted(&counter, Some("second"))],
            )
            .build()
            .unwrap();
        let config =
            ValidatorConfig::new("short").with_sync_evaluation(SyncEvaluation::ShortCircuit);

        let result = SyncValidator::with_config(spec, config)
            .validate(&Fields::new())
            .unwrap();

        assert_eq!(result, expected(&[("age", Some("first"))]));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sync_check_wrapper() {
        let spec = ConstraintSpec::builder()
            .field("age", too_small(25))
            .build()
            .unwrap();
        let validator = SyncValidator::new(spec);

        let adult = Fields::new().with("age", 30);
        assert_eq!(validator.check(adult.clone()).unwrap(), adult);

        match validator.check(Fields::new().with("age", 20)) {
            Err(Rejection::Invalid(result)) => {
                assert_eq!(result.message("age"), Some("Expected 20 to be greater than 25"))
            }
            other => panic!("expected invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_all_immediate_validator_is_ready() {
        let spec = ConstraintSpec::builder()
            .field("age", Constraint::from(too_small(25)))
            .build()
            .unwrap();

        let validation = Validator::new(spec).validate(&Fields::new().with("age", 20));

        assert_eq!(validation.mode(), Mode::Synchronous);
        let result = validation.into_ready().unwrap().unwrap();
        assert_eq!(result.message("age"), Some("Expected 20 to be greater than 25"));
    }

    #[test]
    fn test_spawn_without_runtime_is_configuration_error() {
        let spec = ConstraintSpec::builder()
            .field("age", too_small(25).deferred())
            .build()
            .unwrap();
        let config = ValidatorConfig::new("spawned").with_execution(Execution::Spawn);

        let validation = Validator::with_config(spec, config).validate(&Fields::new());

        assert!(matches!(
            validation.into_ready(),
            Ok(Err(Error::Configuration(_)))
        ));
    }

    #[tokio::test]
    async fn test_deferred_constraint_makes_every_field_pending() {
        let spec = ConstraintSpec::builder()
            .field("name", Constraint::from(too_small(0)))
            .field("age", too_small(25).deferred())
            .build()
            .unwrap();

        let validation = Validator::new(spec).validate(&Fields::new().with("age", 20));
        assert_eq!(validation.mode(), Mode::Asynchronous);

        let result = validation.await.unwrap();
        assert_eq!(
            result,
            expected(&[("name", None), ("age", Some("Expected 20 to be greater than 25"))])
        );
    }

    #[tokio::test]
    async fn test_spawned_checks_start_before_await() {
        let started = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&started);
        let spec = ConstraintSpec::builder()
            .field(
                "email",
                Constraint::deferred(move |_, _, _| {
                    let flag = Arc::clone(&flag);
                    async move {
                        flag.store(true, Ordering::SeqCst);
                        Ok(None)
                    }
                }),
            )
            .build()
            .unwrap();
        let config = ValidatorConfig::new("spawned").with_execution(Execution::Spawn);

        let validation = Validator::with_config(spec, config).validate(&Fields::new());
        tokio::task::yield_now().await;
        assert!(started.load(Ordering::SeqCst));

        assert_eq!(validation.await.unwrap(), expected(&[("email", None)]));
    }

    #[tokio::test]
    async fn test_inline_checks_wait_for_await() {
        let started = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&started);
        let spec = ConstraintSpec::builder()
            .field(
                "email",
                Constraint::deferred(move |_, _, _| {
                    let flag = Arc::clone(&flag);
                    async move {
                        flag.store(true, Ordering::SeqCst);
                        Ok(None)
                    }
                }),
            )
            .build()
            .unwrap();

        let validation = Validator::new(spec).validate(&Fields::new());
        tokio::task::yield_now().await;
        assert!(!started.load(Ordering::SeqCst));

        validation.await.unwrap();
        assert!(started.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_report_policy_keeps_other_fields() {
        let spec = ConstraintSpec::builder()
            .field(
                "email",
                Constraint::deferred(|_, _, _| async {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                    Err(ConstraintError::msg("lookup unavailable"))
                }),
            )
            .field("age", Constraint::from(too_small(25)))
            .build()
            .unwrap();
        let config = ValidatorConfig::new("report").with_error_policy(ErrorPolicy::Report);

        let result = Validator::with_config(spec, config)
            .validate(&Fields::new().with("age", 30))
            .await
            .unwrap();

        assert_eq!(
            result,
            expected(&[("email", Some("lookup unavailable")), ("age", None)])
        );
    }

    #[tokio::test]
    async fn test_async_check_wrapper_propagates_errors() {
        let spec = ConstraintSpec::builder()
            .field(
                "email",
                Constraint::deferred(|_, _, _| async { Err(ConstraintError::msg("down")) }),
            )
            .build()
            .unwrap();

        let rejection = Validator::new(spec)
            .check(Fields::new())
            .await
            .unwrap_err();

        assert!(matches!(
            rejection,
            Rejection::Failed(Error::Constraint { index: 0, .. })
        ));
    }

    #[test]
    fn test_free_functions_use_default_config() {
        let sync_spec = ConstraintSpec::builder()
            .field("age", too_small(25))
            .build()
            .unwrap();
        let fields = Fields::new().with("age", 26);
        assert!(validate_sync(&fields, &sync_spec).unwrap().is_valid());

        let spec = ConstraintSpec::builder()
            .field("age", Constraint::from(too_small(25)))
            .build()
            .unwrap();
        assert!(validate(&fields, &spec).is_ready());
    }
}

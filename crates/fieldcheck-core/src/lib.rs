//! FieldCheck Core - Constraint evaluation engine.
//!
//! Validates a flat record of named values against per-field constraints.
//! Each field gets either no error or the first message its constraints
//! produced, in declaration order. Constraints may answer immediately or
//! defer their outcome; a single deferred outcome turns the whole call
//! asynchronous.

pub mod config;
pub mod constraint;
mod engine;
pub mod error;
pub mod result;
pub mod spec;
pub mod validation;
pub mod validator;
pub mod value;

pub use config::{ErrorPolicy, Execution, SyncEvaluation, ValidatorConfig};
pub use constraint::{Check, Constraint, DeferredCheck, Evaluate, SyncConstraint};
pub use engine::Mode;
pub use error::{ConstraintError, Error, Rejection};
pub use result::ValidationResult;
pub use spec::{ConstraintEntry, ConstraintSpec, SpecBuilder};
pub use validation::Validation;
pub use validator::{validate, validate_sync, SyncValidator, Validator};
pub use value::{Fields, Value};

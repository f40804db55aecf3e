//! FieldCheck - per-field validation with immediate and deferred constraints.
//!
//! Declare constraints per field, then validate a flat record. Each field
//! reports no error or the first message of its constraints in declaration
//! order.
//!
//! ```no_run
//! use fieldcheck::prelude::*;
//!
//! # fn main() -> Result<(), fieldcheck::Error> {
//! let spec = ConstraintSpec::builder()
//!     .field("name", rules::equal_to("Bob"))
//!     .field("age", [rules::divisible_by(10), rules::greater_than(25)])
//!     .build()?;
//!
//! let fields = Fields::new().with("name", "Bob").with("age", 20);
//! let result = SyncValidator::new(spec).validate(&fields)?;
//! assert_eq!(result.message("age"), Some("Expected 20 to be greater than 25"));
//! # Ok(())
//! # }
//! ```
//!
//! Constraints that need to wait on something, such as a remote lookup,
//! are declared with [`Constraint::deferred`] and validated with a
//! [`Validator`], whose result can always be awaited.

pub use fieldcheck_core::*;

#[cfg(feature = "rules")]
pub use fieldcheck_rules as rules;

/// Commonly used types.
pub mod prelude {
    pub use fieldcheck_core::{
        validate, validate_sync, Check, Constraint, ConstraintError, ConstraintSpec, Error,
        ErrorPolicy, Execution, Fields, Mode, Rejection, SyncConstraint, SyncEvaluation,
        SyncValidator, Validation, ValidationResult, Validator, ValidatorConfig, Value,
    };

    #[cfg(feature = "rules")]
    pub use fieldcheck_rules as rules;
}

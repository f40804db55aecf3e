//! Test data generation for benchmarks.
//!
//! Records are generated from a fixed seed so runs are comparable.

use fieldcheck_core::{Constraint, ConstraintSpec, Fields, SyncConstraint};
use fieldcheck_rules as rules;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;

/// Scale factor for benchmark data generation.
#[derive(Clone, Copy, Debug, Default)]
pub enum Scale {
    /// 10 records.
    Tiny,
    /// 100 records.
    Small,
    /// 2,000 records.
    #[default]
    Medium,
}

impl Scale {
    /// Get the record count for this scale.
    pub fn count(&self) -> usize {
        match self {
            Scale::Tiny => 10,
            Scale::Small => 100,
            Scale::Medium => 2_000,
        }
    }

    /// Name used in benchmark ids.
    pub fn name(&self) -> &'static str {
        match self {
            Scale::Tiny => "tiny",
            Scale::Small => "small",
            Scale::Medium => "medium",
        }
    }
}

/// Generate signup-shaped records. Roughly a third of them fail something.
pub fn generate_records(scale: Scale) -> Vec<Fields> {
    let mut rng = StdRng::seed_from_u64(SEED);

    (0..scale.count())
        .map(|i| {
            let len = rng.gen_range(3..12);
            let name: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect();
            let email = if rng.gen_bool(0.85) {
                format!("{}{i}@example.com", name.to_lowercase())
            } else {
                name.clone()
            };

            Fields::new()
                .with("name", name)
                .with("email", email)
                .with("age", rng.gen_range(10..90i64))
                .with("score", rng.gen_range(0..1_000i64))
        })
        .collect()
}

/// All-immediate declaration over the generated records.
pub fn sync_spec() -> ConstraintSpec<SyncConstraint> {
    ConstraintSpec::builder()
        .field("name", [rules::required(), rules::min_length(4), rules::max_length(10)])
        .field("email", [rules::required(), rules::email()])
        .field("age", [rules::is_number(), rules::at_least(18), rules::less_than(80)])
        .field("score", [rules::divisible_by(5), rules::greater_than(100)])
        .build()
        .expect("fixture declaration is valid")
}

/// Declaration where every constraint defers.
pub fn deferred_spec() -> ConstraintSpec<Constraint> {
    ConstraintSpec::builder()
        .field("name", rules::min_length(4).deferred())
        .field("email", rules::email().deferred())
        .field(
            "age",
            [rules::deferred::greater_than(17), rules::deferred::less_than(80)],
        )
        .field("score", rules::deferred::greater_than(100))
        .build()
        .expect("fixture declaration is valid")
}

/// Immediate declaration with a single deferred constraint, which turns
/// every call asynchronous.
pub fn mixed_spec() -> ConstraintSpec<Constraint> {
    ConstraintSpec::builder()
        .field("name", [rules::required(), rules::min_length(4)].map(Constraint::from))
        .field("email", [rules::required(), rules::email()].map(Constraint::from))
        .field("age", Constraint::from(rules::at_least(18)))
        .field("score", rules::deferred::greater_than(100))
        .build()
        .expect("fixture declaration is valid")
}

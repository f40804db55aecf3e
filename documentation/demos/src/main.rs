//! FieldCheck: account signup demo
//!
//! Validates a handful of signup forms against format rules and a
//! simulated account directory, printing each result as JSON.
//!
//! Run with: cargo run --release
//! Set `RUST_LOG=fieldcheck_core=trace` to watch each field being settled.

use std::time::Duration;

use fieldcheck::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TAKEN: &[&str] = &["bob@acme.co", "alice@acme.co"];

/// Simulated remote lookup.
async fn account_exists(email: String) -> Result<bool, ConstraintError> {
    tokio::time::sleep(Duration::from_millis(50)).await;
    if email.ends_with("@offline.example") {
        return Err(ConstraintError::msg("account directory unreachable"));
    }
    Ok(TAKEN.contains(&email.as_str()))
}

fn signup_validator(config: ValidatorConfig) -> Result<Validator, Error> {
    let spec = ConstraintSpec::builder()
        .field(
            "email",
            [
                Constraint::from(rules::required()),
                Constraint::from(rules::email()),
                Constraint::deferred(|_, value, _| {
                    let email = value.as_str().unwrap_or_default().to_string();
                    async move {
                        let taken = account_exists(email).await?;
                        Ok(taken.then(|| "Account already exists".to_string()))
                    }
                }),
            ],
        )
        .field("password", [rules::min_length(8), rules::max_length(64)].map(Constraint::from))
        .field("confirm_password", rules::same_as("password"))
        .field("age", [rules::is_number(), rules::at_least(18)].map(Constraint::from))
        .build()?;

    Ok(Validator::with_config(spec, config))
}

fn forms() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({
            "email": "sam@acme.co",
            "password": "correct horse",
            "confirm_password": "correct horse",
            "age": 34,
        }),
        serde_json::json!({
            "email": "bob@acme.co",
            "password": "bobsdabest",
            "confirm_password": "bobadaworst",
            "age": 30,
        }),
        serde_json::json!({
            "email": "not-an-email",
            "password": "short",
            "confirm_password": "short",
            "age": 16,
        }),
        serde_json::json!({
            "email": "eve@offline.example",
            "password": "hunter2hunter2",
            "confirm_password": "hunter2hunter2",
            "age": 41,
        }),
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signup_demo=info,fieldcheck_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting signup demo");

    let strict = signup_validator(ValidatorConfig::new("signup").with_execution(Execution::Spawn))?;
    let lenient = signup_validator(
        ValidatorConfig::new("signup-lenient").with_error_policy(ErrorPolicy::Report),
    )?;

    for form in forms() {
        let fields = Fields::from_json(form)?;
        let email = fields.value("email").to_string();

        match strict.check(fields.clone()).await {
            Ok(_) => tracing::info!(%email, "signup accepted"),
            Err(Rejection::Invalid(result)) => {
                tracing::info!(%email, failed = result.error_count(), "signup rejected");
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            Err(Rejection::Failed(err)) => {
                tracing::warn!(%email, error = %err, "validation failed, retrying leniently");
                let result = lenient.validate(&fields).await?;
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }
    }

    Ok(())
}

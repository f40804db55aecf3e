//! FieldCheck Benchmark Suite
//!
//! Criterion benchmarks for the evaluation engine.
//!
//! # Benchmark Categories
//!
//! - **Sync**: all-immediate validation, eager and short-circuit
//! - **Async**: deferred validation, inline and spawned
//! - **Mode**: the cost of a single deferred constraint on an otherwise immediate call

pub mod fixtures;

pub use fixtures::{deferred_spec, generate_records, mixed_spec, sync_spec, Scale};

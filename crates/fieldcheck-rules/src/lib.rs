//! FieldCheck Rules - Ready-made field constraints.
//!
//! Every rule here answers immediately and can be used with either
//! validator. The [`deferred`] module offers a few of them delivered through
//! the deferred path instead.

mod compare;
pub mod deferred;
mod kind;
mod text;

pub use compare::{at_least, divisible_by, equal_to, greater_than, less_than, one_of, same_as};
pub use kind::{is_bool, is_number, is_string, required};
pub use text::{email, max_length, min_length};

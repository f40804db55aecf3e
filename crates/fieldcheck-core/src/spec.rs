//! Per-field constraint declarations.
//!
//! A field is declared with either one constraint or an ordered list of
//! them. Declarations are normalized to a list on entry; the order of the
//! list is the order in which outcomes are considered.

use indexmap::IndexMap;

use crate::constraint::{Constraint, Evaluate, SyncConstraint};
use crate::error::Error;

/// The raw declaration for one field.
#[derive(Debug, Clone)]
pub enum ConstraintEntry<C = Constraint> {
    /// A single constraint.
    Single(C),
    /// An ordered list of constraints.
    List(Vec<C>),
}

impl<C> ConstraintEntry<C> {
    /// Normalize to an ordered list, preserving author order.
    pub fn normalize(self) -> Vec<C> {
        match self {
            ConstraintEntry::Single(constraint) => vec![constraint],
            ConstraintEntry::List(constraints) => constraints,
        }
    }
}

impl<C: Evaluate> From<C> for ConstraintEntry<C> {
    fn from(constraint: C) -> Self {
        ConstraintEntry::Single(constraint)
    }
}

impl From<SyncConstraint> for ConstraintEntry<Constraint> {
    fn from(constraint: SyncConstraint) -> Self {
        ConstraintEntry::Single(constraint.into())
    }
}

impl<C> From<Vec<C>> for ConstraintEntry<C> {
    fn from(constraints: Vec<C>) -> Self {
        ConstraintEntry::List(constraints)
    }
}

impl<C, const N: usize> From<[C; N]> for ConstraintEntry<C> {
    fn from(constraints: [C; N]) -> Self {
        ConstraintEntry::List(constraints.into())
    }
}

/// The full per-field constraint declaration passed to a validator.
///
/// Keys are kept in declaration order; the validation result has exactly
/// these keys, in this order.
#[derive(Debug, Clone)]
pub struct ConstraintSpec<C = Constraint> {
    fields: IndexMap<String, Vec<C>>,
}

impl<C: Evaluate> ConstraintSpec<C> {
    /// Start building a declaration.
    pub fn builder() -> SpecBuilder<C> {
        SpecBuilder::new()
    }

    /// Build a declaration from `(field, entry)` pairs.
    ///
    /// Fails on an empty field name or a field declared twice.
    pub fn from_entries<I, K, E>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, E)>,
        K: Into<String>,
        E: Into<ConstraintEntry<C>>,
    {
        entries
            .into_iter()
            .fold(SpecBuilder::new(), |builder, (field, entry)| {
                builder.field(field, entry)
            })
            .build()
    }

    /// Constraints declared for `field`, in order.
    pub fn get(&self, field: &str) -> Option<&[C]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Iterate over fields and their constraints in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[C])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Iterate over declared field names.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total number of constraints across all fields.
    pub fn constraint_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }
}

/// Builder for [`ConstraintSpec`].
///
/// Declaration problems are collected as fields are added and reported by
/// [`SpecBuilder::build`].
#[derive(Debug)]
pub struct SpecBuilder<C = Constraint> {
    fields: IndexMap<String, Vec<C>>,
    problems: Vec<String>,
}

impl<C: Evaluate> SpecBuilder<C> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            problems: Vec::new(),
        }
    }

    /// Declare the constraints for a field.
    pub fn field(mut self, name: impl Into<String>, entry: impl Into<ConstraintEntry<C>>) -> Self {
        let name = name.into();
        if name.is_empty() {
            self.problems.push("field name must not be empty".to_string());
            return self;
        }
        if self.fields.contains_key(&name) {
            self.problems
                .push(format!("field `{name}` declared more than once"));
            return self;
        }
        self.fields.insert(name, entry.into().normalize());
        self
    }

    /// Finish the declaration.
    pub fn build(self) -> Result<ConstraintSpec<C>, Error> {
        if !self.problems.is_empty() {
            return Err(Error::Configuration(self.problems.join("; ")));
        }
        Ok(ConstraintSpec {
            fields: self.fields,
        })
    }
}

impl<C: Evaluate> Default for SpecBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

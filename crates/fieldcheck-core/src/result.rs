//! Per-field validation results.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The outcome of a validation call.
///
/// Holds exactly the fields that were declared, in declaration order, each
/// with `None` (no error) or the selected message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    outcomes: IndexMap<String, Option<String>>,
}

impl ValidationResult {
    /// Get a field's outcome. `None` if the field was not declared.
    pub fn get(&self, field: &str) -> Option<&Option<String>> {
        self.outcomes.get(field)
    }

    /// Get a field's message, if it failed.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.outcomes.get(field).and_then(|m| m.as_deref())
    }

    /// Check if a field was declared.
    pub fn contains(&self, field: &str) -> bool {
        self.outcomes.contains_key(field)
    }

    /// Check if no field failed.
    pub fn is_valid(&self) -> bool {
        self.outcomes.values().all(Option::is_none)
    }

    /// Iterate over failing fields and their messages.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|(field, message)| message.as_deref().map(|m| (field.as_str(), m)))
    }

    /// Number of failing fields.
    pub fn error_count(&self) -> usize {
        self.outcomes.values().filter(|m| m.is_some()).count()
    }

    /// Iterate over declared field names.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.outcomes.keys().map(String::as_str)
    }

    /// Iterate over all outcomes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.outcomes
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_deref()))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check if no fields were declared.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Pass `value` through if every field is valid, otherwise return self.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationResult> {
        if self.is_valid() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Consume into the underlying map.
    pub fn into_inner(self) -> IndexMap<String, Option<String>> {
        self.outcomes
    }
}

impl FromIterator<(String, Option<String>)> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, Option<&'a str>)> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = (&'a str, Option<&'a str>)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(field, message)| (field.to_string(), message.map(str::to_string)))
            .collect()
    }
}

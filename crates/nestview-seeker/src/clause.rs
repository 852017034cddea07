//! Clause types for query predicates.
//!
//! A [`Clause`] is a single search predicate: a field name and the text that
//! field must contain, compared without regard to case.

use crate::value::Value;

/// A case-insensitive substring predicate on one field.
///
/// The needle is case-folded once at construction; field text is folded at
/// match time.
///
/// # Example
///
/// ```
/// use nestview_seeker::{Clause, Value};
///
/// let clause = Clause::contains("name", "ADA");
/// assert!(clause.matches(&Value::String("Ada Lovelace")));
/// assert!(!clause.matches(&Value::None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// The field name to inspect.
    pub field: String,
    needle: String,
}

impl Clause {
    /// Creates a clause matching values of `field` that contain `needle`.
    pub fn contains(field: impl Into<String>, needle: &str) -> Self {
        Clause {
            field: field.into(),
            needle: needle.to_lowercase(),
        }
    }

    /// The case-folded needle.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Evaluates this clause against a field value.
    ///
    /// Absent values never match, whatever the needle.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match field_value.search_text() {
            Some(text) => text.to_lowercase().contains(&self.needle),
            None => false,
        }
    }
}

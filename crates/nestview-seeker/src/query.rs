//! Query builder and executor.
//!
//! The [`Query`] struct provides a fluent builder API for constructing queries
//! and methods for executing them against collections.

use crate::clause::Clause;
use crate::ordering::{compare_by_ordering, Dir, OrderBy};
use crate::value::Value;

/// A query for searching, ordering and windowing collections.
///
/// A query holds one clause group, an optional single ordering and an
/// optional offset/limit window. The match logic is:
///
/// ```text
/// match = (at least one clause matches) ∨ (no clauses exist)
/// ```
///
/// Execution always runs in the same order: filter, then a stable sort, then
/// the offset/limit window.
///
/// # Example
///
/// ```
/// use nestview_seeker::{Query, Dir};
///
/// let query = Query::new()
///     .or_contains("name", "urgent")
///     .or_contains("tags", "urgent")
///     .order_by("priority", Dir::Desc)
///     .offset(20)
///     .limit(10)
///     .build();
/// assert_eq!(query.clauses().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    clauses: Vec<Clause>,
    ordering: Option<OrderBy>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl Query {
    /// Creates a new empty query.
    ///
    /// An empty query matches all items in their original order.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Clause builders
    // ========================================================================

    /// Adds a clause to the any-of group.
    pub fn or(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Adds a case-insensitive contains clause.
    pub fn or_contains(self, field: &str, needle: &str) -> Self {
        self.or(Clause::contains(field, needle))
    }

    /// Adds one contains clause per field, all with the same needle.
    ///
    /// An empty needle adds nothing, leaving the query unfiltered.
    pub fn search<I, S>(self, fields: I, needle: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if needle.is_empty() {
            return self;
        }
        fields
            .into_iter()
            .fold(self, |query, field| query.or_contains(field.as_ref(), needle))
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    /// Sets the ordering, replacing any previous one.
    pub fn order_by(self, field: &str, dir: Dir) -> Self {
        self.ordering(Some(OrderBy::new(field, dir)))
    }

    /// Sets an ascending ordering.
    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, Dir::Asc)
    }

    /// Sets a descending ordering.
    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, Dir::Desc)
    }

    /// Sets or clears the ordering.
    pub fn ordering(mut self, ordering: Option<OrderBy>) -> Self {
        self.ordering = ordering;
        self
    }

    // ========================================================================
    // Limits
    // ========================================================================

    /// Sets the maximum number of results to return.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets the number of results to skip.
    pub fn offset(mut self, n: usize) -> Self {
        self.offset = Some(n);
        self
    }

    /// Finalizes the query.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the clauses.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns the ordering, if set.
    pub fn get_ordering(&self) -> Option<&OrderBy> {
        self.ordering.as_ref()
    }

    /// Returns the limit, if set.
    pub fn get_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns the offset, if set.
    pub fn get_offset(&self) -> Option<usize> {
        self.offset
    }

    /// Returns `true` if this query has no clauses (matches everything).
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single item matches this query.
    ///
    /// The accessor function extracts field values from the item.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.clauses.is_empty()
            || self
                .clauses
                .iter()
                .any(|clause| clause.matches(&accessor(item, &clause.field)))
    }

    /// Filters a slice, returning references to matching items.
    ///
    /// Results are stably sorted by the query's ordering, then offset and
    /// limit are applied.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let matching: Vec<&'a T> = items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect();
        self.arrange(matching, accessor)
    }

    /// Sorts and windows an already filtered sequence.
    ///
    /// Clauses are ignored; this is the second half of [`Query::filter`].
    pub fn arrange<'a, T, F>(&self, mut items: Vec<&'a T>, accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        if let Some(ordering) = &self.ordering {
            // `sort_by` is stable, so ties keep their input order
            items.sort_by(|a, b| compare_by_ordering(*a, *b, ordering, &accessor));
        }

        let offset = self.offset.unwrap_or(0);
        if offset > 0 {
            if offset >= items.len() {
                return Vec::new();
            }
            items.drain(..offset);
        }

        if let Some(limit) = self.limit {
            items.truncate(limit);
        }

        items
    }

    /// Counts the number of matching items.
    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .count()
    }

    /// Returns `true` if any item matches.
    pub fn any<T, F>(&self, items: &[T], accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().any(|item| self.matches(item, &accessor))
    }

    /// Finds the first matching item and returns its index.
    pub fn position<T, F>(&self, items: &[T], accessor: F) -> Option<usize>
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().position(|item| self.matches(item, &accessor))
    }
}

//! Column discovery, header formatting and per-field visibility.
//!
//! Columns are never declared. They are the union of keys seen across the
//! record collection, in first-seen order, and are rediscovered from scratch
//! whenever the collection is replaced.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::record::Record;

/// Per-field visibility, keyed by field name.
pub type VisibilityMap = HashMap<String, bool>;

/// A discovered field and its display header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Key in the records.
    pub field: String,
    /// Display text derived from `field`.
    pub header: String,
}

impl Column {
    /// Creates a column, deriving the header from the field name.
    pub fn new(field: impl Into<String>) -> Self {
        let field = field.into();
        let header = format_header(&field);
        Column { field, header }
    }
}

/// Collects one column per distinct key, in order of first appearance.
pub fn discover_columns(records: &[Record]) -> Vec<Column> {
    let mut seen: HashSet<&str> = HashSet::new();
    records
        .iter()
        .flat_map(|record| record.keys())
        .filter(|key| seen.insert(key.as_str()))
        .map(Column::new)
        .collect()
}

/// Turns a field name into a header.
///
/// A space goes before every ASCII uppercase letter after the first
/// character, the first character is uppercased, and underscores become
/// spaces.
///
/// | field | header |
/// |-------|--------|
/// | `first_name` | `First name` |
/// | `userID` | `User I D` |
/// | `createdAt` | `Created At` |
/// | `HTTPStatus` | `H T T P Status` |
/// | `_id` | ` id` |
pub fn format_header(field: &str) -> String {
    let mut spaced = String::with_capacity(field.len() + 4);
    for (i, c) in field.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let mut chars = spaced.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    capitalized.replace('_', " ")
}

/// Keeps the columns whose field maps to `true`, preserving order.
///
/// Fields absent from the map are not visible.
pub fn visible_columns<'a>(
    columns: &'a [Column],
    visibility: &VisibilityMap,
) -> Vec<&'a Column> {
    columns
        .iter()
        .filter(|column| visibility.get(&column.field).copied().unwrap_or(false))
        .collect()
}

/// The discovered columns of a collection plus their visibility.
#[derive(Debug, Clone, Default)]
pub struct ColumnModel {
    columns: Vec<Column>,
    visibility: VisibilityMap,
    initially_hidden: HashSet<String>,
}

impl ColumnModel {
    /// Creates an empty model; `hidden` fields start hidden on every rebuild.
    pub fn new<I, S>(hidden: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ColumnModel {
            columns: Vec::new(),
            visibility: VisibilityMap::new(),
            initially_hidden: hidden.into_iter().map(Into::into).collect(),
        }
    }

    /// Rediscovers columns and reseeds visibility, discarding prior choices.
    pub fn rebuild(&mut self, records: &[Record]) {
        self.columns = discover_columns(records);
        self.visibility = self
            .columns
            .iter()
            .map(|column| {
                let visible = !self.initially_hidden.contains(&column.field);
                (column.field.clone(), visible)
            })
            .collect();
        debug!(columns = self.columns.len(), "rebuilt column model");
    }

    /// All discovered columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The discovered column for `field`.
    pub fn column(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.field == field)
    }

    /// Visibility of every discovered field.
    pub fn visibility(&self) -> &VisibilityMap {
        &self.visibility
    }

    /// Visible columns in discovery order.
    pub fn visible_columns(&self) -> Vec<&Column> {
        visible_columns(&self.columns, &self.visibility)
    }

    /// Returns `true` if `field` is discovered and shown.
    pub fn is_visible(&self, field: &str) -> bool {
        self.visibility.get(field).copied().unwrap_or(false)
    }

    /// Flips visibility of a known field.
    ///
    /// Unknown fields are ignored and `false` is returned.
    pub fn toggle_visibility(&mut self, field: &str) -> bool {
        match self.visibility.get_mut(field) {
            Some(visible) => {
                *visible = !*visible;
                debug!(field, visible = *visible, "toggled column");
                true
            }
            None => {
                debug!(field, "ignoring visibility toggle for unknown column");
                false
            }
        }
    }

    /// Sets visibility of a known field; unknown fields are ignored.
    pub fn set_visible(&mut self, field: &str, visible: bool) -> bool {
        match self.visibility.get_mut(field) {
            Some(current) => {
                *current = visible;
                true
            }
            None => false,
        }
    }
}

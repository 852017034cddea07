//! The tabular view engine: records in, filtered/sorted/paged views out.
//!
//! The engine only stores state (records, query, sort key, page, page size);
//! every view is derived on demand from that state, so hosts call the view
//! methods freshly on each render. Narrowing and ordering are delegated to
//! [`nestview_seeker::Query`], reading record fields through
//! [`Seekable::accessor`].
//!
//! ```
//! use nestview::{Dir, TabularView, ViewConfig};
//!
//! let records = nestview::parse_records(
//!     r#"[
//!         {"name": "Ada", "age": 36},
//!         {"name": "Alan", "age": 41},
//!         {"name": "Grace", "age": 85}
//!     ]"#,
//! )
//! .unwrap();
//!
//! let mut view = TabularView::new(&ViewConfig::default().rows_per_page(2));
//! view.set_records(records);
//! view.set_search_query("a");
//! view.set_sort("age");
//! view.set_sort("age");
//! assert_eq!(view.sort_direction("age"), Some(Dir::Desc));
//!
//! let names: Vec<&str> = view
//!     .paged_view()
//!     .iter()
//!     .filter_map(|r| r["name"].as_str())
//!     .collect();
//! assert_eq!(names, vec!["Grace", "Alan"]);
//! assert_eq!(view.page_info().to_string(), "Page 1 of 2");
//! ```

use std::fmt;

use nestview_seeker::{Dir, OrderBy, Query, Seekable, Value};
use tracing::debug;

use crate::columns::{Column, ColumnModel};
use crate::config::ViewConfig;
use crate::record::{CellView, Record};

/// A visible column with its sort indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView<'a> {
    /// The visible column.
    pub column: &'a Column,
    /// Direction when this is the sorted column.
    pub sorted: Option<Dir>,
}

/// One row of the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView<'a> {
    /// Position of the record in the raw collection.
    pub index: usize,
    /// The record shown in this row.
    pub record: &'a Record,
    /// One cell per visible column, in column order.
    pub cells: Vec<CellView<'a>>,
}

/// Pagination summary for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page, 1-based.
    pub current: usize,
    /// Number of pages, at least 1.
    pub total: usize,
    /// Records per page.
    pub page_size: usize,
    /// Number of records passing the search.
    pub filtered: usize,
    /// Whether `prev_page` would move.
    pub has_prev: bool,
    /// Whether `next_page` would move.
    pub has_next: bool,
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} of {}", self.current, self.total)
    }
}

/// A record paired with its position in the raw collection.
#[derive(Debug, Clone, Copy)]
struct Indexed<'r> {
    index: usize,
    record: &'r Record,
}

impl Seekable for Indexed<'_> {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        self.record.seeker_field_value(field)
    }
}

/// Owns the record collection and derives the views a grid displays.
#[derive(Debug, Clone)]
pub struct TabularView {
    records: Vec<Record>,
    columns: ColumnModel,
    query: String,
    sort: Option<OrderBy>,
    page: usize,
    page_size: usize,
    page_size_options: Vec<usize>,
    loading: bool,
}

impl Default for TabularView {
    fn default() -> Self {
        TabularView::new(&ViewConfig::default())
    }
}

impl TabularView {
    /// Creates an empty view with the page size and hidden columns of `config`.
    pub fn new(config: &ViewConfig) -> Self {
        TabularView {
            records: Vec::new(),
            columns: ColumnModel::new(config.hidden_columns.iter().cloned()),
            query: String::new(),
            sort: None,
            page: 1,
            page_size: config.rows_per_page.max(1),
            page_size_options: config.page_size_options.clone(),
            loading: false,
        }
    }

    // ------------------------------------------------------------------
    // Records and columns
    // ------------------------------------------------------------------

    /// Replaces the collection, rediscovers columns and returns to page 1.
    ///
    /// The search query and sort key carry over.
    pub fn set_records(&mut self, records: Vec<Record>) {
        debug!(records = records.len(), "replacing records");
        self.records = records;
        self.columns.rebuild(&self.records);
        self.page = 1;
    }

    /// The raw collection, in the order it was given.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Discovered columns and their visibility.
    pub fn columns(&self) -> &ColumnModel {
        &self.columns
    }

    /// Visible columns in discovery order.
    pub fn visible_columns(&self) -> Vec<&Column> {
        self.columns.visible_columns()
    }

    /// Flips visibility of a known column; unknown fields are ignored.
    pub fn toggle_column(&mut self, field: &str) -> bool {
        let known = self.columns.toggle_visibility(field);
        if known {
            self.clamp_page();
        }
        known
    }

    /// Shows or hides a known column; unknown fields are ignored.
    pub fn set_column_visible(&mut self, field: &str, visible: bool) -> bool {
        let known = self.columns.set_visible(field, visible);
        if known {
            self.clamp_page();
        }
        known
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Stores the search query. An empty query disables filtering.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        debug!(query = %self.query, "search query changed");
        self.clamp_page();
    }

    /// The stored search query.
    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// Removes the search query.
    pub fn clear_search(&mut self) {
        self.set_search_query(String::new());
    }

    /// Records where some visible column contains the query, in raw order.
    ///
    /// Null and missing values never match. With a query set and every
    /// column hidden, nothing matches.
    pub fn filtered_view(&self) -> Vec<&Record> {
        let rows = self.indexed();
        let matching = self.matching(&rows);
        matching.into_iter().map(|row| row.record).collect()
    }

    fn indexed(&self) -> Vec<Indexed<'_>> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| Indexed { index, record })
            .collect()
    }

    fn matching<'r, 's>(&self, rows: &'r [Indexed<'s>]) -> Vec<&'r Indexed<'s>> {
        if self.query.is_empty() {
            return rows.iter().collect();
        }

        let fields: Vec<&str> = self
            .columns
            .visible_columns()
            .into_iter()
            .map(|column| column.field.as_str())
            .collect();
        if fields.is_empty() {
            return Vec::new();
        }

        Query::new()
            .search(fields, &self.query)
            .filter(rows, Indexed::accessor)
    }

    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    /// Sorts by `field`, cycling asc and desc on repeated calls.
    ///
    /// A different field starts over at ascending.
    pub fn set_sort(&mut self, field: &str) {
        let dir = match &self.sort {
            Some(current) if current.field == field => current.dir.flipped(),
            _ => Dir::Asc,
        };
        debug!(field, %dir, "sort changed");
        self.sort = Some(OrderBy::new(field, dir));
    }

    /// The active sort key, if any.
    pub fn sort(&self) -> Option<&OrderBy> {
        self.sort.as_ref()
    }

    /// Drops the sort key, restoring raw order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Direction of `field` if it is the sorted column.
    pub fn sort_direction(&self, field: &str) -> Option<Dir> {
        self.sort
            .as_ref()
            .filter(|sort| sort.field == field)
            .map(|sort| sort.dir)
    }

    /// The filtered view, stably sorted by the active key.
    pub fn sorted_view(&self) -> Vec<&Record> {
        let rows = self.indexed();
        let sorted = self
            .arranged()
            .arrange(self.matching(&rows), Indexed::accessor);
        sorted.into_iter().map(|row| row.record).collect()
    }

    /// Visible columns paired with their sort indicator.
    pub fn headers(&self) -> Vec<HeaderView<'_>> {
        self.columns
            .visible_columns()
            .into_iter()
            .map(|column| HeaderView {
                column,
                sorted: self.sort_direction(&column.field),
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Paging
    // ------------------------------------------------------------------

    /// Changes the page size and returns to page 1. Zero counts as 1.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 1;
        debug!(page_size = self.page_size, "page size changed");
    }

    /// Records per page, at least 1.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Page sizes offered to the host.
    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
        debug!(page = self.page, "page changed");
    }

    /// Moves one page forward; stays put on the last page.
    pub fn next_page(&mut self) {
        self.set_page(self.current_page() + 1);
    }

    /// Moves one page back; stays put on the first page.
    pub fn prev_page(&mut self) {
        self.set_page(self.current_page().saturating_sub(1));
    }

    /// The current page, clamped into `[1, total_pages]`.
    pub fn current_page(&self) -> usize {
        self.page.clamp(1, self.total_pages())
    }

    /// `max(1, ceil(filtered / page_size))`
    pub fn total_pages(&self) -> usize {
        pages_for(self.filtered_view().len(), self.page_size)
    }

    /// The current page of the sorted view.
    pub fn paged_view(&self) -> Vec<&Record> {
        self.page_window()
            .into_iter()
            .map(|row| row.record)
            .collect()
    }

    fn page_window(&self) -> Vec<Indexed<'_>> {
        let rows = self.indexed();
        let matching = self.matching(&rows);
        let page = self.page.clamp(1, pages_for(matching.len(), self.page_size));

        let window = self
            .arranged()
            .offset((page - 1) * self.page_size)
            .limit(self.page_size)
            .arrange(matching, Indexed::accessor);
        window.into_iter().copied().collect()
    }

    /// Summary of the pagination state.
    pub fn page_info(&self) -> PageInfo {
        let filtered = self.filtered_view().len();
        let total = pages_for(filtered, self.page_size);
        let current = self.page.clamp(1, total);
        PageInfo {
            current,
            total,
            page_size: self.page_size,
            filtered,
            has_prev: current > 1,
            has_next: current < total,
        }
    }

    /// The current page with one cell per visible column.
    pub fn page_rows(&self) -> Vec<RowView<'_>> {
        let fields: Vec<&str> = self
            .columns
            .visible_columns()
            .into_iter()
            .map(|column| column.field.as_str())
            .collect();

        self.page_window()
            .into_iter()
            .map(|row| RowView {
                index: row.index,
                record: row.record,
                cells: fields
                    .iter()
                    .map(|field| CellView::of(row.record, field))
                    .collect(),
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Marks the collection as being fetched. Views are unaffected.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Returns `true` while the host is fetching records.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn arranged(&self) -> Query {
        Query::new().ordering(self.sort.clone())
    }

    fn clamp_page(&mut self) {
        self.page = self.current_page();
    }
}

fn pages_for(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

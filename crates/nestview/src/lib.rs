//! Nestview - browsable views over records with nested substructure.
//!
//! Records are JSON objects whose fields may themselves be objects or arrays.
//! Nestview derives everything a grid needs to present them:
//!
//! - Columns discovered from the records, with headers and visibility
//! - A filter, sort and paginate pipeline over the collection
//! - Expandable trees for drilling into any nested value
//!
//! Drawing is left to the host. It reads the derived state, and calls the
//! mutating operations in response to user gestures.
//!
//! # Quick Start
//!
//! ```rust
//! use nestview::{CellView, DrillDown, TabularView, ViewConfig};
//!
//! let records = nestview::parse_records(r#"[
//!     {"name": "Ada", "langs": ["en", "fr"]},
//!     {"name": "Alan", "langs": null}
//! ]"#).unwrap();
//!
//! let config = ViewConfig::default();
//! let mut view = TabularView::new(&config);
//! view.set_records(records);
//! view.set_search_query("ada");
//!
//! let rows = view.page_rows();
//! assert_eq!(rows.len(), 1);
//! assert!(matches!(rows[0].cells[1], CellView::Nested(_)));
//!
//! let mut drill = DrillDown::new(&config);
//! let langs = view.columns().column("langs").unwrap();
//! drill.open_cell(rows[0].record, langs);
//! drill.toggle("");
//! assert_eq!(drill.render().unwrap().outline(), "▾ [2]\n  0: \"en\"\n  1: \"fr\"");
//! ```
//!
//! # Modules
//!
//! | Module | Role |
//! |--------|------|
//! | columns | column discovery, headers, visibility |
//! | engine | [`TabularView`]: filtered, sorted and paged views |
//! | expansion | [`ExpansionSet`] keyed by [`NodePath`] |
//! | tree | structural rendering into [`TreeNode`]s |
//! | drilldown | [`DrillDown`] sessions over one value |
//! | config | [`ViewConfig`] from code, YAML or JSON |

mod columns;
mod config;
mod drilldown;
mod engine;
mod error;
mod expansion;
mod record;
mod tree;

pub use columns::{
    discover_columns, format_header, visible_columns, Column, ColumnModel, VisibilityMap,
};
pub use config::{ViewConfig, DEFAULT_MAX_TREE_DEPTH, DEFAULT_ROWS_PER_PAGE};
pub use drilldown::DrillDown;
pub use engine::{HeaderView, PageInfo, RowView, TabularView};
pub use error::{Error, Result};
pub use expansion::{ExpansionSet, NodePath};
pub use record::{parse_records, CellView, Record};
pub use tree::{render, PrimitiveKind, Shape, Structured, TreeNode, TreeRenderer};

pub use nestview_seeker::{Dir, OrderBy};

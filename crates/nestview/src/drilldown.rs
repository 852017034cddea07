//! Drill-down sessions: a secondary tree view of one cell's value.
//!
//! At most one session is active. Expansion state lives only as long as its
//! session: opening a value starts from an empty set and closing discards it.

use serde_json::Value as Json;
use tracing::debug;

use crate::columns::Column;
use crate::config::ViewConfig;
use crate::expansion::{ExpansionSet, NodePath};
use crate::record::Record;
use crate::tree::{TreeNode, TreeRenderer};

/// Coordinates the drill-down view and owns its expansion state.
#[derive(Debug, Clone)]
pub struct DrillDown {
    value: Json,
    title: String,
    active: bool,
    expansion: ExpansionSet,
    parse_strings: bool,
    max_depth: usize,
}

impl Default for DrillDown {
    fn default() -> Self {
        DrillDown::new(&ViewConfig::default())
    }
}

impl DrillDown {
    /// Creates a closed coordinator using the drill-down settings of `config`.
    pub fn new(config: &ViewConfig) -> Self {
        DrillDown {
            value: Json::Null,
            title: String::new(),
            active: false,
            expansion: ExpansionSet::new(),
            parse_strings: config.parse_string_values,
            max_depth: config.max_tree_depth,
        }
    }

    /// Starts a session on `value`, replacing any active one.
    ///
    /// A string holding a JSON array or object is shown as that structure
    /// when string parsing is enabled; any other string stays as it is.
    pub fn open(&mut self, value: Json, title: impl Into<String>) {
        let value = match value {
            Json::String(text) if self.parse_strings => match parse_structured(&text) {
                Some(parsed) => parsed,
                None => Json::String(text),
            },
            other => other,
        };

        self.value = value;
        self.title = title.into();
        self.expansion.reset();
        self.active = true;
        debug!(title = %self.title, "opened drill-down");
    }

    /// Opens the value of `column` in `record`, titled with the column header.
    ///
    /// A missing field opens as `null`.
    pub fn open_cell(&mut self, record: &Record, column: &Column) {
        let value = record.get(&column.field).cloned().unwrap_or(Json::Null);
        self.open(value, column.header.clone());
    }

    /// Ends the session and discards its expansion state.
    ///
    /// The last value and title stay readable.
    pub fn close(&mut self) {
        if self.active {
            debug!(title = %self.title, "closed drill-down");
        }
        self.active = false;
        self.expansion.reset();
    }

    /// Returns `true` while a session is active.
    pub fn is_open(&self) -> bool {
        self.active
    }

    /// Title of the current or last session.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Value of the current or last session, after string parsing.
    pub fn value(&self) -> &Json {
        &self.value
    }

    /// Expanded paths of the active session.
    pub fn expansion(&self) -> &ExpansionSet {
        &self.expansion
    }

    /// Flips expansion of a node; the host renders again afterwards.
    pub fn toggle(&mut self, path: impl AsRef<str>) -> bool {
        self.expansion.toggle(path)
    }

    /// Returns `true` if the node at `path` is expanded.
    pub fn is_expanded(&self, path: impl AsRef<str>) -> bool {
        self.expansion.is_expanded(path)
    }

    /// Renders the active value, or `None` when no session is open.
    pub fn render(&self) -> Option<TreeNode> {
        if !self.active {
            return None;
        }
        let mut renderer = TreeRenderer::new(&self.expansion).max_depth(self.max_depth);
        Some(renderer.render_at(&self.value, &NodePath::root()))
    }
}

/// Parses `text` as JSON, keeping the result only if it is an array or object.
fn parse_structured(text: &str) -> Option<Json> {
    match serde_json::from_str::<Json>(text) {
        Ok(value @ (Json::Array(_) | Json::Object(_))) => Some(value),
        _ => None,
    }
}

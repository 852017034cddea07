//! Display configuration supplied by the host.
//!
//! A [`ViewConfig`] can be built in code or loaded from YAML or JSON. Every
//! key is optional and falls back to its default:
//!
//! ```yaml
//! rows_per_page: 25
//! page_size_options: [10, 25, 50]
//! hidden_columns: [internal_id]
//! max_tree_depth: 32
//! parse_string_values: false
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Page size used when none is configured.
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Container depth at which drill-down trees stop expanding.
pub const DEFAULT_MAX_TREE_DEPTH: usize = 64;

/// Host-supplied display settings for a record view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Initial page size.
    pub rows_per_page: usize,
    /// Page sizes the host offers for selection.
    pub page_size_options: Vec<usize>,
    /// Fields that start hidden whenever columns are rediscovered.
    pub hidden_columns: Vec<String>,
    /// Containers at this depth (root is 0) never expand.
    pub max_tree_depth: usize,
    /// Whether drill-down parses string values that hold a JSON array or object.
    pub parse_string_values: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            page_size_options: vec![5, 10, 25],
            hidden_columns: Vec::new(),
            max_tree_depth: DEFAULT_MAX_TREE_DEPTH,
            parse_string_values: true,
        }
    }
}

impl ViewConfig {
    /// Parses and validates a YAML configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ViewConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ViewConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every size and depth is at least 1.
    pub fn validate(&self) -> Result<()> {
        if self.rows_per_page == 0 {
            return Err(Error::InvalidConfig {
                field: "rows_per_page",
                reason: "must be at least 1",
            });
        }
        if self.page_size_options.contains(&0) {
            return Err(Error::InvalidConfig {
                field: "page_size_options",
                reason: "must not contain 0",
            });
        }
        if self.max_tree_depth == 0 {
            return Err(Error::InvalidConfig {
                field: "max_tree_depth",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Sets the initial page size.
    pub fn rows_per_page(mut self, rows: usize) -> Self {
        self.rows_per_page = rows;
        self
    }

    /// Sets the offered page sizes.
    pub fn page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    /// Marks a field as initially hidden.
    pub fn hide_column(mut self, field: impl Into<String>) -> Self {
        self.hidden_columns.push(field.into());
        self
    }

    /// Sets the maximum drill-down depth.
    pub fn max_tree_depth(mut self, depth: usize) -> Self {
        self.max_tree_depth = depth;
        self
    }

    /// Enables or disables parsing of JSON held in string values.
    pub fn parse_string_values(mut self, enabled: bool) -> Self {
        self.parse_string_values = enabled;
        self
    }
}

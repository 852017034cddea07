//! Error types for the nestview crate.
//!
//! Only the loading boundary can fail: parsing records or configuration and
//! validating configuration values. View operations themselves are total.

use thiserror::Error;

/// Errors that can occur when loading records or configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed JSON input, or JSON of the wrong shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML input, or YAML of the wrong shape.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A configuration value outside its allowed range.
    #[error("invalid configuration: '{field}' {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

/// Result type for nestview loading operations.
pub type Result<T> = std::result::Result<T, Error>;

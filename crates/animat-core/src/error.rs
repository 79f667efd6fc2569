//! Error types for configuration-space operations.
//!
//! Out-of-range coordinates and occupied cells are not errors: the space
//! absorbs them as no-ops. Only operations that address a node which does
//! not exist, or configuration that cannot be used, fail.

use thiserror::Error;

/// Result type for configuration-space operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while operating on a configuration space.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// An in-range cell has no compute node (never placed, or removed).
    #[error("no compute node at ({x}, {y})")]
    MissingNode { x: i32, y: i32 },

    /// A configuration value cannot be used.
    #[error("invalid value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    /// Configuration text could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// A snapshot could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl GridError {
    pub fn missing_node(x: i32, y: i32) -> Self {
        GridError::MissingNode { x, y }
    }

    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        GridError::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for GridError {
    fn from(e: serde_json::Error) -> Self {
        GridError::Serialization(e.to_string())
    }
}

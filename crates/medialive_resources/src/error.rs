//! Error types for resource construction and definition loading.

use medialive_core::ShapeError;
use thiserror::Error;

/// Result type alias for resource operations.
pub type ResourceResult<T> = Result<T, ResourceError>;

/// Errors raised by a [`Scope`](crate::Scope) when a resource registers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    #[error("There is already a resource with logical id '{logical_id}' in {path}")]
    IdentityConflict { path: String, logical_id: String },

    #[error("Invalid logical id '{0}': must be 1-255 alphanumeric characters")]
    InvalidLogicalId(String),
}

/// Errors that can occur while building or loading resources.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Invalid properties: {0}")]
    Shape(#[from] ShapeError),

    #[error("Scope error: {0}")]
    Scope(#[from] ScopeError),

    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

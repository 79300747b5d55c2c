//! Error types for record construction.

use thiserror::Error;

/// Result type alias for record operations.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Structural violations raised while building a record.
///
/// Every variant names the record kind and the offending field so the
/// diagnostic points straight at the input that broke the schema.
#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("{record}: unknown field `{field}`")]
    UnknownField { record: String, field: String },

    #[error("{record}.{field}: expected {expected}, found {found}")]
    WrongType {
        record: String,
        field: String,
        expected: String,
        found: String,
    },

    #[error("{record}.{field}[{index}]: expected {expected}, found {found}")]
    WrongElement {
        record: String,
        field: String,
        index: usize,
        expected: String,
        found: String,
    },

    #[error("expected a {expected} record, found {found}")]
    WrongKind { expected: String, found: String },

    #[error("Invalid document for {record}: {message}")]
    InvalidDocument { record: String, message: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShapeError {
    /// Record kind the violation was raised for, if it is tied to one.
    pub fn record(&self) -> Option<&str> {
        match self {
            ShapeError::UnknownField { record, .. }
            | ShapeError::WrongType { record, .. }
            | ShapeError::WrongElement { record, .. }
            | ShapeError::InvalidDocument { record, .. } => Some(record),
            ShapeError::WrongKind { expected, .. } => Some(expected),
            ShapeError::Json(_) => None,
        }
    }

    /// Field the violation was raised for, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ShapeError::UnknownField { field, .. }
            | ShapeError::WrongType { field, .. }
            | ShapeError::WrongElement { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Whether this is a structural violation of the record schema, as
    /// opposed to a malformed input document.
    pub fn is_structural_violation(&self) -> bool {
        matches!(
            self,
            ShapeError::UnknownField { .. }
                | ShapeError::WrongType { .. }
                | ShapeError::WrongElement { .. }
                | ShapeError::WrongKind { .. }
        )
    }
}

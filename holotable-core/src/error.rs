//! Core error types for Holotable.

use thiserror::Error;

/// Core error type for Holotable operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Category name did not match any known archive category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A record could not be normalized into the typed model.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A required field was absent from a record.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! Error types for the review event store and document mapping.
//!
//! [`ReviewEvent`](crate::ReviewEvent) itself never fails; these errors come
//! from persistence, file export and decoding documents.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// SQLite error from rusqlite.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document field had an unexpected type.
    #[error("Invalid document: field '{field}' must be {expected}")]
    Document {
        field: &'static str,
        expected: &'static str,
    },

    /// The event is not attached to a card and cannot be stored.
    #[error("Review event has no parent card")]
    MissingParent,
}

pub type Result<T> = std::result::Result<T, Error>;

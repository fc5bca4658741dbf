//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the backing store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backend could not complete an operation.
    #[error("Store operation failed: {0}")]
    Backend(String),

    /// Filesystem error from the file backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

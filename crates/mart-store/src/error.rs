//! Store error types.

use thiserror::Error;

/// Errors that can occur when using a key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open or create the store.
    #[error("Failed to open store: {0}")]
    Open(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Underlying I/O failure (disk full, permissions, quota).
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value was not valid UTF-8 text.
    #[error("Value for key '{0}' is not valid UTF-8")]
    NonTextValue(String),

    /// The in-memory backing lock was poisoned by a panicking writer.
    #[error("Store lock poisoned")]
    Poisoned,
}

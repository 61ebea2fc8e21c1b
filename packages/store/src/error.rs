//! Errors raised by session persistence backends.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),

    /// Browser storage is disabled or the call was rejected.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

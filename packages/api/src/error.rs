//! Error taxonomy for backend calls.
//!
//! | Variant | Cause | Session side effect |
//! |---------|-------|---------------------|
//! | [`ApiError::Transport`] | Timeout, refused connection, DNS, body read failure | none |
//! | [`ApiError::Unauthorized`] | HTTP 401 | session cleared, unauthorized hook fired |
//! | [`ApiError::Status`] | Any other non-2xx status | none |
//! | [`ApiError::Decode`] | 2xx body that doesn't match the expected payload | none |
//! | [`ApiError::Store`] | Session storage failed | none |
//!
//! Nothing is retried.

use serde_json::Value;
use store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("request rejected with status {status}: {message}")]
    Status {
        status: u16,
        message: String,
        /// The envelope's `error` field, e.g. validation details.
        error: Option<Value>,
    },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// True for transport failures caused by the request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

//! # Session model
//!
//! A [`Session`] is the client-held proof of authentication. It is persisted as a
//! single JSON object under [`SESSION_STORAGE_KEY`]:
//!
//! ```json
//! { "token": "<bearer token>", "id": "<user id>" }
//! ```
//!
//! The token is written right after login. The identifier stays empty until the
//! navigation guard verifies the token against the backend, which then fills it in.
//! A session with an empty token is treated as no session at all.

use serde::{Deserialize, Serialize};

/// Storage key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "user";

/// Bearer token plus the user identifier it was verified for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token returned by `POST /auth/login`.
    #[serde(default)]
    pub token: String,
    /// User identifier returned by `GET /auth/verify`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Session {
    /// Fresh session for a token that has not been verified yet.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            id: None,
        }
    }

    /// Builder variant of [`Session::set_id`].
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// True once both token and identifier are present.
    pub fn is_verified(&self) -> bool {
        self.has_token() && self.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

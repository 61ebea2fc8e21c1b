//! # Session repository on an abstract key-value store
//!
//! [`SessionStore`] is the only way the rest of the workspace touches the persisted
//! session. It wraps a [`KeyValueStore`] backend and handles the JSON encoding of
//! [`Session`] under [`SESSION_STORAGE_KEY`], so the same logic runs against an
//! in-memory store (tests, native builds), a file (desktop), or the browser's
//! `localStorage`.
//!
//! ## [`KeyValueStore`] trait
//!
//! Mirrors the shape of the Web Storage API: `get_item` / `set_item` / `remove_item`
//! on string keys and values. Implementations live in sibling modules
//! ([`crate::memory`], `file_store`, `local`).
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`read`](SessionStore::read) | Current session, `None` when absent or unreadable. |
//! | [`token`](SessionStore::token) | Non-empty bearer token of the current session. |
//! | [`write`](SessionStore::write) | Replaces the stored session. |
//! | [`set_id`](SessionStore::set_id) | Read-modify-write of the identifier on the current session. |
//! | [`clear`](SessionStore::clear) | Removes the session. Idempotent. |
//!
//! ## Concurrency
//!
//! `read` and `write` are independent calls. [`set_id`](SessionStore::set_id) reads
//! then writes without holding anything across the two steps, so a concurrent
//! `clear` between them is overwritten. Callers that race a logout against a guard
//! run get last-writer-wins.

use crate::error::StoreError;
use crate::models::{Session, SESSION_STORAGE_KEY};

/// Async string key-value storage backend.
pub trait KeyValueStore {
    fn get_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Option<String>>;
    fn set_item(
        &self,
        key: &str,
        value: String,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn remove_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}

/// Typed access to the persisted [`Session`].
///
/// Cloning is cheap when the backend is cheap to clone; every clone sees the same
/// underlying storage.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the backend.
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Returns the stored session, if any.
    ///
    /// A blob that fails to parse is reported and treated as absent.
    pub async fn read(&self) -> Option<Session> {
        let raw = self.store.get_item(SESSION_STORAGE_KEY).await?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Discarding unreadable session blob: {e}");
                None
            }
        }
    }

    /// Non-empty token of the stored session.
    pub async fn token(&self) -> Option<String> {
        self.read()
            .await
            .filter(Session::has_token)
            .map(|session| session.token)
    }

    pub async fn write(&self, session: &Session) -> Result<(), StoreError> {
        let raw = serde_json::to_string(session)?;
        self.store.set_item(SESSION_STORAGE_KEY, raw).await
    }

    /// Merge a verified identifier into the stored session.
    ///
    /// Returns the updated session, or `None` when there is nothing to update.
    pub async fn set_id(&self, id: &str) -> Result<Option<Session>, StoreError> {
        let Some(mut session) = self.read().await else {
            return Ok(None);
        };
        session.set_id(id);
        self.write(&session).await?;
        Ok(Some(session))
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.remove_item(SESSION_STORAGE_KEY).await
    }
}

//! # Browser `localStorage` store
//!
//! [`LocalStore`] is the [`KeyValueStore`] used by the web client. Every call looks up
//! `window.localStorage` afresh; `web_sys::Storage` is a thin handle and the browser
//! owns the data, so there is nothing to cache.
//!
//! Reads swallow errors (a disabled storage reads as "no session"). Writes and removals
//! report [`StoreError::Unavailable`] so callers can treat a failed write as a failed
//! login or verification.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::error::StoreError;
use crate::repo::KeyValueStore;

/// `window.localStorage`-backed store for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".into()))
    }
}

fn js_error(value: JsValue) -> StoreError {
    StoreError::Unavailable(format!("{value:?}"))
}

impl KeyValueStore for LocalStore {
    async fn get_item(&self, key: &str) -> Option<String> {
        self.storage().ok()?.get_item(key).ok().flatten()
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.storage()?.set_item(key, &value).map_err(js_error)
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}

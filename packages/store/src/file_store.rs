//! # Filesystem-backed session store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each key in its own
//! file so a native client survives restarts without logging in again.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── user.json     # the serialized session (key "user")
//! ```

use std::path::PathBuf;

use crate::error::StoreError;
use crate::repo::KeyValueStore;

/// Filesystem-backed store for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.item_path(key)).ok()
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.item_path(key), value)?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.item_path(key)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

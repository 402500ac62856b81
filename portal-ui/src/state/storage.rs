//! Browser localStorage adapter for the core session store.

use analytics_portal::session::{KeyValueStore, StoreError};
use web_sys::Storage;

/// [`KeyValueStore`] backed by `window.localStorage`.
///
/// When storage is unavailable (private mode, disabled cookies) reads come
/// back empty and writes fail, which leaves the user signed out.
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage()
            .ok_or_else(|| StoreError::Unavailable("localStorage".to_string()))?;

        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!(key, error = ?e, "Failed to remove localStorage entry");
        }
    }
}

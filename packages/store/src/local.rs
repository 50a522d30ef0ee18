//! # localStorage-backed key-value store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! Values live in `window.localStorage` under their plain keys, so the bearer
//! token survives reloads with no explicit expiry.
//!
//! The store is a zero-size handle that looks up `localStorage` on every call.
//! When storage is unavailable (sandboxed iframe, disabled cookies) reads return
//! `None` and writes are dropped with a warning.

use web_sys::Storage;

use crate::kv::KeyValueStore;

/// localStorage-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, not persisting {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("Failed to persist {key} to localStorage");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}

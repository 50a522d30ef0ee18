use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and non-browser builds.
///
/// Clones share the same map, so a store handed to a client can still be
/// inspected by the test that created it.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::TOKEN_KEY;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get(TOKEN_KEY).is_none());

        store.set(TOKEN_KEY, "abc");
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));

        store.set(TOKEN_KEY, "def");
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("def"));

        store.remove(TOKEN_KEY);
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();

        handle.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let store = MemoryStore::new();
        store.remove("nothing-here");
        assert!(store.get("nothing-here").is_none());
    }
}

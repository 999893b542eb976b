use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory store for tests and native fallback.
///
/// Clones share the same map, so a second handle behaves like the same
/// storage seen after a page reload.
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

    fn keys(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("a").is_none());

        store.set("a", "1");
        assert_eq!(store.get("a").as_deref(), Some("1"));

        store.set("a", "2");
        assert_eq!(store.get("a").as_deref(), Some("2"));

        store.remove("a");
        assert!(store.get("a").is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("shared", "yes");
        assert_eq!(other.get("shared").as_deref(), Some("yes"));
    }

    #[test]
    fn test_remove_prefixed() {
        let store = MemoryStore::new();
        store.set("app_cache:a", "1");
        store.set("app_cache:b", "2");
        store.set("theme", "dark");

        store.remove_prefixed("app_cache:");

        let mut keys = store.keys();
        keys.sort();
        assert_eq!(keys, vec!["theme".to_string()]);
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::new();
        store.set_json("list", &vec![1, 2, 3]);
        assert_eq!(store.get_json::<Vec<i32>>("list"), Some(vec![1, 2, 3]));

        store.set("broken", "{not json");
        assert!(store.get_json::<Vec<i32>>("broken").is_none());
    }
}

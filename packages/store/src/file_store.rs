//! # Filesystem-backed key-value store
//!
//! [`FileStore`] persists the client's local state as a single JSON object
//! in `<base_dir>/storage.json`. It is the native stand-in for browser
//! `localStorage`, used by desktop builds and by tests that need state to
//! survive a fresh handle.
//!
//! Every operation re-reads the file, so two `FileStore`s pointing at the
//! same directory observe each other's writes. A file that no longer parses
//! is renamed to `storage.json.corrupt` before the store starts over.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::kv::KeyValueStore;

const FILE_NAME: &str = "storage.json";
const CORRUPT_FILE_NAME: &str = "storage.json.corrupt";

/// Filesystem-backed store for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    fn path(&self) -> PathBuf {
        self.base.join(FILE_NAME)
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let Ok(raw) = std::fs::read_to_string(self.path()) else {
            return BTreeMap::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                let aside = self.base.join(CORRUPT_FILE_NAME);
                tracing::warn!(
                    "{} is not valid JSON ({e}), moving it to {}",
                    self.path().display(),
                    aside.display()
                );
                if let Err(e) = std::fs::rename(self.path(), &aside) {
                    tracing::error!("Cannot move {} aside: {e}", self.path().display());
                }
                BTreeMap::new()
            }
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Cannot create {}: {e}", self.base.display());
            return;
        }
        match serde_json::to_string_pretty(entries) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(self.path(), raw) {
                    tracing::warn!("Cannot write {}: {e}", self.path().display());
                }
            }
            Err(e) => tracing::error!("Cannot serialize local storage: {e}"),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.read_all();
        if entries.remove(key).is_some() {
            self.write_all(&entries);
        }
    }

    fn keys(&self) -> Vec<String> {
        self.read_all().into_keys().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("kakepple_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store.set("kakepple_access_token", "abc");
        store.set("theme", "dark");

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(reopened.get("kakepple_access_token").as_deref(), Some("abc"));
        assert_eq!(reopened.keys().len(), 2);

        reopened.remove("theme");
        assert!(store.get("theme").is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_file_is_kept_aside() {
        let dir = std::env::temp_dir().join(format!("kakepple_corrupt_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(FILE_NAME), "{not json").unwrap();

        let store = FileStore::new(dir.clone());
        assert!(store.get("theme").is_none());
        store.set("theme", "light");

        assert_eq!(store.get("theme").as_deref(), Some("light"));
        let kept = std::fs::read_to_string(dir.join(CORRUPT_FILE_NAME)).unwrap();
        assert_eq!(kept, "{not json");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = std::env::temp_dir().join(format!("kakepple_missing_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir);
        assert!(store.get("anything").is_none());
        assert!(store.keys().is_empty());
    }
}

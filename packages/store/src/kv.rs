//! # Key-value storage: the device-local persistence seam
//!
//! Everything the client keeps on the device goes through [`KeyValueStore`]:
//! auth tokens, the quick-category list, the TTL cache, theme preference.
//! The trait mirrors the browser `Storage` API (string keys, string values)
//! so that [`crate::BrowserStorage`] is a thin adapter, while
//! [`crate::MemoryStore`] and [`crate::FileStore`] back tests and native
//! builds.
//!
//! ## Error handling
//!
//! Implementations swallow I/O failures: reads return `None`, writes do
//! nothing. A full or disabled storage degrades to "nothing persisted" and
//! the page keeps working against the server.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// String-keyed storage for small client-side values.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// All keys currently present, in no particular order.
    fn keys(&self) -> Vec<String>;

    /// Read a JSON value. Missing or unparseable entries yield `None`.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Discarding unparseable value under {key}: {e}");
                None
            }
        }
    }

    /// Serialize `value` as JSON and store it.
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set(key, &raw),
            Err(e) => tracing::error!("Failed to serialize value for {key}: {e}"),
        }
    }

    /// Remove every key starting with `prefix`.
    fn remove_prefixed(&self, prefix: &str) {
        for key in self.keys() {
            if key.starts_with(prefix) {
                self.remove(&key);
            }
        }
    }
}

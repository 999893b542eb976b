//! # Browser storage: `localStorage` / `sessionStorage`
//!
//! [`BrowserStorage`] is the [`KeyValueStore`] used on the web platform.
//! Long-lived state (tokens, quick categories, theme) goes to
//! `localStorage`; the TTL cache goes to `sessionStorage` so it dies with
//! the tab.
//!
//! The `Storage` handle is looked up on every call instead of being held,
//! which keeps the struct `Clone` and free of JS values. All failures
//! (storage disabled, quota exceeded) are swallowed like the other stores.

use web_sys::Storage;

use crate::kv::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKind {
    Local,
    Session,
}

/// Web `Storage`-backed store.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    kind: StorageKind,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self {
            kind: StorageKind::Local,
        }
    }

    pub fn session() -> Self {
        Self {
            kind: StorageKind::Session,
        }
    }

    fn storage(&self) -> Option<Storage> {
        let window = web_sys::window()?;
        let storage = match self.kind {
            StorageKind::Local => window.local_storage(),
            StorageKind::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("Browser storage rejected write for {key}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn keys(&self) -> Vec<String> {
        let Some(storage) = self.storage() else {
            return Vec::new();
        };
        let len = storage.length().unwrap_or(0);
        (0..len)
            .filter_map(|i| storage.key(i).ok().flatten())
            .collect()
    }
}

//! # Expiring response cache
//!
//! [`TtlCache`] avoids refetching the same analytics within a session. Each
//! entry is stored as `{"data": …, "timestamp": <ms>}` under
//! `app_cache:<key>`; a read older than its TTL removes the entry and is a
//! miss. There is no size bound and no LRU. The whole cache lives in
//! whatever [`KeyValueStore`] it is given (session storage on the web).
//!
//! Time comes from a [`Clock`] so tests can move it by hand.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

pub const CACHE_PREFIX: &str = "app_cache:";
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Millisecond wall clock.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Hand-driven clock.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn starting_at(millis: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(millis)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.fetch_add(by.as_millis() as i64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[derive(Serialize, Deserialize)]
struct CacheEntry {
    data: serde_json::Value,
    timestamp: i64,
}

/// Time-boxed key-value cache over a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct TtlCache<S, C = SystemClock> {
    store: S,
    clock: C,
    ttl: Duration,
}

impl<S: KeyValueStore> TtlCache<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> TtlCache<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            ttl: DEFAULT_TTL,
        }
    }

    /// Builder method to change the default TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn storage_key(key: &str) -> String {
        format!("{CACHE_PREFIX}{key}")
    }

    /// Read `key` using the cache's default TTL.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_with_ttl(key, self.ttl)
    }

    /// Read `key`, treating entries older than `ttl` as absent.
    pub fn get_with_ttl<T: DeserializeOwned>(&self, key: &str, ttl: Duration) -> Option<T> {
        let storage_key = Self::storage_key(key);
        let entry: CacheEntry = self.store.get_json(&storage_key)?;

        let age = self.clock.now_millis() - entry.timestamp;
        if age > ttl.as_millis() as i64 {
            tracing::debug!("Cache entry {key} expired ({age} ms old)");
            self.store.remove(&storage_key);
            return None;
        }

        serde_json::from_value(entry.data).ok()
    }

    pub fn set<T: Serialize>(&self, key: &str, data: &T) {
        let data = match serde_json::to_value(data) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Not caching {key}: {e}");
                return;
            }
        };
        let entry = CacheEntry {
            data,
            timestamp: self.clock.now_millis(),
        };
        self.store.set_json(&Self::storage_key(key), &entry);
    }

    /// Drop cached entries: all of them, or only those whose key starts with `prefix`.
    pub fn invalidate(&self, prefix: Option<&str>) {
        let full_prefix = Self::storage_key(prefix.unwrap_or(""));
        self.store.remove_prefixed(&full_prefix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn cache() -> (TtlCache<MemoryStore, ManualClock>, MemoryStore, ManualClock) {
        let store = MemoryStore::new();
        let clock = ManualClock::starting_at(1_700_000_000_000);
        (
            TtlCache::with_clock(store.clone(), clock.clone()),
            store,
            clock,
        )
    }

    #[test]
    fn test_fresh_entry_is_returned() {
        let (cache, _, clock) = cache();
        cache.set("summary:personal", &vec!["a".to_string()]);

        clock.advance(Duration::from_secs(60));
        assert_eq!(
            cache.get::<Vec<String>>("summary:personal"),
            Some(vec!["a".to_string()])
        );
    }

    #[test]
    fn test_expired_entry_is_absent_and_removed() {
        let (cache, store, clock) = cache();
        cache.set("savings", &42);

        clock.advance(DEFAULT_TTL + Duration::from_millis(1));
        assert_eq!(cache.get::<i32>("savings"), None);
        assert!(store.get("app_cache:savings").is_none());
    }

    #[test]
    fn test_entry_at_exact_ttl_is_still_fresh() {
        let (cache, _, clock) = cache();
        cache.set("k", &1);

        clock.advance(DEFAULT_TTL);
        assert_eq!(cache.get::<i32>("k"), Some(1));
    }

    #[test]
    fn test_custom_ttl() {
        let (cache, _, clock) = cache();
        cache.set("k", &1);

        clock.advance(Duration::from_secs(11));
        assert_eq!(cache.get_with_ttl::<i32>("k", Duration::from_secs(10)), None);
    }

    #[test]
    fn test_invalidate_by_prefix() {
        let (cache, store, _) = cache();
        cache.set("analytics:2026", &1);
        cache.set("analytics:2025", &2);
        cache.set("assets:types", &3);
        store.set("theme", "dark");

        cache.invalidate(Some("analytics:"));
        assert_eq!(cache.get::<i32>("analytics:2026"), None);
        assert_eq!(cache.get::<i32>("assets:types"), Some(3));

        cache.invalidate(None);
        assert_eq!(cache.get::<i32>("assets:types"), None);
        // Non-cache keys survive a full invalidation
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_corrupt_entry_is_a_miss() {
        let (cache, store, _) = cache();
        store.set("app_cache:broken", "not json");
        assert_eq!(cache.get::<i32>("broken"), None);
    }
}

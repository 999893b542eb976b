//! # Client configuration: `kakepple.toml`
//!
//! Defines where the client finds the backend and how long it caches
//! read-mostly responses.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://kakepple-production.up.railway.app"
//!
//! [cache]
//! ttl_secs = 300   # 0 disables caching
//! ```
//!
//! ## Sources
//!
//! A browser bundle has no process environment, so [`ClientConfig::from_env`]
//! reads `KAKEPPLE_API_URL` and `KAKEPPLE_CACHE_TTL_SECS` at **compile
//! time** via `option_env!`. Native builds may instead load a TOML file
//! with [`ClientConfig::from_toml`].
//!
//! All structs derive `Default` so a missing or empty config is equivalent
//! to the production defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://kakepple-production.up.railway.app";

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub cache: CacheSection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    /// Backend origin, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CacheSection {
    /// Lifetime of cached responses in seconds. 0 disables the cache.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_ttl_secs() -> u64 {
    300
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by build-time environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("KAKEPPLE_API_URL") {
            config = config.with_base_url(url);
        }
        if let Some(ttl) = option_env!("KAKEPPLE_CACHE_TTL_SECS").and_then(|s| s.parse().ok()) {
            config.cache.ttl_secs = ttl;
        }
        config
    }

    /// Builder method to point at another backend.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Builder method to set the cache lifetime.
    pub fn with_cache_ttl(mut self, secs: u64) -> Self {
        self.cache.ttl_secs = secs;
        self
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        match self.cache.ttl_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "kakepple.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(s)?;
        Ok(config.normalized())
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn normalized(mut self) -> Self {
        self.api.base_url = self.api.base_url.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.cache_ttl(), Some(Duration::from_secs(300)));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ClientConfig::from_toml("").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:8000/")
            .with_cache_ttl(0);
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.cache_ttl(), None);

        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_partial_toml_strips_trailing_slash() {
        let config = ClientConfig::from_toml("[api]\nbase_url = \"http://api.test/\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://api.test");
        assert_eq!(config.cache.ttl_secs, 300);
    }
}

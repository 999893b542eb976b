//! Shared client constructor for all platforms.
//!
//! Tokens, quick categories and the theme live in the long-lived
//! [`platform_store`]; the TTL cache gets its own [`cache_store`] so cached
//! responses do not outlive the session:
//! - **Web** (WASM + `web` feature): `localStorage` and `sessionStorage` via
//!   [`store::BrowserStorage`]
//! - **Native** (tests, tooling): JSON files via [`store::FileStore`] under
//!   the data and cache directories

use dioxus::prelude::*;
use store::{ClientConfig, QuickCategories, Theme, TokenStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::BrowserStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

/// The client type every page talks to.
pub type Client = api::ApiClient<PlatformStore>;

/// Open the platform-appropriate key-value store.
pub fn platform_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::BrowserStorage::local()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("kakepple");
        store::FileStore::new(base)
    }
}

/// Store for cached responses. Cleared with the tab on the web.
pub fn cache_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::BrowserStorage::session()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("kakepple");
        store::FileStore::new(base)
    }
}

/// Build a client from the compiled-in configuration.
pub fn make_client() -> Client {
    let config = ClientConfig::from_env();
    tracing::debug!("api base url {}", config.api.base_url);
    api::ApiClient::new(&config, TokenStore::new(platform_store())).with_cache(&config, cache_store())
}

pub fn make_quick_categories() -> QuickCategories<PlatformStore> {
    QuickCategories::new(platform_store())
}

pub fn load_theme() -> Theme {
    Theme::load(&platform_store())
}

pub fn save_theme(theme: Theme) {
    theme.save(&platform_store());
}

/// The client provided by [`crate::AuthProvider`].
pub fn use_client() -> Client {
    use_context::<Client>()
}

/// Waits `millis` on the browser timer. Returns at once on native builds.
pub async fn sleep_ms(millis: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(millis).await;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = millis;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_is_kept_apart_from_tokens() {
        assert_ne!(cache_store().base_dir(), platform_store().base_dir());
    }
}

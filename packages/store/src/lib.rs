//! Device-local state for the Kakepple client.

pub mod cache;
pub mod config;
pub mod kv;
pub mod quick_categories;
pub mod theme;
pub mod tokens;

mod file_store;
mod memory;
pub use file_store::FileStore;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::{BrowserStorage, StorageKind};

pub use cache::{Clock, ManualClock, SystemClock, TtlCache};
pub use config::ClientConfig;
pub use kv::KeyValueStore;
pub use quick_categories::{QuickCategories, QuickCategory};
pub use theme::{apply_theme, Theme};
pub use tokens::{TokenPair, TokenStore};

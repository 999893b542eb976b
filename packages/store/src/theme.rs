//! Light/dark theme preference.

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }

    /// Light → Dark → System → Light.
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }

    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        store
            .get(THEME_KEY)
            .and_then(|s| Theme::parse(&s))
            .unwrap_or_default()
    }

    pub fn save<S: KeyValueStore>(self, store: &S) {
        store.set(THEME_KEY, self.as_str());
    }
}

/// Toggle the `dark` class on the document root.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let dark = match theme {
        Theme::Dark => true,
        Theme::Light => false,
        Theme::System => web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|m| m.matches())
            .unwrap_or(false),
    };
    let classes = root.class_list();
    let _ = if dark {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn apply_theme(_theme: Theme) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_theme_persists() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::System);

        Theme::Dark.save(&store);
        assert_eq!(Theme::load(&store), Theme::Dark);

        store.set(THEME_KEY, "sepia");
        assert_eq!(Theme::load(&store), Theme::System);
    }

    #[test]
    fn test_cycle() {
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next().next(), Theme::Light);
    }
}

//! # Quick-entry categories
//!
//! The dashboard and the floating quick-entry button show a short list of
//! shortcut categories. Users can add, remove and reset them; the list lives
//! only on the device under [`QUICK_CATEGORIES_KEY`] and never reaches the
//! server.
//!
//! Each entry carries an icon name and a color token that the UI maps to
//! an icon and a CSS class. Both are free-form strings so that stored lists
//! written by older builds keep loading.

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

pub const QUICK_CATEGORIES_KEY: &str = "quickCategories";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickCategory {
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl QuickCategory {
    pub fn new(name: &str, icon: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }
}

/// The built-in shortcut list.
pub fn default_quick_categories() -> Vec<QuickCategory> {
    vec![
        QuickCategory::new("食費", "ShoppingCart", "red"),
        QuickCategory::new("日用品", "Package", "blue"),
        QuickCategory::new("交通費", "Car", "green"),
        QuickCategory::new("交際費", "Coffee", "purple"),
        QuickCategory::new("娯楽費", "Sparkles", "pink"),
    ]
}

/// Icons offered by the category editor, with their labels.
pub const AVAILABLE_ICONS: &[(&str, &str)] = &[
    ("ShoppingCart", "買い物"),
    ("Utensils", "食事"),
    ("Package", "荷物"),
    ("Car", "車"),
    ("Coffee", "カフェ"),
    ("Sparkles", "娯楽"),
    ("Home", "家"),
    ("Smartphone", "スマホ"),
    ("Gift", "ギフト"),
    ("Plane", "旅行"),
    ("BookOpen", "書籍"),
    ("Shirt", "衣類"),
    ("Zap", "光熱費"),
    ("Heart", "ハート"),
];

/// Color tokens offered by the category editor, with their labels.
pub const AVAILABLE_COLORS: &[(&str, &str)] = &[
    ("red", "赤"),
    ("blue", "青"),
    ("green", "緑"),
    ("purple", "紫"),
    ("pink", "ピンク"),
    ("amber", "オレンジ"),
    ("cyan", "シアン"),
    ("gray", "グレー"),
];

/// Device-persisted list of quick-entry categories.
#[derive(Clone, Debug)]
pub struct QuickCategories<S> {
    store: S,
}

impl<S: KeyValueStore> QuickCategories<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The saved list, or the defaults when nothing valid is stored.
    pub fn load(&self) -> Vec<QuickCategory> {
        self.store
            .get_json(QUICK_CATEGORIES_KEY)
            .unwrap_or_else(default_quick_categories)
    }

    pub fn save(&self, categories: &[QuickCategory]) {
        self.store.set_json(QUICK_CATEGORIES_KEY, categories);
    }

    /// Append a category. Blank names are ignored.
    pub fn add(&self, name: &str, icon: &str, color: &str) -> Vec<QuickCategory> {
        let mut categories = self.load();
        let name = name.trim();
        if name.is_empty() {
            return categories;
        }
        categories.push(QuickCategory::new(name, icon, color));
        self.save(&categories);
        categories
    }

    /// Remove the category at `index`. Out-of-range indices are a no-op.
    pub fn remove(&self, index: usize) -> Vec<QuickCategory> {
        let mut categories = self.load();
        if index < categories.len() {
            categories.remove(index);
            self.save(&categories);
        }
        categories
    }

    pub fn reset(&self) -> Vec<QuickCategory> {
        let categories = default_quick_categories();
        self.save(&categories);
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_defaults_when_empty() {
        let quick = QuickCategories::new(MemoryStore::new());
        let categories = quick.load();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0].name, "食費");
        assert_eq!(categories[0].icon, "ShoppingCart");
    }

    #[test]
    fn test_add_persists_across_reload() {
        let store = MemoryStore::new();
        let quick = QuickCategories::new(store.clone());

        let categories = quick.add("  カフェ  ", "Coffee", "amber");
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[5].name, "カフェ");

        // Simulated page reload: fresh handle over the same storage
        let reloaded = QuickCategories::new(store);
        let categories = reloaded.load();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[5], QuickCategory::new("カフェ", "Coffee", "amber"));
    }

    #[test]
    fn test_add_blank_name_is_ignored() {
        let store = MemoryStore::new();
        let quick = QuickCategories::new(store.clone());

        assert_eq!(quick.add("   ", "Coffee", "red").len(), 5);
        assert!(store.get(QUICK_CATEGORIES_KEY).is_none());
    }

    #[test]
    fn test_remove_persists_across_reload() {
        let store = MemoryStore::new();
        let quick = QuickCategories::new(store.clone());

        let categories = quick.remove(0);
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0].name, "日用品");

        // Out of range leaves the list alone
        assert_eq!(quick.remove(42).len(), 4);

        let reloaded = QuickCategories::new(store);
        assert_eq!(reloaded.load().len(), 4);
        assert!(reloaded.load().iter().all(|c| c.name != "食費"));
    }

    #[test]
    fn test_reset_persists_defaults() {
        let store = MemoryStore::new();
        let quick = QuickCategories::new(store.clone());

        quick.remove(0);
        quick.remove(0);
        quick.add("旅行", "Plane", "cyan");

        let categories = quick.reset();
        assert_eq!(categories, default_quick_categories());

        let reloaded = QuickCategories::new(store);
        assert_eq!(reloaded.load(), default_quick_categories());
    }

    #[test]
    fn test_corrupt_storage_falls_back_to_defaults() {
        let store = MemoryStore::new();
        store.set(QUICK_CATEGORIES_KEY, "[{\"name\":");

        let quick = QuickCategories::new(store);
        assert_eq!(quick.load(), default_quick_categories());
    }
}

use dioxus::prelude::*;

use crate::icons::{NavIcon, NavIconView};
use crate::theme::ThemeToggle;
use crate::{use_auth, LogoutButton};

/// One link in the sidebar. `key` is handed back through `on_navigate`.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

impl NavItem {
    pub const fn new(key: &'static str, label: &'static str, icon: NavIcon) -> Self {
        Self { key, label, icon }
    }
}

/// The app's main navigation, in display order.
pub const MAIN_NAV: &[NavItem] = &[
    NavItem::new("dashboard", "ダッシュボード", NavIcon::Dashboard),
    NavItem::new("transactions", "取引", NavIcon::Transactions),
    NavItem::new("budgets", "予算", NavIcon::Budgets),
    NavItem::new("recurring", "定期取引", NavIcon::Recurring),
    NavItem::new("assets", "資産", NavIcon::Assets),
    NavItem::new("analytics", "分析", NavIcon::Analytics),
    NavItem::new("reports", "レポート", NavIcon::Reports),
    NavItem::new("couple", "カップル", NavIcon::Couple),
    NavItem::new("account", "アカウント", NavIcon::Account),
];

pub const ADMIN_NAV: NavItem = NavItem::new("admin", "管理", NavIcon::Admin);

/// Items shown to the current user. The admin link is appended for admins.
pub fn nav_items(is_admin: bool) -> Vec<NavItem> {
    let mut items = MAIN_NAV.to_vec();
    if is_admin {
        items.push(ADMIN_NAV);
    }
    items
}

#[component]
pub fn Sidebar(
    active: String,
    on_navigate: EventHandler<&'static str>,
    on_logout: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let state = auth();
    let items = nav_items(state.is_admin());

    rsx! {
        nav {
            class: "sidebar",

            div {
                class: "sidebar-user",
                if let Some(user) = state.user.as_ref() {
                    if let Some(picture) = user.picture_url.as_ref() {
                        img {
                            class: "avatar",
                            src: "{picture}",
                            alt: "",
                        }
                    }
                    span {
                        class: "sidebar-user-name",
                        "{user.display_name()}"
                    }
                } else {
                    span {
                        class: "sidebar-user-name",
                        "Kakepple"
                    }
                }
            }

            div {
                class: "sidebar-links",
                for item in items {
                    button {
                        key: "{item.key}",
                        class: if active == item.key { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| on_navigate.call(item.key),
                        NavIconView { icon: item.icon }
                        span { "{item.label}" }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                ThemeToggle {}
                LogoutButton {
                    class: "sidebar-item",
                    on_logout: on_logout,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_link_only_for_admins() {
        let keys: Vec<&str> = nav_items(false).iter().map(|i| i.key).collect();
        assert!(!keys.contains(&"admin"));
        assert_eq!(keys.first(), Some(&"dashboard"));

        let keys: Vec<&str> = nav_items(true).iter().map(|i| i.key).collect();
        assert_eq!(keys.last(), Some(&"admin"));
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleHalfStroke, FaMoon, FaSun};
use dioxus_free_icons::Icon;
use store::{apply_theme, Theme};

use crate::client::{load_theme, save_theme};

/// The stored theme, applied once when the app mounts.
pub fn use_theme() -> Signal<Theme> {
    use_context_provider(|| {
        let theme = load_theme();
        apply_theme(theme);
        Signal::new(theme)
    })
}

fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "ライト",
        Theme::Dark => "ダーク",
        Theme::System => "システム",
    }
}

/// Cycles light, dark and system.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let current = theme();

    let onclick = move |_| {
        let next = theme().next();
        tracing::debug!("theme set to {}", next.as_str());
        save_theme(next);
        apply_theme(next);
        theme.set(next);
    };

    rsx! {
        button {
            class: "sidebar-item",
            title: "テーマ切替",
            onclick: onclick,
            match current {
                Theme::Light => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaSun } },
                Theme::Dark => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaMoon } },
                Theme::System => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaCircleHalfStroke } },
            }
            span { "{theme_label(current)}" }
        }
    }
}

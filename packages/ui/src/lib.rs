//! Shared Dioxus components and session context for the Kakepple client.

pub mod auth;
pub mod budget;
pub mod client;
pub mod components;
pub mod format;
pub mod icons;
mod sidebar;
mod theme;
pub mod toast;

pub use auth::{
    clear_location_fragment, load_session, location_fragment, reload_session, use_auth,
    AuthProvider, AuthState, LogoutButton, OAuthButton, SessionOutcome,
};
pub use budget::{BudgetLevel, MonthlyOutlook};
pub use client::{sleep_ms, use_client, Client};
pub use format::{format_signed_yen, format_yen};
pub use sidebar::{nav_items, NavItem, Sidebar, MAIN_NAV};
pub use theme::{use_theme, ThemeToggle};
pub use toast::{notify_error, notify_success, use_toasts, ToastLevel, ToastProvider};

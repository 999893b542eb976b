use dioxus::prelude::*;

use ui::components::{PageSkeleton, QuickEntryProvider, QuickInputFab};
use ui::{use_auth, use_theme, AuthProvider, Sidebar, ToastProvider};
use views::{
    Account, AdminCouples, AdminGuard, AdminHome, AdminTransactions, AdminUsers, Analytics,
    Assets, AuthCallback, Budgets, Couple, Dashboard, Landing, Login, NewTransaction, NotFound,
    PasswordReset, PasswordResetConfirm, Privacy, Recurring, Register, Reports, Transactions,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/register?:oauth_pending")]
    Register { oauth_pending: String },
    #[route("/auth/callback")]
    AuthCallback {},
    #[route("/password-reset")]
    PasswordReset {},
    #[route("/password-reset/confirm?:token")]
    PasswordResetConfirm { token: String },
    #[route("/privacy")]
    Privacy {},

    #[layout(AppShell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/transactions")]
        Transactions {},
        #[route("/transactions/new")]
        NewTransaction {},
        #[route("/budgets")]
        Budgets {},
        #[route("/recurring")]
        Recurring {},
        #[route("/assets")]
        Assets {},
        #[route("/analytics")]
        Analytics {},
        #[route("/reports")]
        Reports {},
        #[route("/couple")]
        Couple {},
        #[route("/account")]
        Account {},

        #[nest("/admin")]
        #[layout(AdminGuard)]
            #[route("/")]
            AdminHome {},
            #[route("/users")]
            AdminUsers {},
            #[route("/couples")]
            AdminCouples {},
            #[route("/transactions")]
            AdminTransactions {},
        #[end_layout]
        #[end_nest]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Sidebar key of the section this route belongs to.
    pub fn nav_key(&self) -> &'static str {
        match self {
            Route::Dashboard {} => "dashboard",
            Route::Transactions {} | Route::NewTransaction {} => "transactions",
            Route::Budgets {} => "budgets",
            Route::Recurring {} => "recurring",
            Route::Assets {} => "assets",
            Route::Analytics {} => "analytics",
            Route::Reports {} => "reports",
            Route::Couple {} => "couple",
            Route::Account {} => "account",
            Route::AdminHome {}
            | Route::AdminUsers {}
            | Route::AdminCouples {}
            | Route::AdminTransactions {} => "admin",
            _ => "",
        }
    }

    pub fn from_nav_key(key: &str) -> Option<Route> {
        let route = match key {
            "dashboard" => Route::Dashboard {},
            "transactions" => Route::Transactions {},
            "budgets" => Route::Budgets {},
            "recurring" => Route::Recurring {},
            "assets" => Route::Assets {},
            "analytics" => Route::Analytics {},
            "reports" => Route::Reports {},
            "couple" => Route::Couple {},
            "account" => Route::Account {},
            "admin" => Route::AdminHome {},
            _ => return None,
        };
        Some(route)
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_theme();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Kakepple" }

        ToastProvider {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Layout for signed-in pages. Anonymous visitors are sent to `/login`.
#[component]
fn AppShell() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    use_effect(move || {
        if auth().needs_login() {
            tracing::info!("no session, redirecting to login");
            nav.replace(Route::Login {});
        }
    });

    let state = auth();
    if state.loading {
        return rsx! {
            main { class: "page", PageSkeleton {} }
        };
    }
    if state.user.is_none() {
        return rsx! {};
    }

    rsx! {
        QuickEntryProvider {
            div {
                class: "app-shell",
                Sidebar {
                    active: route.nav_key().to_string(),
                    on_navigate: move |key: &'static str| {
                        if let Some(target) = Route::from_nav_key(key) {
                            nav.push(target);
                        }
                    },
                    on_logout: move |_| {
                        nav.replace(Route::Login {});
                    },
                }
                main {
                    class: "app-main",
                    Outlet::<Route> {}
                }
                QuickInputFab {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_keys_round_trip() {
        for item in ui::nav_items(true) {
            let route = Route::from_nav_key(item.key).unwrap();
            assert_eq!(route.nav_key(), item.key);
        }
        assert_eq!(Route::from_nav_key("settings"), None);
    }

    #[test]
    fn test_query_routes_parse() {
        let route: Route = "/password-reset/confirm?token=abc".parse().unwrap();
        assert_eq!(route, Route::PasswordResetConfirm { token: "abc".to_string() });
        let route: Route = "/admin/users".parse().unwrap();
        assert_eq!(route, Route::AdminUsers {});
        assert_eq!(route.nav_key(), "admin");
    }
}

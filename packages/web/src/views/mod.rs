use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

mod account;
pub use account::Account;

mod admin;
pub use admin::{AdminCouples, AdminGuard, AdminHome, AdminTransactions, AdminUsers};

mod analytics;
pub use analytics::Analytics;

mod assets;
pub use assets::Assets;

mod auth_callback;
pub use auth_callback::AuthCallback;

mod budgets;
pub use budgets::Budgets;

mod couple;
pub use couple::Couple;

mod dashboard;
pub use dashboard::Dashboard;

mod landing;
pub use landing::{Landing, NotFound, Privacy};

mod login;
pub use login::Login;

mod password_reset;
pub use password_reset::{PasswordReset, PasswordResetConfirm};

mod recurring;
pub use recurring::Recurring;

mod register;
pub use register::Register;

mod reports;
pub use reports::Reports;

mod transactions;
pub use transactions::{NewTransaction, Transactions};

/// Keeps a widget's data when the fetch worked; logs and drops it otherwise.
pub(crate) fn loaded<T>(what: &str, result: api::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("failed to load {}: {}", what, e);
            None
        }
    }
}

/// Sends signed-in visitors of the public auth pages to the dashboard.
pub(crate) fn use_redirect_if_signed_in() {
    let auth = use_auth();
    let nav = use_navigator();
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_some() {
            nav.replace(Route::Dashboard {});
        }
    });
}

//! One `impl ApiClient` block per backend router.

mod admin;
mod analytics;
mod assets;
mod auth;
mod budgets;
mod couples;
mod exports;
mod notifications;
mod recurring;
mod transactions;

pub use auth::OAuthProvider;
pub use couples::DEFAULT_INVITE_HOURS;
pub use exports::ExportQuery;

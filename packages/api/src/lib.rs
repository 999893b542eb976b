//! # Kakepple API client
//!
//! Typed access to the Kakepple backend over HTTP/JSON. The web app holds one
//! [`ApiClient`] in context and calls it from resources and event handlers.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient`: base URL, bearer auth, TTL caching of analytics GETs, CSV downloads |
//! | [`error`] | `ApiError` and mapping of FastAPI `detail` bodies |
//! | [`forms`] | Form drafts and their `validate()` checks |
//! | [`models`] | Wire models for every endpoint group, plus category constants |
//!
//! Endpoint groups (auth, couples, transactions, budgets, assets, recurring,
//! analytics, exports, notifications, admin) are inherent methods on
//! [`ApiClient`]. Mutations clear the response cache before returning.

pub mod client;
mod endpoints;
pub mod error;
pub mod forms;
pub mod models;

pub use client::{ApiClient, CsvFile};
pub use endpoints::{ExportQuery, OAuthProvider, DEFAULT_INVITE_HOURS};
pub use error::{ApiError, Result};
pub use models::*;

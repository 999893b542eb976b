//! # User and auth payloads
//!
//! ## [`User`]
//!
//! The account as returned by `GET /api/auth/me`. Ids and timestamps stay
//! strings so they cross into WASM without extra parsing:
//!
//! - `id`: UUID of the account.
//! - `email`, `name`, `picture_url`: profile fields from registration or OAuth.
//! - `is_admin`: gates the `/admin` pages.
//! - `email_verified`: set for Google sign-ins; absent on older responses.
//!
//! [`User::display_name`] returns the user's name or falls back to their
//! email address.
//!
//! ## Auth exchange
//!
//! [`LoginRequest`] / [`RegisterRequest`] go out; [`AuthResponse`] comes back
//! with the token pair the client stores. [`OAuthPendingInfo`] pre-fills the
//! register form when an OAuth sign-in has no account yet.

use serde::{Deserialize, Serialize};
use store::TokenPair;

/// Authenticated user as seen by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub picture_url: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }

    /// Single character for avatar placeholders.
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_pending_id: Option<String>,
}

/// Subset of the user embedded in login/register responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub picture_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: String,
    pub user: Option<AuthUser>,
}

impl AuthResponse {
    pub fn token_pair(&self) -> TokenPair {
        TokenPair {
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OAuthPendingInfo {
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture_url: Option<String>,
    pub provider: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub(crate) struct PasswordResetRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PasswordResetConfirm {
    pub token: String,
    pub new_password: String,
}

/// `{"message": "..."}` acknowledgement bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_me_response() {
        let json = r#"{
            "email": "hanako@example.com",
            "name": null,
            "picture_url": null,
            "id": "0b6c6f5e-1c1e-4c55-9a86-7d3f5b7c2a10",
            "is_admin": true,
            "created_at": "2026-01-09T19:00:00",
            "updated_at": "2026-01-09T19:00:00"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_admin);
        assert!(!user.email_verified);
        assert_eq!(user.display_name(), "hanako@example.com");
        assert_eq!(user.initial(), "H");
    }

    #[test]
    fn test_display_name_prefers_name() {
        let user = User {
            id: "1".to_string(),
            email: "taro@example.com".to_string(),
            name: Some("太郎".to_string()),
            picture_url: None,
            is_admin: false,
            email_verified: false,
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert_eq!(user.display_name(), "太郎");
        assert_eq!(user.initial(), "太");
    }

    #[test]
    fn test_auth_response_token_pair() {
        let json = r#"{
            "access_token": "a",
            "refresh_token": "r",
            "token_type": "bearer",
            "user": {"id": "1", "email": "x@example.com", "name": "X", "picture_url": null}
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token_pair().access_token, "a");
        assert_eq!(resp.user.unwrap().name.as_deref(), Some("X"));
    }

    #[test]
    fn test_register_request_omits_missing_pending_id() {
        let req = RegisterRequest {
            email: "a@b.c".to_string(),
            password: "password".to_string(),
            name: "A".to_string(),
            oauth_pending_id: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("oauth_pending_id").is_none());
    }
}

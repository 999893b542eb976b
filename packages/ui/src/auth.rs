//! Session context and hooks for the UI.

use api::{ApiClient, ApiError, Couple, OAuthProvider, User};
use dioxus::prelude::*;
use store::KeyValueStore;

use crate::client::{make_client, use_client, Client};

/// Who is signed in, and with whom they share a ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub couple: Option<Couple>,
    pub loading: bool,
    /// The stored token was rejected on the last check.
    pub expired: bool,
    /// Last failure that was not an auth rejection (network, 5xx).
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            couple: None,
            loading: true,
            expired: false,
            error: None,
        }
    }
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self {
            loading: false,
            ..Self::default()
        }
    }

    /// The shell should send the visitor to `/login`.
    pub fn needs_login(&self) -> bool {
        !self.loading && self.user.is_none()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    pub fn partner(&self) -> Option<&User> {
        let me = self.user_id()?;
        self.couple.as_ref().map(|c| c.partner_of(me))
    }
}

/// Result of checking the stored session against `GET /auth/me`.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Authenticated { user: User, couple: Option<Couple> },
    /// A token was stored but the server rejected it.
    Expired,
    /// No token is stored.
    Anonymous,
    /// The check itself failed.
    Unavailable(String),
}

/// Classifies the two session fetches. A failed couple fetch only drops
/// the couple.
pub fn session_outcome(
    had_token: bool,
    user: api::Result<User>,
    couple: api::Result<Option<Couple>>,
) -> SessionOutcome {
    match user {
        Ok(user) => {
            let couple = couple.unwrap_or_else(|e| {
                tracing::warn!("couple fetch failed: {}", e);
                None
            });
            SessionOutcome::Authenticated { user, couple }
        }
        Err(ApiError::Unauthorized) if had_token => SessionOutcome::Expired,
        Err(ApiError::Unauthorized) => SessionOutcome::Anonymous,
        Err(e) => SessionOutcome::Unavailable(e.user_message()),
    }
}

impl From<SessionOutcome> for AuthState {
    fn from(outcome: SessionOutcome) -> Self {
        match outcome {
            SessionOutcome::Authenticated { user, couple } => AuthState {
                user: Some(user),
                couple,
                loading: false,
                expired: false,
                error: None,
            },
            SessionOutcome::Expired => AuthState {
                expired: true,
                ..AuthState::anonymous()
            },
            SessionOutcome::Anonymous => AuthState::anonymous(),
            SessionOutcome::Unavailable(message) => AuthState {
                error: Some(message),
                ..AuthState::anonymous()
            },
        }
    }
}

/// Fetches the user and couple together. Clears rejected tokens.
///
/// Without a stored token nothing is requested, so an anonymous check
/// started before an OAuth callback stores its tokens cannot overwrite
/// the callback's authenticated result.
pub async fn load_session<S: KeyValueStore + Clone>(client: &ApiClient<S>) -> SessionOutcome {
    let had_token = client.tokens().is_authenticated();
    if !had_token {
        tracing::debug!("no stored token, skipping session check");
        return SessionOutcome::Anonymous;
    }
    let (user, couple) = futures::join!(client.me(), client.my_couple());
    let outcome = session_outcome(had_token, user, couple);
    match &outcome {
        SessionOutcome::Expired => {
            tracing::info!("session expired");
            client.tokens().clear();
        }
        SessionOutcome::Unavailable(message) => tracing::warn!("session check failed: {}", message),
        _ => {}
    }
    outcome
}

/// Re-reads the session after login, profile edits and couple changes.
pub async fn reload_session(mut auth: Signal<AuthState>, client: Client) {
    let outcome = load_session(&client).await;
    auth.set(outcome.into());
}

/// Get the current authentication state.
/// Returns a signal that updates on login, logout and couple changes.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provides the API client and the session signal to the app.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context_provider(make_client);
    let auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            reload_session(auth_state, client).await;
        }
    });

    rsx! {
        {children}
    }
}

/// Button that starts a provider's OAuth redirect.
#[component]
pub fn OAuthButton(
    provider: OAuthProvider,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_client();
    let url = client.oauth_login_url(provider);

    let onclick = move |_| {
        tracing::info!("starting {} sign-in", provider.label());
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("open {} in a browser to continue", url);
        }
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: onclick,
            "{provider.label()}"
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "ログアウト".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut auth_state = use_auth();
    let client = use_client();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            // Tokens are cleared even when the server call fails.
            let _ = client.logout().await;
            auth_state.set(AuthState::anonymous());
            on_logout.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Current URL fragment without the leading `#`, if any.
pub fn location_fragment() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let hash = web_sys::window()?.location().hash().ok()?;
        let hash = hash.trim_start_matches('#');
        (!hash.is_empty()).then(|| hash.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Removes the fragment from the address bar without reloading.
pub fn clear_location_fragment() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(path) = window.location().pathname() else {
            return;
        };
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, admin: bool) -> User {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "email": format!("{id}@example.com"),
            "name": null,
            "picture_url": null,
            "is_admin": admin,
        }))
        .unwrap()
    }

    fn couple() -> Couple {
        Couple {
            id: "c1".to_string(),
            user1: user("u1", false),
            user2: user("u2", false),
            created_at: String::new(),
        }
    }

    #[test]
    fn test_unauthorized_with_token_is_expired() {
        let outcome = session_outcome(true, Err(ApiError::Unauthorized), Err(ApiError::Unauthorized));
        assert_eq!(outcome, SessionOutcome::Expired);
        let state = AuthState::from(outcome);
        assert!(state.expired);
        assert!(state.needs_login());
    }

    #[test]
    fn test_unauthorized_without_token_is_anonymous() {
        let outcome = session_outcome(false, Err(ApiError::Unauthorized), Ok(None));
        assert_eq!(outcome, SessionOutcome::Anonymous);
        assert!(!AuthState::from(outcome).expired);
    }

    #[test]
    fn test_network_failure_is_unavailable() {
        let outcome = session_outcome(
            true,
            Err(ApiError::Network("offline".to_string())),
            Ok(None),
        );
        assert!(matches!(outcome, SessionOutcome::Unavailable(_)));
        let state = AuthState::from(outcome);
        assert!(state.error.is_some());
        assert!(!state.expired);
    }

    #[test]
    fn test_couple_failure_keeps_user() {
        let outcome = session_outcome(
            true,
            Ok(user("u1", false)),
            Err(ApiError::Server {
                status: 500,
                message: "boom".to_string(),
            }),
        );
        let state = AuthState::from(outcome);
        assert_eq!(state.user_id(), Some("u1"));
        assert_eq!(state.couple, None);
        assert!(!state.needs_login());
    }

    #[test]
    fn test_partner_and_admin() {
        let state = AuthState::from(SessionOutcome::Authenticated {
            user: user("u2", true),
            couple: Some(couple()),
        });
        assert!(state.is_admin());
        assert_eq!(state.partner().map(|u| u.id.as_str()), Some("u1"));
    }

    #[test]
    fn test_no_token_is_anonymous_without_request() {
        let config = store::ClientConfig::default().with_base_url("http://127.0.0.1:9");
        let client = ApiClient::new(&config, store::TokenStore::new(store::MemoryStore::new()));
        let outcome = futures::executor::block_on(load_session(&client));
        assert_eq!(outcome, SessionOutcome::Anonymous);
        assert!(!AuthState::from(outcome).expired);
    }

    #[test]
    fn test_loading_state_does_not_redirect() {
        assert!(!AuthState::default().needs_login());
        assert!(AuthState::anonymous().needs_login());
    }
}

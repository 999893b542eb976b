//! Bearer token persistence and OAuth fragment parsing.

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

pub const ACCESS_TOKEN_KEY: &str = "kakepple_access_token";
pub const REFRESH_TOKEN_KEY: &str = "kakepple_refresh_token";

/// Access + refresh token pair issued by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Reads and writes the session's token pair.
#[derive(Clone, Debug)]
pub struct TokenStore<S> {
    store: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_tokens(&self, tokens: &TokenPair) {
        self.store.set(ACCESS_TOKEN_KEY, &tokens.access_token);
        self.store.set(REFRESH_TOKEN_KEY, &tokens.refresh_token);
    }

    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
    }

    /// Whether an access token is present. Says nothing about its validity.
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Store the pair carried by an OAuth callback fragment.
    ///
    /// Returns `false` when the fragment does not carry both tokens, in
    /// which case nothing is written.
    pub fn accept_callback_fragment(&self, fragment: &str) -> bool {
        match parse_fragment(fragment) {
            Some(tokens) => {
                self.set_tokens(&tokens);
                true
            }
            None => false,
        }
    }
}

/// Parse `#access_token=…&refresh_token=…` (leading `#` optional).
pub fn parse_fragment(fragment: &str) -> Option<TokenPair> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut access_token = None;
    let mut refresh_token = None;

    for pair in fragment.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        match key {
            "access_token" => access_token = Some(value.to_string()),
            "refresh_token" => refresh_token = Some(value.to_string()),
            _ => {}
        }
    }

    Some(TokenPair {
        access_token: access_token?,
        refresh_token: refresh_token?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn pair() -> TokenPair {
        TokenPair {
            access_token: "acc.jwt.sig".to_string(),
            refresh_token: "ref.jwt.sig".to_string(),
        }
    }

    #[test]
    fn test_set_and_clear_tokens() {
        let tokens = TokenStore::new(MemoryStore::new());
        assert!(!tokens.is_authenticated());

        tokens.set_tokens(&pair());
        assert!(tokens.is_authenticated());
        assert_eq!(tokens.access_token().as_deref(), Some("acc.jwt.sig"));
        assert_eq!(tokens.refresh_token().as_deref(), Some("ref.jwt.sig"));

        tokens.clear();
        assert!(!tokens.is_authenticated());
        assert!(tokens.refresh_token().is_none());
    }

    #[test]
    fn test_parse_fragment() {
        assert_eq!(
            parse_fragment("#access_token=acc.jwt.sig&refresh_token=ref.jwt.sig"),
            Some(pair())
        );
        // Order and extra keys do not matter
        assert_eq!(
            parse_fragment("refresh_token=ref.jwt.sig&state=x&access_token=acc.jwt.sig"),
            Some(pair())
        );
    }

    #[test]
    fn test_parse_fragment_requires_both_tokens() {
        assert!(parse_fragment("").is_none());
        assert!(parse_fragment("#access_token=only").is_none());
        assert!(parse_fragment("#access_token=&refresh_token=r").is_none());
    }

    #[test]
    fn test_accept_callback_fragment() {
        let store = MemoryStore::new();
        let tokens = TokenStore::new(store.clone());

        assert!(!tokens.accept_callback_fragment("#error=denied"));
        assert!(store.keys().is_empty());

        assert!(tokens.accept_callback_fragment("#access_token=a&refresh_token=r"));
        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("a"));
    }
}

use reqwest::multipart::{Form, Part};
use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{
    AuthResponse, LoginRequest, MessageResponse, OAuthPendingInfo, PasswordResetConfirm,
    PasswordResetRequest, ProfileUpdate, RefreshRequest, RegisterRequest, User,
};
use crate::ApiError;

/// Sign-in providers that start with a browser redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Line,
}

impl OAuthProvider {
    pub fn path(self) -> &'static str {
        match self {
            OAuthProvider::Google => "/auth/google",
            OAuthProvider::Line => "/auth/line",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OAuthProvider::Google => "Googleでログイン",
            OAuthProvider::Line => "LINEでログイン",
        }
    }
}

impl<S: KeyValueStore + Clone> ApiClient<S> {
    /// Registers and stores the issued token pair.
    pub async fn register(&self, body: &RegisterRequest) -> Result<AuthResponse> {
        let resp: AuthResponse = self.post("/auth/register", body).await?;
        self.tokens().set_tokens(&resp.token_pair());
        tracing::info!("registered {}", body.email);
        Ok(resp)
    }

    /// Logs in and stores the issued token pair.
    pub async fn login(&self, body: &LoginRequest) -> Result<AuthResponse> {
        let resp: AuthResponse = self.post("/auth/login", body).await?;
        self.tokens().set_tokens(&resp.token_pair());
        tracing::info!("logged in as {}", body.email);
        Ok(resp)
    }

    /// Tells the backend to end the session. Local tokens are cleared even
    /// when the call fails.
    pub async fn logout(&self) -> Result<()> {
        let result: Result<MessageResponse> = self.post_empty("/auth/logout").await;
        self.tokens().clear();
        self.invalidate_cache();
        if let Err(e) = &result {
            tracing::warn!("logout request failed: {}", e);
        }
        result.map(|_| ())
    }

    /// Trades the stored refresh token for a new pair.
    pub async fn refresh(&self) -> Result<AuthResponse> {
        let refresh_token = self.tokens().refresh_token().ok_or(ApiError::Unauthorized)?;
        let resp: AuthResponse = self
            .post(
                "/auth/refresh",
                &RefreshRequest {
                    refresh_token: &refresh_token,
                },
            )
            .await?;
        self.tokens().set_tokens(&resp.token_pair());
        Ok(resp)
    }

    pub async fn me(&self) -> Result<User> {
        self.get("/auth/me").await
    }

    pub async fn update_profile(&self, body: &ProfileUpdate) -> Result<User> {
        self.put("/auth/me", body).await
    }

    /// Uploads a new avatar as the multipart field `file`.
    pub async fn upload_avatar(&self, filename: &str, mime: &str, bytes: Vec<u8>) -> Result<User> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime)
            .map_err(ApiError::from)?;
        self.post_multipart("/auth/me/avatar", Form::new().part("file", part))
            .await
    }

    pub async fn delete_avatar(&self) -> Result<User> {
        self.delete_json("/auth/me/avatar").await
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<MessageResponse> {
        self.post("/auth/password/reset", &PasswordResetRequest { email })
            .await
    }

    pub async fn confirm_password_reset(&self, body: &PasswordResetConfirm) -> Result<MessageResponse> {
        self.post("/auth/password/confirm", body).await
    }

    pub async fn oauth_pending(&self, pending_id: &str) -> Result<OAuthPendingInfo> {
        self.get(&format!("/auth/oauth/pending/{pending_id}")).await
    }

    /// Browser URL that starts the provider's sign-in flow.
    pub fn oauth_login_url(&self, provider: OAuthProvider) -> String {
        self.url(provider.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{ClientConfig, MemoryStore, TokenStore};

    #[test]
    fn test_oauth_urls() {
        let config = ClientConfig::default().with_base_url("https://api.example.com");
        let client = ApiClient::new(&config, TokenStore::new(MemoryStore::new()));
        assert_eq!(
            client.oauth_login_url(OAuthProvider::Google),
            "https://api.example.com/api/auth/google"
        );
        assert_eq!(
            client.oauth_login_url(OAuthProvider::Line),
            "https://api.example.com/api/auth/line"
        );
    }
}

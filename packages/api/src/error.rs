use serde::Deserialize;
use thiserror::Error;

use crate::forms::ValidationError;

/// Every way a backend call can fail.
///
/// Cloneable so it can sit inside a Dioxus resource.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("認証が必要です")]
    Unauthorized,

    #[error("権限がありません")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    #[error("サーバーエラー ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("通信エラー: {0}")]
    Network(String),

    #[error("レスポンスを解析できません: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Text(String),
    Items(Vec<DetailItem>),
}

#[derive(Deserialize)]
struct DetailItem {
    msg: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Detail,
}

/// Extracts FastAPI's `detail` from an error body.
///
/// A string detail is returned as is; a list of validation items is joined
/// with `", "`. Returns `None` for anything else.
pub fn detail_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        Detail::Text(text) => Some(text),
        Detail::Items(items) if !items.is_empty() => Some(
            items
                .into_iter()
                .map(|i| i.msg)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Detail::Items(_) => None,
    }
}

impl ApiError {
    /// Maps a non-success status and its body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = detail_message(body);
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound(message.unwrap_or_else(|| "見つかりません".to_string())),
            _ => ApiError::Server {
                status,
                message: message.unwrap_or_else(|| format!("HTTP {status}")),
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Forbidden)
    }

    /// Text for toasts and inline alerts. Server messages are shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Network(_) => "サーバーに接続できませんでした".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        assert_eq!(
            detail_message(r#"{"detail": "Email already registered"}"#).as_deref(),
            Some("Email already registered")
        );
    }

    #[test]
    fn test_list_detail() {
        let body = r#"{"detail": [{"loc": ["body", "amount"], "msg": "Input should be greater than 0", "type": "greater_than"},
                                  {"loc": ["body", "date"], "msg": "Invalid date", "type": "date"}]}"#;
        assert_eq!(
            detail_message(body).as_deref(),
            Some("Input should be greater than 0, Invalid date")
        );
    }

    #[test]
    fn test_unparseable_detail() {
        assert_eq!(detail_message("<html>Bad Gateway</html>"), None);
        assert_eq!(detail_message(r#"{"detail": []}"#), None);
        assert_eq!(detail_message(r#"{"error": "x"}"#), None);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, r#"{"detail": "Admin only"}"#), ApiError::Forbidden);
        assert_eq!(
            ApiError::from_status(404, r#"{"detail": "Transaction not found"}"#),
            ApiError::NotFound("Transaction not found".to_string())
        );
        assert_eq!(
            ApiError::from_status(400, r#"{"detail": "Already in a couple"}"#),
            ApiError::Server {
                status: 400,
                message: "Already in a couple".to_string()
            }
        );
        assert_eq!(
            ApiError::from_status(502, "Bad Gateway"),
            ApiError::Server {
                status: 502,
                message: "HTTP 502".to_string()
            }
        );
    }

    #[test]
    fn test_user_message() {
        let err = ApiError::from_status(400, r#"{"detail": "Invalid invite code"}"#);
        assert_eq!(err.user_message(), "Invalid invite code");
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(ApiError::Forbidden.is_forbidden());
        assert_eq!(
            ApiError::Network("dns".to_string()).user_message(),
            "サーバーに接続できませんでした"
        );
    }
}

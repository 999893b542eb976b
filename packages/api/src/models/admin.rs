//! Administrative views. Every endpoint requires `is_admin`; the server
//! answers 403 otherwise.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TransactionType;

/// Default and maximum page size accepted by the admin list endpoints.
pub const ADMIN_PAGE_SIZE: u32 = 20;
pub const ADMIN_MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub picture_url: Option<String>,
    pub google_id: Option<String>,
    pub line_id: Option<String>,
    pub email_verified: bool,
    pub is_admin: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl AdminUser {
    /// Linked sign-in providers, for the user table.
    pub fn providers(&self) -> Vec<&'static str> {
        let mut providers = Vec::new();
        if self.google_id.is_some() {
            providers.push("Google");
        }
        if self.line_id.is_some() {
            providers.push("LINE");
        }
        if providers.is_empty() {
            providers.push("メール");
        }
        providers
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AdminUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserListResponse {
    pub users: Vec<AdminUser>,
    pub total: u32,
    pub limit: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminCouple {
    pub id: String,
    pub user1_email: String,
    pub user1_name: Option<String>,
    pub user2_email: String,
    pub user2_name: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoupleListResponse {
    pub couples: Vec<AdminCouple>,
    pub total: u32,
    pub limit: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminTransaction {
    pub id: String,
    pub user_email: String,
    pub user_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub date: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionListResponse {
    pub transactions: Vec<AdminTransaction>,
    pub total: u32,
    pub limit: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdminStats {
    pub total_users: u32,
    pub total_couples: u32,
    pub total_transactions: u32,
    pub users_this_month: u32,
    pub transactions_this_month: u32,
    pub total_income: Decimal,
    pub total_expense: Decimal,
}

/// `limit`/`offset` paging shared by the admin lists.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: ADMIN_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl Page {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: limit.clamp(1, ADMIN_MAX_PAGE_SIZE),
            offset,
        }
    }

    pub fn next(self) -> Self {
        Self {
            offset: self.offset + self.limit,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            offset: self.offset.saturating_sub(self.limit),
            ..self
        }
    }

    pub fn has_next(&self, total: u32) -> bool {
        self.offset + self.limit < total
    }

    pub fn has_prev(&self) -> bool {
        self.offset > 0
    }

    /// 1-based page number.
    pub fn number(&self) -> u32 {
        self.offset / self.limit.max(1) + 1
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct UserListQuery {
    #[serde(flatten)]
    pub page: Page,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AdminTransactionQuery {
    #[serde(flatten)]
    pub page: Page,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_navigation() {
        let page = Page::default();
        assert!(!page.has_prev());
        assert!(page.has_next(45));
        let page = page.next().next();
        assert_eq!(page.offset, 40);
        assert_eq!(page.number(), 3);
        assert!(!page.has_next(45));
        assert_eq!(page.prev().offset, 20);
        assert_eq!(Page::new(20, 5).prev().offset, 0);
    }

    #[test]
    fn test_page_size_is_clamped() {
        assert_eq!(Page::new(500, 0).limit, ADMIN_MAX_PAGE_SIZE);
        assert_eq!(Page::new(0, 0).limit, 1);
    }

    #[test]
    fn test_user_query_flattens_page() {
        let query = UserListQuery {
            page: Page::new(10, 30),
            search: Some("taro".to_string()),
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, serde_json::json!({"limit": 10, "offset": 30, "search": "taro"}));
    }

    #[test]
    fn test_admin_transaction_float_amount() {
        let tx: AdminTransaction = serde_json::from_str(
            r#"{"id": "t1", "user_email": "a@example.com", "user_name": null, "type": "income",
                "category": "本業", "amount": 250000.0, "description": null,
                "date": "2026-01-25T00:00:00", "created_at": "2026-01-25T09:00:00"}"#,
        )
        .unwrap();
        assert_eq!(tx.kind, TransactionType::Income);
        assert_eq!(tx.amount, Decimal::new(250000, 0));
    }

    #[test]
    fn test_providers() {
        let mut user: AdminUser = serde_json::from_str(
            r#"{"id": "u1", "email": "a@example.com", "name": null, "picture_url": null,
                "google_id": null, "line_id": null, "email_verified": true, "is_admin": false,
                "created_at": "", "updated_at": ""}"#,
        )
        .unwrap();
        assert_eq!(user.providers(), vec!["メール"]);
        user.google_id = Some("g".to_string());
        user.line_id = Some("l".to_string());
        assert_eq!(user.providers(), vec!["Google", "LINE"]);
    }
}

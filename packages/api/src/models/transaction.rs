//! # Transactions
//!
//! | Type | Direction | Endpoint |
//! |------|-----------|----------|
//! | [`Transaction`] | in | `GET /api/transactions`, `GET /api/transactions/{id}` |
//! | [`TransactionCreate`] | out | `POST /api/transactions` |
//! | [`TransactionUpdate`] | out | `PUT /api/transactions/{id}` |
//! | [`TransactionFilter`] | query | `GET /api/transactions` |
//! | [`SummaryQuery`] / [`TransactionSummary`] | query / in | `GET /api/transactions/summary` |
//!
//! Amounts are [`Decimal`]; the backend sends them as strings (`"1000.00"`).
//! For split expenses `amount` is the caller's half and `original_amount`
//! the full bill.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income or expense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "収入",
            TransactionType::Expense => "支出",
        }
    }
}

/// Personal ledger or the shared couple ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Personal,
    Couple,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Personal => "personal",
            Scope::Couple => "couple",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "personal" => Some(Scope::Personal),
            "couple" => Some(Scope::Couple),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scope::Personal => "個人",
            Scope::Couple => "カップル",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub couple_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_split: bool,
    pub original_amount: Option<Decimal>,
    pub paid_by_user_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Transaction {
    pub fn is_couple(&self) -> bool {
        self.couple_id.is_some()
    }

    /// Description, or an empty string.
    pub fn memo(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransactionCreate {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
    pub is_split: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_by_user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TransactionUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_split: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_by_user_id: Option<String>,
}

impl From<TransactionCreate> for TransactionUpdate {
    fn from(create: TransactionCreate) -> Self {
        Self {
            kind: Some(create.kind),
            category: Some(create.category),
            amount: Some(create.amount),
            description: Some(create.description),
            date: Some(create.date),
            is_split: Some(create.is_split),
            paid_by_user_id: create.paid_by_user_id,
        }
    }
}

/// Query parameters for listing transactions. `None` fields are omitted.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TransactionFilter {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl TransactionFilter {
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SummaryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
}

impl SummaryQuery {
    pub fn for_scope(scope: Scope) -> Self {
        Self {
            scope: Some(scope),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub transaction_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_from_json() {
        let json = r#"{
            "type": "expense",
            "category": "食費",
            "amount": "500.00",
            "description": null,
            "date": "2026-01-01",
            "is_split": true,
            "id": "t1",
            "user_id": "u1",
            "couple_id": "c1",
            "original_amount": "1000.00",
            "paid_by_user_id": "u2",
            "created_at": "2026-01-01T10:00:00",
            "updated_at": "2026-01-01T10:00:00"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionType::Expense);
        assert_eq!(tx.amount, Decimal::new(500, 0));
        assert_eq!(tx.original_amount, Some(Decimal::new(1000, 0)));
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert!(tx.is_couple());
        assert_eq!(tx.memo(), "");
    }

    #[test]
    fn test_numeric_amount_is_accepted() {
        let summary: TransactionSummary = serde_json::from_str(
            r#"{"total_income": 300000, "total_expense": "120000.50", "balance": 179999.5, "transaction_count": 12}"#,
        )
        .unwrap();
        assert_eq!(summary.total_income, Decimal::new(300000, 0));
        assert_eq!(summary.total_expense, Decimal::new(12000050, 2));
        assert_eq!(summary.transaction_count, 12);
    }

    #[test]
    fn test_create_body_shape() {
        let body = TransactionCreate {
            kind: TransactionType::Expense,
            category: "食費".to_string(),
            amount: Decimal::new(1000, 0),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            is_split: false,
            paid_by_user_id: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["category"], "食費");
        assert_eq!(value["amount"], "1000");
        assert_eq!(value["date"], "2026-01-01");
        assert_eq!(value["is_split"], false);
        assert!(value.get("paid_by_user_id").is_none());
    }

    #[test]
    fn test_filter_omits_unset_fields() {
        let filter = TransactionFilter::default().scope(Scope::Couple).limit(5);
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value, serde_json::json!({"scope": "couple", "limit": 5}));
    }

    #[test]
    fn test_update_from_create_keeps_every_field() {
        let create = TransactionCreate {
            kind: TransactionType::Income,
            category: "本業".to_string(),
            amount: Decimal::new(250000, 0),
            description: "給与".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 25).unwrap(),
            is_split: false,
            paid_by_user_id: None,
        };
        let update = TransactionUpdate::from(create);
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["type"], "income");
        assert_eq!(value["description"], "給与");
        assert!(value.get("paid_by_user_id").is_none());
    }
}

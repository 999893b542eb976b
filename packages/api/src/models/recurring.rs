//! Recurring transaction templates.
//!
//! The backend materializes these into transactions on schedule and owns
//! `next_due_date`. The client creates, edits, toggles and can force one
//! run with `execute`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TransactionType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Monthly,
    Weekly,
    Yearly,
}

impl Frequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Weekly => "weekly",
            Frequency::Yearly => "yearly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "monthly" => Some(Frequency::Monthly),
            "weekly" => Some(Frequency::Weekly),
            "yearly" => Some(Frequency::Yearly),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Monthly => "毎月",
            Frequency::Weekly => "毎週",
            Frequency::Yearly => "毎年",
        }
    }
}

/// Japanese weekday names, Monday first (backend `day_of_week` 0 = Monday).
pub const WEEKDAY_LABELS: [&str; 7] = ["月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日", "日曜日"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub day_of_month: Option<u32>,
    pub day_of_week: Option<u32>,
    #[serde(default)]
    pub is_split: bool,
    pub is_active: bool,
    pub last_created_at: Option<String>,
    pub next_due_date: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl RecurringTransaction {
    /// Human schedule such as `毎月 25日` or `毎週 金曜日`.
    pub fn schedule_label(&self) -> String {
        match self.frequency {
            Frequency::Monthly => match self.day_of_month {
                Some(day) => format!("{} {day}日", self.frequency.label()),
                None => self.frequency.label().to_string(),
            },
            Frequency::Weekly => match self.day_of_week.and_then(|d| WEEKDAY_LABELS.get(d as usize)) {
                Some(day) => format!("{} {day}", self.frequency.label()),
                None => self.frequency.label().to_string(),
            },
            Frequency::Yearly => self.frequency.label().to_string(),
        }
    }

    /// `YYYY-MM-DD` part of the next due timestamp.
    pub fn next_due_day(&self) -> Option<&str> {
        self.next_due_date.as_deref().map(|s| s.get(..10).unwrap_or(s))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecurringCreate {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub frequency: Frequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u32>,
    pub is_split: bool,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RecurringUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_split: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl RecurringUpdate {
    pub fn active(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Self::default()
        }
    }
}

impl From<RecurringCreate> for RecurringUpdate {
    fn from(create: RecurringCreate) -> Self {
        Self {
            category: Some(create.category),
            amount: Some(create.amount),
            description: create.description,
            frequency: Some(create.frequency),
            day_of_month: create.day_of_month,
            day_of_week: create.day_of_week,
            is_split: Some(create.is_split),
            is_active: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RecurringFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Result of `POST /api/recurring/{id}/execute`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecuteResult {
    pub message: String,
    pub transaction_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recurring(json: serde_json::Value) -> RecurringTransaction {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_monthly_schedule_label() {
        let r = recurring(serde_json::json!({
            "id": "r1",
            "type": "expense",
            "category": "家賃",
            "amount": "85000.00",
            "description": null,
            "frequency": "monthly",
            "day_of_month": 25,
            "day_of_week": null,
            "is_split": true,
            "is_active": true,
            "last_created_at": null,
            "next_due_date": "2026-01-25T00:00:00"
        }));
        assert_eq!(r.schedule_label(), "毎月 25日");
        assert_eq!(r.next_due_day(), Some("2026-01-25"));
    }

    #[test]
    fn test_weekly_schedule_label() {
        let r = recurring(serde_json::json!({
            "id": "r2",
            "type": "income",
            "category": "アルバイト",
            "amount": 12000,
            "description": "週払い",
            "frequency": "weekly",
            "day_of_month": null,
            "day_of_week": 4,
            "is_active": false,
            "last_created_at": null,
            "next_due_date": null
        }));
        assert_eq!(r.schedule_label(), "毎週 金曜日");
        assert_eq!(r.next_due_day(), None);
        assert!(!r.is_split);
    }

    #[test]
    fn test_toggle_body() {
        let value = serde_json::to_value(RecurringUpdate::active(false)).unwrap();
        assert_eq!(value, serde_json::json!({"is_active": false}));
    }
}

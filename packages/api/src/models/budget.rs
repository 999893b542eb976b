//! Budgets and their server-computed status fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Scope;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetType {
    #[default]
    Category,
    MonthlyTotal,
}

impl BudgetType {
    pub fn as_str(self) -> &'static str {
        match self {
            BudgetType::Category => "category",
            BudgetType::MonthlyTotal => "monthly_total",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "category" => Some(BudgetType::Category),
            "monthly_total" => Some(BudgetType::MonthlyTotal),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetType::Category => "カテゴリ別",
            BudgetType::MonthlyTotal => "月間合計",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: String,
    pub user_id: Option<String>,
    pub couple_id: Option<String>,
    pub scope: Scope,
    pub budget_type: BudgetType,
    pub category: Option<String>,
    pub amount: Decimal,
    pub year: i32,
    pub month: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub current_spent: Option<Decimal>,
    pub percentage: Option<f64>,
    pub is_exceeded: Option<bool>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn default_true() -> bool {
    true
}

impl Budget {
    /// Heading shown on budget cards.
    pub fn title(&self) -> String {
        match (self.budget_type, self.category.as_deref()) {
            (BudgetType::Category, Some(category)) => category.to_string(),
            _ => "月間合計".to_string(),
        }
    }

    pub fn spent(&self) -> Decimal {
        self.current_spent.unwrap_or_default()
    }

    /// `amount - spent`; negative once the budget is exceeded.
    pub fn remaining(&self) -> Decimal {
        self.amount - self.spent()
    }

    pub fn exceeded(&self) -> bool {
        self.is_exceeded.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetCreate {
    pub scope: Scope,
    pub budget_type: BudgetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub amount: Decimal,
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct BudgetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct BudgetFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub(crate) struct ScopeQuery {
    pub scope: Scope,
}

/// `GET /api/budgets/{id}` detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetSummary {
    pub budget: Budget,
    pub total_spent: Decimal,
    pub remaining: Decimal,
    pub percentage: f64,
    pub is_exceeded: bool,
    pub transaction_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_status_fields() {
        let json = r#"{
            "scope": "couple",
            "budget_type": "category",
            "category": "食費",
            "amount": "40000",
            "year": 2026,
            "month": 1,
            "id": "b1",
            "user_id": null,
            "couple_id": "c1",
            "is_active": true,
            "current_spent": "42000",
            "percentage": 105.0,
            "is_exceeded": true,
            "created_at": "2026-01-01T00:00:00",
            "updated_at": "2026-01-01T00:00:00"
        }"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.scope, Scope::Couple);
        assert_eq!(budget.title(), "食費");
        assert_eq!(budget.remaining(), Decimal::new(-2000, 0));
        assert!(budget.exceeded());
    }

    #[test]
    fn test_monthly_total_without_status() {
        let json = r#"{
            "scope": "personal",
            "budget_type": "monthly_total",
            "category": null,
            "amount": 150000,
            "year": 2026,
            "month": 2,
            "id": "b2",
            "user_id": "u1",
            "couple_id": null
        }"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.title(), "月間合計");
        assert!(budget.is_active);
        assert_eq!(budget.spent(), Decimal::ZERO);
        assert!(!budget.exceeded());
    }

    #[test]
    fn test_create_omits_category_for_monthly_total() {
        let body = BudgetCreate {
            scope: Scope::Personal,
            budget_type: BudgetType::MonthlyTotal,
            category: None,
            amount: Decimal::new(100000, 0),
            year: 2026,
            month: 3,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["budget_type"], "monthly_total");
        assert!(value.get("category").is_none());
    }
}

//! Aggregates computed by the backend. The client only renders them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Budget, Scope, TransactionSummary};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryBreakdown {
    pub category: String,
    pub total: Decimal,
    pub percentage: f64,
    pub transaction_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyTrend {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub transaction_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearlyTrend {
    pub year: i32,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub transaction_count: u32,
    #[serde(default)]
    pub monthly_data: Vec<MonthlyTrend>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryAnalysis {
    pub scope: Scope,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub income_breakdown: Vec<CategoryBreakdown>,
    pub expense_breakdown: Vec<CategoryBreakdown>,
    pub top_expense_categories: Vec<CategoryBreakdown>,
}

/// One point of a report chart. `date` is `YYYY-MM-DD` or `YYYY-MM`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSeriesData {
    pub date: String,
    pub label: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportData {
    pub period: ReportPeriod,
    pub scope: Scope,
    pub year: i32,
    pub month: Option<u32>,
    pub summary: TransactionSummary,
    pub category_analysis: CategoryAnalysis,
    pub time_series: Vec<TimeSeriesData>,
    pub budget_status: Option<Vec<Budget>>,
}

impl ReportData {
    /// `2026年1月` for monthly reports, `2026年` for yearly ones.
    pub fn title(&self) -> String {
        match (self.period, self.month) {
            (ReportPeriod::Monthly, Some(month)) => format!("{}年{}月", self.year, month),
            _ => format!("{}年", self.year),
        }
    }
}

/// Cumulative balances. Couple fields are present only when `has_couple`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsData {
    pub personal_total_income: Decimal,
    pub personal_total_expense: Decimal,
    pub personal_balance: Decimal,
    pub personal_transaction_count: u32,
    pub personal_assets_total: Decimal,
    pub personal_total_balance: Decimal,
    pub couple_total_income: Option<Decimal>,
    pub couple_total_expense: Option<Decimal>,
    pub couple_balance: Option<Decimal>,
    pub couple_transaction_count: Option<u32>,
    pub couple_assets_total: Option<Decimal>,
    pub couple_total_balance: Option<Decimal>,
    pub has_couple: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryAnalysisQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub scope: Scope,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyTrendsQuery {
    pub year: i32,
    pub scope: Scope,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearlyTrendsQuery {
    pub start_year: i32,
    pub end_year: i32,
    pub scope: Scope,
}

/// Shared by the monthly/yearly report and CSV export endpoints.
/// `month` is omitted for yearly requests.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportQuery {
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    pub scope: Scope,
}

impl ReportQuery {
    pub fn monthly(year: i32, month: u32, scope: Scope) -> Self {
        Self {
            year,
            month: Some(month),
            scope,
        }
    }

    pub fn yearly(year: i32, scope: Scope) -> Self {
        Self {
            year,
            month: None,
            scope,
        }
    }
}

/// Keeps the trends up to `(year, month)` and returns the last `count` of them.
pub fn recent_trends(trends: &[MonthlyTrend], year: i32, month: u32, count: usize) -> Vec<MonthlyTrend> {
    let upto: Vec<&MonthlyTrend> = trends
        .iter()
        .filter(|t| (t.year, t.month) <= (year, month))
        .collect();
    let skip = upto.len().saturating_sub(count);
    upto.into_iter().skip(skip).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(month: u32) -> MonthlyTrend {
        MonthlyTrend {
            year: 2026,
            month,
            month_name: format!("{month}月"),
            total_income: Decimal::new(300000, 0),
            total_expense: Decimal::new(200000, 0),
            balance: Decimal::new(100000, 0),
            transaction_count: 10,
        }
    }

    #[test]
    fn test_recent_trends_stops_at_current_month() {
        let trends: Vec<MonthlyTrend> = (1..=12).map(trend).collect();
        let recent = recent_trends(&trends, 2026, 8, 6);
        let months: Vec<u32> = recent.iter().map(|t| t.month).collect();
        assert_eq!(months, vec![3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_recent_trends_early_in_year() {
        let trends: Vec<MonthlyTrend> = (1..=12).map(trend).collect();
        let recent = recent_trends(&trends, 2026, 2, 6);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].month, 1);
    }

    #[test]
    fn test_savings_without_couple() {
        let savings: SavingsData = serde_json::from_str(
            r#"{
                "personal_total_income": "500000",
                "personal_total_expense": "320000",
                "personal_balance": "180000",
                "personal_transaction_count": 40,
                "personal_assets_total": "1000000",
                "personal_total_balance": "1180000",
                "has_couple": false
            }"#,
        )
        .unwrap();
        assert!(!savings.has_couple);
        assert_eq!(savings.couple_balance, None);
        assert_eq!(savings.personal_total_balance, Decimal::new(1_180_000, 0));
    }

    #[test]
    fn test_report_title_and_query() {
        let report: ReportData = serde_json::from_value(serde_json::json!({
            "period": "monthly",
            "scope": "personal",
            "year": 2026,
            "month": 1,
            "summary": {"total_income": "0", "total_expense": "0", "balance": "0", "transaction_count": 0},
            "category_analysis": {
                "scope": "personal",
                "start_date": "2026-01-01",
                "end_date": "2026-01-31",
                "income_breakdown": [],
                "expense_breakdown": [{"category": "食費", "total": "1000", "percentage": 100.0, "transaction_count": 1}],
                "top_expense_categories": []
            },
            "time_series": [{"date": "2026-01-01", "label": "1日", "income": 0, "expense": 1000, "balance": -1000}],
            "budget_status": null
        }))
        .unwrap();
        assert_eq!(report.title(), "2026年1月");
        assert_eq!(report.category_analysis.expense_breakdown[0].category, "食費");

        let yearly = serde_json::to_value(ReportQuery::yearly(2026, Scope::Couple)).unwrap();
        assert_eq!(yearly, serde_json::json!({"year": 2026, "scope": "couple"}));
    }
}

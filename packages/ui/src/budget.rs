//! Budget presentation: progress levels and the month-end outlook.

use api::{Budget, BudgetType};
use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Progress bar level, by percentage used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetLevel {
    /// Under 50%.
    Good,
    /// 50% to under 80%.
    Caution,
    /// 80% to under 100%.
    Warning,
    Exceeded,
}

impl BudgetLevel {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 50.0 {
            BudgetLevel::Good
        } else if percentage < 80.0 {
            BudgetLevel::Caution
        } else if percentage < 100.0 {
            BudgetLevel::Warning
        } else {
            BudgetLevel::Exceeded
        }
    }

    pub fn for_budget(budget: &Budget) -> Self {
        if budget.exceeded() {
            return BudgetLevel::Exceeded;
        }
        Self::from_percentage(budget.percentage.unwrap_or(0.0))
    }

    pub fn class(self) -> &'static str {
        match self {
            BudgetLevel::Good => "level-good",
            BudgetLevel::Caution => "level-caution",
            BudgetLevel::Warning => "level-warning",
            BudgetLevel::Exceeded => "level-exceeded",
        }
    }
}

/// Bar width in percent, capped at 100.
pub fn bar_width(percentage: Option<f64>) -> f64 {
    percentage.unwrap_or(0.0).clamp(0.0, 100.0)
}

/// What is left of a monthly-total budget as of `today`.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyOutlook {
    pub total: Decimal,
    pub used: Decimal,
    pub remaining: Decimal,
    /// `remaining / remaining_days`, floored to whole yen; zero once overspent.
    pub daily_budget: Decimal,
    /// Days left including today.
    pub remaining_days: u32,
    pub percent_used: f64,
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    crate::format::month_bounds(year, month).1.day()
}

impl MonthlyOutlook {
    /// Uses the first active `monthly_total` budget, if any.
    pub fn from_budgets(budgets: &[Budget], today: NaiveDate) -> Option<Self> {
        let budget = budgets
            .iter()
            .find(|b| b.budget_type == BudgetType::MonthlyTotal && b.is_active)?;
        Some(Self::new(budget.amount, budget.spent(), today))
    }

    pub fn new(total: Decimal, used: Decimal, today: NaiveDate) -> Self {
        let remaining = total - used;
        let remaining_days = days_in_month(today.year(), today.month()) - today.day() + 1;
        let daily_budget = if remaining > Decimal::ZERO {
            (remaining / Decimal::from(remaining_days)).floor()
        } else {
            Decimal::ZERO
        };
        let percent_used = if total > Decimal::ZERO {
            (used / total * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
        } else {
            0.0
        };
        Self {
            total,
            used,
            remaining,
            daily_budget,
            remaining_days,
            percent_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_levels() {
        assert_eq!(BudgetLevel::from_percentage(0.0), BudgetLevel::Good);
        assert_eq!(BudgetLevel::from_percentage(49.9), BudgetLevel::Good);
        assert_eq!(BudgetLevel::from_percentage(50.0), BudgetLevel::Caution);
        assert_eq!(BudgetLevel::from_percentage(80.0), BudgetLevel::Warning);
        assert_eq!(BudgetLevel::from_percentage(100.0), BudgetLevel::Exceeded);
    }

    #[test]
    fn test_bar_width_caps() {
        assert_eq!(bar_width(Some(130.0)), 100.0);
        assert_eq!(bar_width(None), 0.0);
        assert_eq!(bar_width(Some(42.5)), 42.5);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2028, 2), 29);
        assert_eq!(days_in_month(2026, 12), 31);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 13), 31);
    }

    #[test]
    fn test_outlook_mid_month() {
        let outlook = MonthlyOutlook::new(
            Decimal::new(100000, 0),
            Decimal::new(40000, 0),
            day(2026, 1, 12),
        );
        assert_eq!(outlook.remaining, Decimal::new(60000, 0));
        assert_eq!(outlook.remaining_days, 20);
        assert_eq!(outlook.daily_budget, Decimal::new(3000, 0));
        assert_eq!(outlook.percent_used, 40.0);
    }

    #[test]
    fn test_outlook_last_day_and_overspent() {
        let outlook = MonthlyOutlook::new(
            Decimal::new(100000, 0),
            Decimal::new(120000, 0),
            day(2026, 1, 31),
        );
        assert_eq!(outlook.remaining_days, 1);
        assert_eq!(outlook.remaining, Decimal::new(-20000, 0));
        assert_eq!(outlook.daily_budget, Decimal::ZERO);
        assert_eq!(outlook.percent_used, 120.0);
    }

    #[test]
    fn test_outlook_floors_daily_budget() {
        let outlook = MonthlyOutlook::new(Decimal::new(10000, 0), Decimal::ZERO, day(2026, 1, 29));
        assert_eq!(outlook.remaining_days, 3);
        assert_eq!(outlook.daily_budget, Decimal::new(3333, 0));
    }
}

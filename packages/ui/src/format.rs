//! Display helpers. Values come from the server already computed; these
//! only turn them into text.

use api::TransactionType;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `¥1,234`, rounded to whole yen. Negative amounts render as `-¥1,234`.
pub fn format_yen(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let digits = rounded.abs().trunc().normalize().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}¥{}", group_thousands(&digits))
}

/// `+¥1,000` for income, `-¥1,000` for expenses.
pub fn format_signed_yen(kind: TransactionType, amount: Decimal) -> String {
    let sign = match kind {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };
    format!("{sign}{}", format_yen(amount.abs()))
}

/// Whole-number percentage such as `85%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value)
}

/// `1月5日`
pub fn format_month_day(date: NaiveDate) -> String {
    format!("{}月{}日", date.month(), date.day())
}

/// `2026年1月`
pub fn format_year_month(year: i32, month: u32) -> String {
    format!("{year}年{month}月")
}

/// The `YYYY-MM-DD` part of a server timestamp.
pub fn date_part(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

/// Today in the browser's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// First and last day of a month. Invalid months fall back to January.
pub fn month_bounds(year: i32, month: u32) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .or_else(|| NaiveDate::from_ymd_opt(year, 1, 1))
        .unwrap_or_default();
    let last = first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(first);
    (first, last)
}

/// Moves `(year, month)` by `delta` months.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_bounds() {
        let (first, last) = month_bounds(2024, 2);
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        let (_, last) = month_bounds(2026, 12);
        assert_eq!(last, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
    }

    #[test]
    fn test_shift_month_wraps_years() {
        assert_eq!(shift_month(2026, 1, -1), (2025, 12));
        assert_eq!(shift_month(2026, 12, 1), (2027, 1));
        assert_eq!(shift_month(2026, 5, -17), (2024, 12));
        assert_eq!(shift_month(2026, 5, 0), (2026, 5));
    }

    #[test]
    fn test_format_yen_grouping() {
        assert_eq!(format_yen(Decimal::new(0, 0)), "¥0");
        assert_eq!(format_yen(Decimal::new(999, 0)), "¥999");
        assert_eq!(format_yen(Decimal::new(1000, 0)), "¥1,000");
        assert_eq!(format_yen(Decimal::new(1234567, 0)), "¥1,234,567");
        assert_eq!(format_yen(Decimal::new(100000000, 2)), "¥1,000,000");
    }

    #[test]
    fn test_format_yen_rounds_and_signs() {
        assert_eq!(format_yen(Decimal::new(12345, 1)), "¥1,234");
        assert_eq!(format_yen(Decimal::new(-2000, 0)), "-¥2,000");
        assert_eq!(format_yen(Decimal::new(-4, 1)), "¥0");
    }

    #[test]
    fn test_signed_yen() {
        assert_eq!(
            format_signed_yen(TransactionType::Expense, Decimal::new(1000, 0)),
            "-¥1,000"
        );
        assert_eq!(
            format_signed_yen(TransactionType::Income, Decimal::new(25000000, 2)),
            "+¥250,000"
        );
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(format_month_day(date), "1月5日");
        assert_eq!(format_year_month(2026, 12), "2026年12月");
        assert_eq!(date_part("2026-01-05T10:00:00"), "2026-01-05");
        assert_eq!(date_part("short"), "short");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(84.6), "85%");
        assert_eq!(format_percent(0.0), "0%");
    }
}

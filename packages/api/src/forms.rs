//! Raw form state and its checks.
//!
//! Each draft mirrors the inputs of one form as strings. `validate()` turns
//! it into the request body the client sends, or explains what is missing.
//! Nothing here touches the network.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{
    Asset, AssetCreate, Budget, BudgetCreate, BudgetType, Frequency, LoginRequest,
    PasswordResetConfirm, RecurringCreate, RecurringTransaction, RegisterRequest, Scope,
    Transaction, TransactionCreate, TransactionType,
};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Largest avatar the server accepts.
pub const AVATAR_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Image types accepted for avatars, with their file extensions.
pub const AVATAR_TYPES: &[(&str, &[&str])] = &[
    ("image/jpeg", &["jpg", "jpeg"]),
    ("image/png", &["png"]),
    ("image/gif", &["gif"]),
    ("image/webp", &["webp"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}を入力してください")]
    Required(&'static str),

    #[error("{0}は0より大きい値を入力してください")]
    NotPositive(&'static str),

    #[error("{0}は0以上の値を入力してください")]
    Negative(&'static str),

    #[error("{0}は数値で入力してください")]
    NotANumber(&'static str),

    #[error("{0}の形式が正しくありません")]
    InvalidFormat(&'static str),

    #[error("{field}は{min}から{max}の範囲で入力してください")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("パスワードは{0}文字以上で入力してください")]
    PasswordTooShort(usize),

    #[error("パスワードが一致しません")]
    PasswordMismatch,

    #[error("JPEG、PNG、GIF、WebP形式の画像を選択してください")]
    UnsupportedImage,

    #[error("画像サイズは5MB以下にしてください")]
    ImageTooLarge,
}

type Result<T> = std::result::Result<T, ValidationError>;

fn required(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed.to_string())
}

/// Parses an amount typed by a person: surrounding spaces, `¥` and
/// thousands separators are tolerated.
pub fn parse_amount(value: &str, field: &'static str) -> Result<Decimal> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '¥' | '￥'))
        .collect();
    if cleaned.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Decimal::from_str(&cleaned).map_err(|_| ValidationError::NotANumber(field))
}

fn positive_amount(value: &str, field: &'static str) -> Result<Decimal> {
    let amount = parse_amount(value, field)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(amount)
}

fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidFormat(field))
}

fn in_range(value: i64, field: &'static str, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(())
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn check_password(password: &str, confirm: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

fn check_email(email: &str) -> Result<String> {
    let email = required(email, "メールアドレス")?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(ValidationError::InvalidFormat("メールアドレス")),
    }
}

/// Checks a picked avatar file and returns the MIME type to upload it with.
/// The browser's type wins; the extension is used when it reports none.
pub fn avatar_mime(filename: &str, content_type: Option<&str>, size: u64) -> Result<&'static str> {
    let mime = match content_type.filter(|t| !t.is_empty()) {
        Some(given) => AVATAR_TYPES.iter().find(|(mime, _)| *mime == given),
        None => {
            let ext = filename.rsplit_once('.').map(|(_, e)| e.to_ascii_lowercase());
            AVATAR_TYPES
                .iter()
                .find(|(_, exts)| ext.as_deref().is_some_and(|e| exts.contains(&e)))
        }
    };
    let &(mime, _) = mime.ok_or(ValidationError::UnsupportedImage)?;
    if size > AVATAR_MAX_BYTES {
        return Err(ValidationError::ImageTooLarge);
    }
    Ok(mime)
}

/// Transaction create/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionType,
    pub category: String,
    pub amount: String,
    pub description: String,
    pub date: String,
    pub is_split: bool,
    pub paid_by: Option<String>,
}

impl TransactionDraft {
    /// Empty expense form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            kind: TransactionType::Expense,
            category: String::new(),
            amount: String::new(),
            description: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            is_split: false,
            paid_by: None,
        }
    }

    /// Prefills the form from an existing row. Split rows show the full bill.
    pub fn from_transaction(tx: &Transaction) -> Self {
        let amount = match (tx.is_split, tx.original_amount) {
            (true, Some(original)) => original,
            _ => tx.amount,
        };
        Self {
            kind: tx.kind,
            category: tx.category.clone(),
            amount: amount.normalize().to_string(),
            description: tx.description.clone().unwrap_or_default(),
            date: tx.date.format("%Y-%m-%d").to_string(),
            is_split: tx.is_split,
            paid_by: tx.paid_by_user_id.clone(),
        }
    }

    /// Switching to income clears the split settings and the category.
    pub fn set_kind(&mut self, kind: TransactionType) {
        if self.kind != kind {
            self.category.clear();
        }
        self.kind = kind;
        if kind == TransactionType::Income {
            self.is_split = false;
            self.paid_by = None;
        }
    }

    pub fn validate(&self) -> Result<TransactionCreate> {
        let category = required(&self.category, "カテゴリ")?;
        let amount = positive_amount(&self.amount, "金額")?;
        let date = parse_date(&self.date, "日付")?;
        let is_split = self.is_split && self.kind == TransactionType::Expense;
        let paid_by_user_id = if is_split {
            self.paid_by.clone().filter(|id| !id.is_empty())
        } else {
            None
        };
        Ok(TransactionCreate {
            kind: self.kind,
            category,
            amount,
            description: self.description.trim().to_string(),
            date,
            is_split,
            paid_by_user_id,
        })
    }
}

/// Budget create form. Editing only touches the amount.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetDraft {
    pub scope: Scope,
    pub budget_type: BudgetType,
    pub category: String,
    pub amount: String,
    pub year: i32,
    pub month: u32,
}

impl BudgetDraft {
    pub fn new(today: NaiveDate, scope: Scope) -> Self {
        Self {
            scope,
            budget_type: BudgetType::Category,
            category: String::new(),
            amount: String::new(),
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn from_budget(budget: &Budget) -> Self {
        Self {
            scope: budget.scope,
            budget_type: budget.budget_type,
            category: budget.category.clone().unwrap_or_default(),
            amount: budget.amount.normalize().to_string(),
            year: budget.year,
            month: budget.month,
        }
    }

    pub fn validate(&self) -> Result<BudgetCreate> {
        let category = match self.budget_type {
            BudgetType::Category => Some(required(&self.category, "カテゴリ")?),
            BudgetType::MonthlyTotal => None,
        };
        let amount = positive_amount(&self.amount, "予算額")?;
        in_range(self.year.into(), "年", 2020, 2100)?;
        in_range(self.month.into(), "月", 1, 12)?;
        Ok(BudgetCreate {
            scope: self.scope,
            budget_type: self.budget_type,
            category,
            amount,
            year: self.year,
            month: self.month,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetDraft {
    pub name: String,
    pub asset_type: String,
    pub amount: String,
    pub description: String,
}

impl AssetDraft {
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            asset_type: asset.asset_type.clone(),
            amount: asset.amount.normalize().to_string(),
            description: asset.description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<AssetCreate> {
        let name = required(&self.name, "資産名")?;
        let asset_type = required(&self.asset_type, "資産の種類")?;
        let amount = parse_amount(&self.amount, "金額")?;
        if amount < Decimal::ZERO {
            return Err(ValidationError::Negative("金額"));
        }
        Ok(AssetCreate {
            name,
            asset_type,
            amount,
            description: optional_text(&self.description),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecurringDraft {
    pub kind: TransactionType,
    pub category: String,
    pub amount: String,
    pub description: String,
    pub frequency: Frequency,
    pub day_of_month: String,
    pub day_of_week: Option<u32>,
    pub is_split: bool,
}

impl Default for RecurringDraft {
    fn default() -> Self {
        Self {
            kind: TransactionType::Expense,
            category: String::new(),
            amount: String::new(),
            description: String::new(),
            frequency: Frequency::Monthly,
            day_of_month: "1".to_string(),
            day_of_week: None,
            is_split: false,
        }
    }
}

impl RecurringDraft {
    pub fn from_recurring(r: &RecurringTransaction) -> Self {
        Self {
            kind: r.kind,
            category: r.category.clone(),
            amount: r.amount.normalize().to_string(),
            description: r.description.clone().unwrap_or_default(),
            frequency: r.frequency,
            day_of_month: r.day_of_month.map(|d| d.to_string()).unwrap_or_default(),
            day_of_week: r.day_of_week,
            is_split: r.is_split,
        }
    }

    pub fn validate(&self) -> Result<RecurringCreate> {
        let category = required(&self.category, "カテゴリ")?;
        let amount = positive_amount(&self.amount, "金額")?;
        let (day_of_month, day_of_week) = match self.frequency {
            Frequency::Monthly => {
                let raw = required(&self.day_of_month, "日")?;
                let day: u32 = raw.parse().map_err(|_| ValidationError::NotANumber("日"))?;
                in_range(day.into(), "日", 1, 31)?;
                (Some(day), None)
            }
            Frequency::Weekly => {
                let day = self.day_of_week.ok_or(ValidationError::Required("曜日"))?;
                in_range(day.into(), "曜日", 0, 6)?;
                (None, Some(day))
            }
            Frequency::Yearly => (None, None),
        };
        Ok(RecurringCreate {
            kind: self.kind,
            category,
            amount,
            description: optional_text(&self.description),
            frequency: self.frequency,
            day_of_month,
            day_of_week,
            is_split: self.is_split && self.kind == TransactionType::Expense,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    pub fn validate(&self) -> Result<LoginRequest> {
        let email = required(&self.email, "メールアドレス")?;
        if self.password.is_empty() {
            return Err(ValidationError::Required("パスワード"));
        }
        Ok(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub oauth_pending_id: Option<String>,
}

impl RegisterDraft {
    pub fn validate(&self) -> Result<RegisterRequest> {
        let name = required(&self.name, "名前")?;
        let email = check_email(&self.email)?;
        check_password(&self.password, &self.confirm_password)?;
        Ok(RegisterRequest {
            email,
            password: self.password.clone(),
            name,
            oauth_pending_id: self.oauth_pending_id.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordResetDraft {
    pub token: String,
    pub password: String,
    pub confirm_password: String,
}

impl PasswordResetDraft {
    pub fn validate(&self) -> Result<PasswordResetConfirm> {
        let token = required(&self.token, "リセットトークン")?;
        check_password(&self.password, &self.confirm_password)?;
        Ok(PasswordResetConfirm {
            token,
            new_password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InviteCodeDraft {
    pub code: String,
}

impl InviteCodeDraft {
    /// Trimmed, upper-cased code.
    pub fn validate(&self) -> Result<String> {
        Ok(required(&self.code, "招待コード")?.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(category: &str, amount: &str) -> TransactionDraft {
        TransactionDraft {
            category: category.to_string(),
            amount: amount.to_string(),
            ..TransactionDraft::new(day(2026, 1, 1))
        }
    }

    #[test]
    fn test_transaction_requires_category() {
        assert_eq!(
            expense("", "1000").validate(),
            Err(ValidationError::Required("カテゴリ"))
        );
    }

    #[test]
    fn test_transaction_amount_checks() {
        assert_eq!(expense("食費", "").validate(), Err(ValidationError::Required("金額")));
        assert_eq!(
            expense("食費", "abc").validate(),
            Err(ValidationError::NotANumber("金額"))
        );
        assert_eq!(
            expense("食費", "0").validate(),
            Err(ValidationError::NotPositive("金額"))
        );
        assert_eq!(
            expense("食費", "-5").validate(),
            Err(ValidationError::NotPositive("金額"))
        );
    }

    #[test]
    fn test_transaction_valid_body() {
        let body = expense("食費", " ¥1,000 ").validate().unwrap();
        assert_eq!(body.kind, TransactionType::Expense);
        assert_eq!(body.category, "食費");
        assert_eq!(body.amount, Decimal::new(1000, 0));
        assert_eq!(body.date, day(2026, 1, 1));
        assert!(!body.is_split);
        assert_eq!(body.paid_by_user_id, None);
    }

    #[test]
    fn test_transaction_bad_date() {
        let mut draft = expense("食費", "100");
        draft.date = "2026/01/01".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::InvalidFormat("日付")));
    }

    #[test]
    fn test_income_is_never_split() {
        let mut draft = expense("食費", "100");
        draft.is_split = true;
        draft.paid_by = Some("u2".to_string());
        draft.set_kind(TransactionType::Income);
        assert!(draft.category.is_empty());
        draft.category = "本業".to_string();
        let body = draft.validate().unwrap();
        assert!(!body.is_split);
        assert_eq!(body.paid_by_user_id, None);
    }

    #[test]
    fn test_paid_by_only_sent_when_split() {
        let mut draft = expense("食費", "100");
        draft.paid_by = Some("u2".to_string());
        assert_eq!(draft.validate().unwrap().paid_by_user_id, None);
        draft.is_split = true;
        assert_eq!(draft.validate().unwrap().paid_by_user_id.as_deref(), Some("u2"));
    }

    #[test]
    fn test_budget_category_required_only_for_category_budgets() {
        let mut draft = BudgetDraft::new(day(2026, 3, 10), Scope::Personal);
        draft.amount = "50000".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::Required("カテゴリ")));
        draft.budget_type = BudgetType::MonthlyTotal;
        let body = draft.validate().unwrap();
        assert_eq!(body.category, None);
        assert_eq!((body.year, body.month), (2026, 3));
    }

    #[test]
    fn test_budget_range_checks() {
        let mut draft = BudgetDraft::new(day(2026, 3, 10), Scope::Couple);
        draft.budget_type = BudgetType::MonthlyTotal;
        draft.amount = "1".to_string();
        draft.month = 13;
        assert_eq!(
            draft.validate(),
            Err(ValidationError::OutOfRange {
                field: "月",
                min: 1,
                max: 12
            })
        );
        draft.month = 12;
        draft.year = 2019;
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::OutOfRange { field: "年", .. })
        ));
    }

    #[test]
    fn test_asset_allows_zero_but_not_negative() {
        let mut draft = AssetDraft {
            name: "口座".to_string(),
            asset_type: "other".to_string(),
            amount: "0".to_string(),
            description: "  ".to_string(),
        };
        let body = draft.validate().unwrap();
        assert_eq!(body.amount, Decimal::ZERO);
        assert_eq!(body.description, None);
        draft.amount = "-1".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::Negative("金額")));
        draft.asset_type.clear();
        assert_eq!(draft.validate(), Err(ValidationError::Required("資産の種類")));
    }

    #[test]
    fn test_recurring_schedule_fields() {
        let mut draft = RecurringDraft {
            category: "家賃".to_string(),
            amount: "85000".to_string(),
            day_of_month: "25".to_string(),
            ..RecurringDraft::default()
        };
        let body = draft.validate().unwrap();
        assert_eq!((body.day_of_month, body.day_of_week), (Some(25), None));

        draft.day_of_month = "32".to_string();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::OutOfRange { field: "日", .. })
        ));

        draft.frequency = Frequency::Weekly;
        assert_eq!(draft.validate(), Err(ValidationError::Required("曜日")));
        draft.day_of_week = Some(4);
        let body = draft.validate().unwrap();
        assert_eq!((body.day_of_month, body.day_of_week), (None, Some(4)));

        draft.frequency = Frequency::Yearly;
        let body = draft.validate().unwrap();
        assert_eq!((body.day_of_month, body.day_of_week), (None, None));
    }

    #[test]
    fn test_register_checks() {
        let mut draft = RegisterDraft {
            name: "Taro".to_string(),
            email: "taro@example.com".to_string(),
            password: "short".to_string(),
            confirm_password: "short".to_string(),
            oauth_pending_id: None,
        };
        assert_eq!(draft.validate(), Err(ValidationError::PasswordTooShort(8)));
        draft.password = "longenough".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::PasswordMismatch));
        draft.confirm_password = "longenough".to_string();
        assert!(draft.validate().is_ok());
        draft.email = "taro.example.com".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidFormat("メールアドレス"))
        );
    }

    #[test]
    fn test_password_reset_needs_token() {
        let draft = PasswordResetDraft {
            token: String::new(),
            password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::Required("リセットトークン"))
        );
    }

    #[test]
    fn test_invite_code_normalized() {
        let draft = InviteCodeDraft {
            code: "  ab12cd ".to_string(),
        };
        assert_eq!(draft.validate().unwrap(), "AB12CD");
        assert!(InviteCodeDraft::default().validate().is_err());
    }

    #[test]
    fn test_avatar_mime() {
        assert_eq!(avatar_mime("me.png", Some("image/png"), 1024), Ok("image/png"));
        assert_eq!(avatar_mime("ME.JPG", None, 1024), Ok("image/jpeg"));
        assert_eq!(
            avatar_mime("doc.pdf", Some("application/pdf"), 1024),
            Err(ValidationError::UnsupportedImage)
        );
        assert_eq!(avatar_mime("noext", None, 10), Err(ValidationError::UnsupportedImage));
        assert_eq!(
            avatar_mime("big.webp", Some("image/webp"), AVATAR_MAX_BYTES + 1),
            Err(ValidationError::ImageTooLarge)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Required("カテゴリ").to_string(),
            "カテゴリを入力してください"
        );
        assert_eq!(
            ValidationError::PasswordTooShort(8).to_string(),
            "パスワードは8文字以上で入力してください"
        );
    }
}

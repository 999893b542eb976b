//! Category names shared with the backend.

pub const INCOME_CATEGORIES: &[&str] = &["本業", "副業", "アルバイト", "パート", "その他"];

pub const FIXED_EXPENSE_CATEGORIES: &[&str] = &["家賃", "電気・ガス・水道", "通信費", "サブスク・保険"];

pub const VARIABLE_EXPENSE_CATEGORIES: &[&str] = &[
    "食費",
    "日用品",
    "交通費",
    "交際費",
    "医療費",
    "被服・美容",
    "趣味・娯楽",
];

/// Fixed then variable expense categories.
pub fn all_expense_categories() -> Vec<&'static str> {
    FIXED_EXPENSE_CATEGORIES
        .iter()
        .chain(VARIABLE_EXPENSE_CATEGORIES)
        .copied()
        .collect()
}

/// Every category, income first.
pub fn all_categories() -> Vec<&'static str> {
    INCOME_CATEGORIES
        .iter()
        .copied()
        .chain(all_expense_categories())
        .collect()
}

pub fn categories_for(kind: super::TransactionType) -> Vec<&'static str> {
    match kind {
        super::TransactionType::Income => INCOME_CATEGORIES.to_vec(),
        super::TransactionType::Expense => all_expense_categories(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_categories_order() {
        let all = all_expense_categories();
        assert_eq!(all.len(), 11);
        assert_eq!(all[0], "家賃");
        assert_eq!(all[4], "食費");
    }

    #[test]
    fn test_all_categories_starts_with_income() {
        let all = all_categories();
        assert_eq!(all.len(), 16);
        assert_eq!(all[0], "本業");
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationPreferences {
    pub budget_exceeded: bool,
    pub budget_warning_80: bool,
    pub partner_expense: bool,
    pub monthly_report: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Partial update; unset toggles keep their server value.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct NotificationPreferencesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_exceeded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_warning_80: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_expense: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_report: Option<bool>,
}

/// Which preference a toggle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    BudgetExceeded,
    BudgetWarning80,
    PartnerExpense,
    MonthlyReport,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::BudgetExceeded,
        NotificationKind::BudgetWarning80,
        NotificationKind::PartnerExpense,
        NotificationKind::MonthlyReport,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::BudgetExceeded => "予算超過",
            NotificationKind::BudgetWarning80 => "予算80%到達",
            NotificationKind::PartnerExpense => "パートナーの支出",
            NotificationKind::MonthlyReport => "月次レポート",
        }
    }
}

impl NotificationPreferences {
    pub fn enabled(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::BudgetExceeded => self.budget_exceeded,
            NotificationKind::BudgetWarning80 => self.budget_warning_80,
            NotificationKind::PartnerExpense => self.partner_expense,
            NotificationKind::MonthlyReport => self.monthly_report,
        }
    }
}

impl NotificationPreferencesUpdate {
    pub fn set(kind: NotificationKind, value: bool) -> Self {
        let mut update = Self::default();
        match kind {
            NotificationKind::BudgetExceeded => update.budget_exceeded = Some(value),
            NotificationKind::BudgetWarning80 => update.budget_warning_80 = Some(value),
            NotificationKind::PartnerExpense => update.partner_expense = Some(value),
            NotificationKind::MonthlyReport => update.monthly_report = Some(value),
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_toggle_update() {
        let update = NotificationPreferencesUpdate::set(NotificationKind::PartnerExpense, false);
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({"partner_expense": false}));
    }

    #[test]
    fn test_enabled_lookup() {
        let prefs: NotificationPreferences = serde_json::from_str(
            r#"{"budget_exceeded": true, "budget_warning_80": false, "partner_expense": true, "monthly_report": false}"#,
        )
        .unwrap();
        let enabled: Vec<_> = NotificationKind::ALL
            .into_iter()
            .filter(|k| prefs.enabled(*k))
            .collect();
        assert_eq!(enabled, vec![NotificationKind::BudgetExceeded, NotificationKind::PartnerExpense]);
    }
}

use api::{Asset, Budget, SavingsData, TransactionSummary};
use dioxus::prelude::*;
use rust_decimal::Decimal;

use crate::budget::{bar_width, BudgetLevel, MonthlyOutlook};
use crate::format::{format_percent, format_yen};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Income,
    Expense,
    Balance,
    Neutral,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Income => "amount income",
            Tone::Expense => "amount expense",
            Tone::Balance => "amount balance",
            Tone::Neutral => "amount",
        }
    }
}

#[component]
pub fn SummaryCard(
    title: String,
    amount: Decimal,
    tone: Tone,
    #[props(default)] caption: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "card summary-card",
            p { class: "card-title", "{title}" }
            p { class: tone.class(), "{format_yen(amount)}" }
            if let Some(caption) = caption {
                p { class: "muted small", "{caption}" }
            }
        }
    }
}

/// Income, expense and balance for one scope.
#[component]
pub fn SummaryCards(summary: TransactionSummary, #[props(default)] label: Option<String>) -> Element {
    let prefix = label.map(|l| format!("{l} ")).unwrap_or_default();
    rsx! {
        div {
            class: "grid-cards",
            SummaryCard { title: format!("{prefix}収入"), amount: summary.total_income, tone: Tone::Income }
            SummaryCard { title: format!("{prefix}支出"), amount: summary.total_expense, tone: Tone::Expense }
            SummaryCard {
                title: format!("{prefix}収支"),
                amount: summary.balance,
                tone: Tone::Balance,
                caption: format!("{}件の取引", summary.transaction_count),
            }
        }
    }
}

#[component]
pub fn ProgressBar(percentage: Option<f64>, level: BudgetLevel) -> Element {
    let width = bar_width(percentage);
    rsx! {
        div {
            class: "progress",
            div {
                class: "progress-fill {level.class()}",
                style: "width: {width}%",
            }
        }
    }
}

/// One budget with its spend progress.
#[component]
pub fn BudgetCard(
    budget: Budget,
    #[props(default)] on_edit: Option<EventHandler<Budget>>,
    #[props(default)] on_delete: Option<EventHandler<Budget>>,
) -> Element {
    let level = BudgetLevel::for_budget(&budget);
    let percentage = budget.percentage.unwrap_or(0.0);
    let remaining = budget.remaining();
    let edit_budget = budget.clone();
    let delete_budget = budget.clone();

    rsx! {
        div {
            class: "card budget-card",
            div {
                class: "card-row",
                div {
                    p { class: "card-title", "{budget.title()}" }
                    p { class: "muted small", "{budget.scope.label()} / {budget.budget_type.label()}" }
                }
                if budget.exceeded() {
                    span { class: "badge badge-danger", "超過" }
                }
            }
            p {
                class: "budget-figures",
                "{format_yen(budget.spent())} / {format_yen(budget.amount)}"
            }
            ProgressBar { percentage: budget.percentage, level: level }
            div {
                class: "card-row muted small",
                span { "{format_percent(percentage)} 使用" }
                if remaining >= Decimal::ZERO {
                    span { "残り {format_yen(remaining)}" }
                } else {
                    span { class: "expense", "{format_yen(-remaining)} 超過" }
                }
            }
            if on_edit.is_some() || on_delete.is_some() {
                div {
                    class: "card-actions",
                    if let Some(on_edit) = on_edit {
                        button {
                            class: "btn btn-small btn-outline",
                            onclick: move |_| on_edit.call(edit_budget.clone()),
                            "編集"
                        }
                    }
                    if let Some(on_delete) = on_delete {
                        button {
                            class: "btn btn-small btn-danger-outline",
                            onclick: move |_| on_delete.call(delete_budget.clone()),
                            "削除"
                        }
                    }
                }
            }
        }
    }
}

/// Month-end outlook for a monthly-total budget.
#[component]
pub fn MonthlyBudgetCard(title: String, outlook: MonthlyOutlook) -> Element {
    let level = BudgetLevel::from_percentage(outlook.percent_used);
    rsx! {
        div {
            class: "card monthly-budget-card",
            p { class: "card-title", "{title}" }
            p { class: "amount", "{format_yen(outlook.remaining)}" }
            p { class: "muted small", "残り予算 (予算 {format_yen(outlook.total)})" }
            ProgressBar { percentage: Some(outlook.percent_used), level: level }
            div {
                class: "card-row",
                div {
                    p { class: "muted small", "1日あたり" }
                    p { class: "strong", "{format_yen(outlook.daily_budget)}" }
                }
                div {
                    p { class: "muted small", "残り日数" }
                    p { class: "strong", "{outlook.remaining_days}日" }
                }
                div {
                    p { class: "muted small", "使用率" }
                    p { class: "strong", "{format_percent(outlook.percent_used)}" }
                }
            }
        }
    }
}

#[component]
pub fn AssetCard(asset: Asset, on_edit: EventHandler<Asset>, on_delete: EventHandler<Asset>) -> Element {
    let edit_asset = asset.clone();
    let delete_asset = asset.clone();
    rsx! {
        div {
            class: "card asset-card",
            div {
                class: "card-row",
                div {
                    p { class: "card-title", "{asset.name}" }
                    span { class: "badge", "{asset.asset_type_label}" }
                }
                p { class: "amount", "{format_yen(asset.amount)}" }
            }
            if let Some(description) = asset.description.as_deref() {
                p { class: "muted small", "{description}" }
            }
            div {
                class: "card-actions",
                button {
                    class: "btn btn-small btn-outline",
                    onclick: move |_| on_edit.call(edit_asset.clone()),
                    "編集"
                }
                button {
                    class: "btn btn-small btn-danger-outline",
                    onclick: move |_| on_delete.call(delete_asset.clone()),
                    "削除"
                }
            }
        }
    }
}

/// Liquid balance plus registered assets, personal and shared.
#[component]
pub fn SavingsCard(savings: SavingsData) -> Element {
    rsx! {
        div {
            class: "card savings-card",
            p { class: "card-title", "貯蓄状況" }
            div {
                class: "card-row",
                div {
                    p { class: "muted small", "個人 純資産" }
                    p { class: "amount balance", "{format_yen(savings.personal_total_balance)}" }
                    p { class: "muted small",
                        "残高 {format_yen(savings.personal_balance)} + 資産 {format_yen(savings.personal_assets_total)}"
                    }
                }
                if savings.has_couple {
                    div {
                        p { class: "muted small", "カップル 純資産" }
                        p { class: "amount balance", "{format_yen(savings.couple_total_balance.unwrap_or_default())}" }
                        p { class: "muted small",
                            "残高 {format_yen(savings.couple_balance.unwrap_or_default())} + 資産 {format_yen(savings.couple_assets_total.unwrap_or_default())}"
                        }
                    }
                }
            }
        }
    }
}

use api::{
    recent_trends, Budget, BudgetType, CategoryAnalysisQuery, CategoryBreakdown, MonthlyTrend,
    MonthlyTrendsQuery, SavingsData, Scope, SummaryQuery, Transaction, TransactionFilter,
    TransactionSummary,
};
use chrono::Datelike;
use dioxus::prelude::*;
use ui::components::{
    use_data_version, BudgetCard, CategoryPie, MonthlyBudgetCard, PageSkeleton, QuickCategoryBar,
    QuickCategorySettings, SavingsCard, SummaryCards, TransactionList, TrendChart,
};
use ui::format::{month_bounds, today};
use ui::{use_auth, use_client, MonthlyOutlook};

use super::loaded;
use crate::Route;

const RECENT_COUNT: u32 = 5;
const TREND_MONTHS: usize = 6;

#[derive(Clone, Debug, Default, PartialEq)]
struct DashboardData {
    personal: Option<TransactionSummary>,
    couple: Option<TransactionSummary>,
    recent: Vec<Transaction>,
    expense_breakdown: Vec<CategoryBreakdown>,
    trends: Vec<MonthlyTrend>,
    personal_budgets: Vec<Budget>,
    couple_budgets: Vec<Budget>,
    savings: Option<SavingsData>,
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let client = use_client();
    let version = use_data_version();

    let data = use_resource(move || {
        let client = client.clone();
        let has_couple = auth().couple.is_some();
        let _ = version.get();
        async move {
            let now = today();
            let (start, end) = month_bounds(now.year(), now.month());
            let couple_summary = async {
                if has_couple {
                    loaded("couple summary", client.transaction_summary(&SummaryQuery::for_scope(Scope::Couple)).await)
                } else {
                    None
                }
            };
            let couple_budgets = async {
                if has_couple {
                    loaded("couple budgets", client.current_budget_status(Scope::Couple).await)
                } else {
                    None
                }
            };
            let personal_query = SummaryQuery::for_scope(Scope::Personal);
            let recent_filter = TransactionFilter::default().scope(Scope::Personal).limit(RECENT_COUNT);
            let analysis_query = CategoryAnalysisQuery {
                start_date: start,
                end_date: end,
                scope: Scope::Personal,
            };
            let trends_query = MonthlyTrendsQuery {
                year: now.year(),
                scope: Scope::Personal,
            };
            let (personal, couple, recent, analysis, trends, personal_budgets, couple_budgets, savings) = futures::join!(
                client.transaction_summary(&personal_query),
                couple_summary,
                client.list_transactions(&recent_filter),
                client.category_analysis(&analysis_query),
                client.monthly_trends(&trends_query),
                client.current_budget_status(Scope::Personal),
                couple_budgets,
                client.savings(),
            );

            DashboardData {
                personal: loaded("personal summary", personal),
                couple,
                recent: loaded("recent transactions", recent).unwrap_or_default(),
                expense_breakdown: loaded("category analysis", analysis)
                    .map(|a| a.expense_breakdown)
                    .unwrap_or_default(),
                trends: loaded("monthly trends", trends)
                    .map(|t| recent_trends(&t, now.year(), now.month(), TREND_MONTHS))
                    .unwrap_or_default(),
                personal_budgets: loaded("personal budgets", personal_budgets).unwrap_or_default(),
                couple_budgets: couple_budgets.unwrap_or_default(),
                savings: loaded("savings", savings),
            }
        }
    });

    let Some(data) = data.cloned() else {
        return rsx! {
            div { class: "page", PageSkeleton {} }
        };
    };

    let now = today();
    let state = auth();
    let greeting = state
        .user
        .as_ref()
        .map(|u| format!("こんにちは、{}さん", u.display_name()))
        .unwrap_or_default();
    let personal_outlook = MonthlyOutlook::from_budgets(&data.personal_budgets, now);
    let couple_outlook = MonthlyOutlook::from_budgets(&data.couple_budgets, now);
    let category_budgets: Vec<Budget> = data
        .personal_budgets
        .iter()
        .chain(data.couple_budgets.iter())
        .filter(|b| b.budget_type == BudgetType::Category)
        .cloned()
        .collect();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "ダッシュボード" }
                p { class: "muted", "{greeting}" }
            }

            section {
                class: "section",
                h2 { "クイック入力" }
                QuickCategoryBar {}
            }

            section {
                class: "section",
                h2 { "個人" }
                if let Some(summary) = data.personal.clone() {
                    SummaryCards { summary }
                } else {
                    p { class: "empty", "集計を取得できませんでした" }
                }
            }

            if let Some(summary) = data.couple.clone() {
                section {
                    class: "section",
                    h2 { "カップル" }
                    SummaryCards { summary, label: "カップル" }
                }
            }

            if personal_outlook.is_some() || couple_outlook.is_some() {
                section {
                    class: "section grid-cards",
                    if let Some(outlook) = personal_outlook {
                        MonthlyBudgetCard { title: "個人の今月の予算", outlook }
                    }
                    if let Some(outlook) = couple_outlook {
                        MonthlyBudgetCard { title: "カップルの今月の予算", outlook }
                    }
                }
            }

            if !category_budgets.is_empty() {
                section {
                    class: "section",
                    div {
                        class: "card-row",
                        h2 { "予算の状況" }
                        Link { to: Route::Budgets {}, "すべて見る" }
                    }
                    div {
                        class: "grid-cards",
                        for budget in category_budgets {
                            BudgetCard { key: "{budget.id}", budget }
                        }
                    }
                }
            }

            if let Some(savings) = data.savings.clone() {
                section {
                    class: "section",
                    SavingsCard { savings }
                }
            }

            section {
                class: "section grid-two",
                div {
                    class: "card",
                    h2 { "今月の支出内訳" }
                    CategoryPie { breakdown: data.expense_breakdown.clone() }
                }
                div {
                    class: "card",
                    h2 { "月別推移" }
                    TrendChart { trends: data.trends.clone() }
                }
            }

            section {
                class: "section card",
                div {
                    class: "card-row",
                    h2 { "最近の取引" }
                    Link { to: Route::Transactions {}, "すべて見る" }
                }
                TransactionList { transactions: data.recent.clone() }
            }

            section {
                class: "section",
                QuickCategorySettings {}
            }
        }
    }
}

use api::{ReportPeriod, ReportQuery, Scope};
use chrono::Datelike;
use dioxus::prelude::*;
use ui::components::{
    save_csv, Alert, BudgetCard, CategoryBars, CategoryPie, EmptyState, LoadingSpinner,
    MonthPicker, ScopeToggle, SummaryCards, TimeSeriesChart,
};
use ui::format::today;
use ui::{notify_error, notify_success, use_auth, use_client, use_toasts};

/// Years offered by the yearly selector, counting back from this year.
const YEAR_CHOICES: i32 = 5;

#[component]
pub fn Reports() -> Element {
    let auth = use_auth();
    let client = use_client();
    let mut toasts = use_toasts();

    let now = today();
    let mut period = use_signal(|| ReportPeriod::Monthly);
    let mut month = use_signal(|| (now.year(), now.month()));
    let mut year = use_signal(|| now.year());
    let mut scope = use_signal(|| Scope::Personal);
    let mut exporting = use_signal(|| false);

    let query = move || match period() {
        ReportPeriod::Monthly => {
            let (y, m) = month();
            ReportQuery::monthly(y, m, scope())
        }
        ReportPeriod::Yearly => ReportQuery::yearly(year(), scope()),
    };

    let report_client = client.clone();
    let report = use_resource(move || {
        let client = report_client.clone();
        let kind = period();
        let q = query();
        async move {
            match kind {
                ReportPeriod::Monthly => client.monthly_report(&q).await,
                ReportPeriod::Yearly => client.yearly_report(&q).await,
            }
        }
    });

    let export_client = client.clone();
    let on_export = move |_| {
        let client = export_client.clone();
        let kind = period();
        let q = query();
        spawn(async move {
            exporting.set(true);
            let result = match kind {
                ReportPeriod::Monthly => client.export_monthly_report_csv(&q).await,
                ReportPeriod::Yearly => client.export_yearly_report_csv(&q).await,
            };
            match result {
                Ok(file) => match save_csv(&file) {
                    Ok(()) => notify_success(&mut toasts, format!("{} をダウンロードしました", file.filename)),
                    Err(e) => notify_error(&mut toasts, e),
                },
                Err(e) => {
                    tracing::error!("report export failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            exporting.set(false);
        });
    };

    let has_couple = auth().couple.is_some();
    let (picked_year, picked_month) = month();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header card-row",
                h1 { "レポート" }
                button {
                    class: "btn btn-secondary",
                    disabled: exporting(),
                    onclick: on_export,
                    if exporting() { "出力中..." } else { "CSV出力" }
                }
            }

            div {
                class: "filters",
                div {
                    class: "segmented",
                    for (kind, label) in [(ReportPeriod::Monthly, "月次"), (ReportPeriod::Yearly, "年次")] {
                        button {
                            key: "{label}",
                            r#type: "button",
                            class: if period() == kind { "segment active" } else { "segment" },
                            onclick: move |_| period.set(kind),
                            "{label}"
                        }
                    }
                }
                if period() == ReportPeriod::Monthly {
                    MonthPicker {
                        year: picked_year,
                        month: picked_month,
                        on_change: move |p| month.set(p),
                    }
                } else {
                    select {
                        onchange: move |e| {
                            if let Ok(y) = e.value().parse() {
                                year.set(y);
                            }
                        },
                        for y in (now.year() - YEAR_CHOICES + 1..=now.year()).rev() {
                            option {
                                key: "{y}",
                                value: "{y}",
                                selected: y == year(),
                                "{y}年"
                            }
                        }
                    }
                }
                ScopeToggle { value: scope(), has_couple, on_change: move |s| scope.set(s) }
            }

            match &*report.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Err(e)) => rsx! { Alert { message: e.user_message() } },
                Some(Ok(data)) => rsx! {
                    h2 { "{data.title()}のレポート" }
                    SummaryCards { summary: data.summary.clone() }
                    div {
                        class: "card",
                        h3 { "収支の推移" }
                        if data.time_series.is_empty() {
                            EmptyState { message: "この期間の取引はありません" }
                        } else {
                            TimeSeriesChart { points: data.time_series.clone() }
                        }
                    }
                    div {
                        class: "grid-two",
                        div {
                            class: "card",
                            h3 { "収入内訳" }
                            CategoryPie { breakdown: data.category_analysis.income_breakdown.clone() }
                        }
                        div {
                            class: "card",
                            h3 { "支出内訳" }
                            CategoryPie { breakdown: data.category_analysis.expense_breakdown.clone() }
                        }
                    }
                    div {
                        class: "card",
                        h3 { "トップ支出カテゴリー" }
                        CategoryBars { breakdown: data.category_analysis.top_expense_categories.clone() }
                    }
                    if let Some(budgets) = data.budget_status.clone().filter(|b| !b.is_empty()) {
                        div {
                            class: "section",
                            h3 { "予算の状況" }
                            div {
                                class: "grid-cards",
                                for budget in budgets {
                                    BudgetCard { key: "{budget.id}", budget }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

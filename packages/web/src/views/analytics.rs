use api::{
    CategoryAnalysisQuery, CategoryBreakdown, MonthlyTrendsQuery, Scope, YearlyTrendsQuery,
};
use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
use ui::components::{
    Alert, CategoryBars, CategoryPie, EmptyState, LoadingSpinner, ScopeToggle, TrendChart,
};
use ui::format::{format_percent, format_yen, month_bounds, today};
use ui::{use_auth, use_client};

use super::loaded;

const YEARS_SHOWN: i32 = 3;

#[component]
pub fn Analytics() -> Element {
    let auth = use_auth();
    let client = use_client();

    let now = today();
    let mut scope = use_signal(|| Scope::Personal);
    let mut start = use_signal(|| month_bounds(now.year(), now.month()).0);
    let mut end = use_signal(|| now);

    let analysis_client = client.clone();
    let analysis = use_resource(move || {
        let client = analysis_client.clone();
        let query = CategoryAnalysisQuery {
            start_date: start(),
            end_date: end(),
            scope: scope(),
        };
        async move { client.category_analysis(&query).await }
    });

    let trends_client = client.clone();
    let trends = use_resource(move || {
        let client = trends_client.clone();
        let scope = scope();
        let year = end().year();
        async move {
            let monthly_query = MonthlyTrendsQuery { year, scope };
            let yearly_query = YearlyTrendsQuery {
                start_year: year - YEARS_SHOWN + 1,
                end_year: year,
                scope,
            };
            let (monthly, yearly) = futures::join!(
                client.monthly_trends(&monthly_query),
                client.yearly_trends(&yearly_query),
            );
            (
                loaded("monthly trends", monthly).unwrap_or_default(),
                loaded("yearly trends", yearly).unwrap_or_default(),
            )
        }
    });

    let has_couple = auth().couple.is_some();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "分析" }
            }

            div {
                class: "filters card",
                ScopeToggle { value: scope(), has_couple, on_change: move |s| scope.set(s) }
                label {
                    class: "field-inline",
                    span { "開始日" }
                    input {
                        r#type: "date",
                        value: "{start}",
                        oninput: move |e| {
                            if let Ok(d) = NaiveDate::parse_from_str(&e.value(), "%Y-%m-%d") {
                                start.set(d);
                            }
                        },
                    }
                }
                label {
                    class: "field-inline",
                    span { "終了日" }
                    input {
                        r#type: "date",
                        value: "{end}",
                        oninput: move |e| {
                            if let Ok(d) = NaiveDate::parse_from_str(&e.value(), "%Y-%m-%d") {
                                end.set(d);
                            }
                        },
                    }
                }
            }

            if start() > end() {
                Alert { message: "開始日は終了日より前の日付を指定してください" }
            }

            match &*analysis.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Err(e)) => rsx! { Alert { message: e.user_message() } },
                Some(Ok(a)) => rsx! {
                    div {
                        class: "grid-two",
                        div {
                            class: "card",
                            h3 { "収入内訳" }
                            CategoryPie { breakdown: a.income_breakdown.clone() }
                        }
                        div {
                            class: "card",
                            h3 { "支出内訳" }
                            CategoryPie { breakdown: a.expense_breakdown.clone() }
                        }
                    }
                    div {
                        class: "card",
                        h3 { "トップ支出カテゴリー" }
                        CategoryBars { breakdown: a.top_expense_categories.clone() }
                    }
                    div {
                        class: "grid-two",
                        BreakdownTable { title: "収入詳細", rows: a.income_breakdown.clone() }
                        BreakdownTable { title: "支出詳細", rows: a.expense_breakdown.clone() }
                    }
                },
            }

            if let Some((monthly, yearly)) = trends.cloned() {
                div {
                    class: "card",
                    h3 { "{end().year()}年の月別推移" }
                    TrendChart { trends: monthly }
                }
                div {
                    class: "card",
                    h3 { "年別推移" }
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "年" }
                                th { "収入" }
                                th { "支出" }
                                th { "収支" }
                                th { "件数" }
                            }
                        }
                        tbody {
                            for y in yearly {
                                tr {
                                    key: "{y.year}",
                                    td { "{y.year}年" }
                                    td { class: "income", "{format_yen(y.total_income)}" }
                                    td { class: "expense", "{format_yen(y.total_expense)}" }
                                    td { "{format_yen(y.balance)}" }
                                    td { "{y.transaction_count}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BreakdownTable(title: String, rows: Vec<CategoryBreakdown>) -> Element {
    rsx! {
        div {
            class: "card",
            h3 { "{title}" }
            if rows.is_empty() {
                EmptyState { message: "データがありません" }
            } else {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "カテゴリ" }
                            th { "金額" }
                            th { "割合" }
                            th { "件数" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                key: "{row.category}",
                                td { "{row.category}" }
                                td { "{format_yen(row.total)}" }
                                td { "{format_percent(row.percentage)}" }
                                td { "{row.transaction_count}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

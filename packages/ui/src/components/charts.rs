//! Small SVG charts for trends and category breakdowns.

use std::f64::consts::PI;

use api::{CategoryBreakdown, MonthlyTrend, TimeSeriesData};
use dioxus::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::format::{format_percent, format_yen};

pub const PALETTE: [&str; 8] = [
    "#ef4444", "#3b82f6", "#10b981", "#8b5cf6", "#ec4899", "#f59e0b", "#06b6d4", "#6b7280",
];

const CHART_HEIGHT: f64 = 160.0;
const BAR_WIDTH: f64 = 14.0;
const GROUP_WIDTH: f64 = 44.0;

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Height of a bar for `value` when `max` fills `height`. Negative values
/// draw as zero.
pub fn bar_height(value: f64, max: f64, height: f64) -> f64 {
    if max <= 0.0 || value <= 0.0 {
        return 0.0;
    }
    (value / max * height).min(height)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    /// Position of the source item in the input.
    pub index: usize,
    pub label: String,
    pub fraction: f64,
    pub start: f64,
    pub end: f64,
    pub color: &'static str,
}

/// Splits a full turn proportionally. Non-positive values are dropped.
pub fn pie_slices(items: &[(String, f64)]) -> Vec<Slice> {
    let total: f64 = items.iter().map(|(_, v)| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angle = -PI / 2.0;
    items
        .iter()
        .enumerate()
        .filter(|(_, (_, v))| *v > 0.0)
        .enumerate()
        .map(|(i, (index, (label, value)))| {
            let fraction = value / total;
            let start = angle;
            angle += fraction * 2.0 * PI;
            Slice {
                index,
                label: label.clone(),
                fraction,
                start,
                end: angle,
                color: PALETTE[i % PALETTE.len()],
            }
        })
        .collect()
}

/// Slices of a category breakdown, each paired with the row it was cut from.
pub fn breakdown_slices(breakdown: &[CategoryBreakdown]) -> Vec<(Slice, &CategoryBreakdown)> {
    let items: Vec<(String, f64)> = breakdown
        .iter()
        .map(|b| (b.category.clone(), to_f64(b.total)))
        .collect();
    pie_slices(&items)
        .into_iter()
        .filter_map(|slice| {
            let row = breakdown.get(slice.index)?;
            Some((slice, row))
        })
        .collect()
}

/// SVG path for a pie wedge centred at `(c, c)`.
pub fn arc_path(c: f64, r: f64, start: f64, end: f64) -> String {
    let (x1, y1) = (c + r * start.cos(), c + r * start.sin());
    let (x2, y2) = (c + r * end.cos(), c + r * end.sin());
    let large = if end - start > PI { 1 } else { 0 };
    format!("M {c:.2} {c:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large} 1 {x2:.2} {y2:.2} Z")
}

/// Income/expense bars per month.
#[component]
pub fn TrendChart(trends: Vec<MonthlyTrend>) -> Element {
    if trends.is_empty() {
        return rsx! { p { class: "empty", "データがありません" } };
    }
    let max = trends
        .iter()
        .flat_map(|t| [to_f64(t.total_income), to_f64(t.total_expense)])
        .fold(0.0, f64::max);
    let width = GROUP_WIDTH * trends.len() as f64;
    let view_box = format!("0 0 {width} {}", CHART_HEIGHT + 20.0);

    rsx! {
        svg {
            class: "chart",
            view_box: "{view_box}",
            for (i, trend) in trends.iter().enumerate() {
                g {
                    key: "{trend.year}-{trend.month}",
                    {
                        let x = i as f64 * GROUP_WIDTH + 6.0;
                        let hi = bar_height(to_f64(trend.total_income), max, CHART_HEIGHT);
                        let he = bar_height(to_f64(trend.total_expense), max, CHART_HEIGHT);
                        rsx! {
                            rect { class: "bar-income", x: "{x}", y: "{CHART_HEIGHT - hi}", width: "{BAR_WIDTH}", height: "{hi}",
                                title { "収入 {format_yen(trend.total_income)}" }
                            }
                            rect { class: "bar-expense", x: "{x + BAR_WIDTH + 2.0}", y: "{CHART_HEIGHT - he}", width: "{BAR_WIDTH}", height: "{he}",
                                title { "支出 {format_yen(trend.total_expense)}" }
                            }
                            text { class: "chart-label", x: "{x + BAR_WIDTH}", y: "{CHART_HEIGHT + 14.0}", text_anchor: "middle", "{trend.month_name}" }
                        }
                    }
                }
            }
        }
        ChartLegend {}
    }
}

/// Income/expense bars for a report's time series.
#[component]
pub fn TimeSeriesChart(points: Vec<TimeSeriesData>) -> Element {
    if points.is_empty() {
        return rsx! { p { class: "empty", "データがありません" } };
    }
    let max = points
        .iter()
        .flat_map(|p| [to_f64(p.income), to_f64(p.expense)])
        .fold(0.0, f64::max);
    let step = 12.0;
    let width = step * points.len() as f64;
    let view_box = format!("0 0 {width} {}", CHART_HEIGHT + 20.0);

    rsx! {
        svg {
            class: "chart",
            view_box: "{view_box}",
            for (i, point) in points.iter().enumerate() {
                g {
                    key: "{point.date}",
                    {
                        let x = i as f64 * step + 1.0;
                        let hi = bar_height(to_f64(point.income), max, CHART_HEIGHT);
                        let he = bar_height(to_f64(point.expense), max, CHART_HEIGHT);
                        rsx! {
                            rect { class: "bar-income", x: "{x}", y: "{CHART_HEIGHT - hi}", width: "4", height: "{hi}",
                                title { "{point.label} 収入 {format_yen(point.income)}" }
                            }
                            rect { class: "bar-expense", x: "{x + 5.0}", y: "{CHART_HEIGHT - he}", width: "4", height: "{he}",
                                title { "{point.label} 支出 {format_yen(point.expense)}" }
                            }
                        }
                    }
                }
            }
        }
        ChartLegend {}
    }
}

#[component]
fn ChartLegend() -> Element {
    rsx! {
        div {
            class: "legend",
            span { class: "legend-item", span { class: "swatch bar-income" } "収入" }
            span { class: "legend-item", span { class: "swatch bar-expense" } "支出" }
        }
    }
}

/// Pie of category totals with a legend.
#[component]
pub fn CategoryPie(breakdown: Vec<CategoryBreakdown>) -> Element {
    let slices = breakdown_slices(&breakdown);
    if slices.is_empty() {
        return rsx! { p { class: "empty", "データがありません" } };
    }
    let full = slices.len() == 1;

    rsx! {
        div {
            class: "pie-wrap",
            svg {
                class: "pie",
                view_box: "0 0 200 200",
                if full {
                    circle { cx: "100", cy: "100", r: "90", fill: slices[0].0.color }
                } else {
                    for (slice, _) in slices.iter() {
                        path {
                            key: "{slice.label}",
                            d: arc_path(100.0, 90.0, slice.start, slice.end),
                            fill: slice.color,
                        }
                    }
                }
            }
            ul {
                class: "pie-legend",
                for (slice, item) in slices.iter() {
                    li {
                        key: "{item.category}",
                        span { class: "swatch", style: "background: {slice.color}" }
                        span { "{item.category}" }
                        span { class: "muted", "{format_yen(item.total)} ({format_percent(item.percentage)})" }
                    }
                }
            }
        }
    }
}

/// Horizontal bars ranking categories.
#[component]
pub fn CategoryBars(breakdown: Vec<CategoryBreakdown>) -> Element {
    if breakdown.is_empty() {
        return rsx! { p { class: "empty", "データがありません" } };
    }
    rsx! {
        ul {
            class: "category-bars",
            for item in breakdown.iter() {
                li {
                    key: "{item.category}",
                    div {
                        class: "card-row small",
                        span { "{item.category}" }
                        span { "{format_yen(item.total)}" }
                    }
                    div {
                        class: "progress",
                        div { class: "progress-fill level-caution", style: "width: {item.percentage.clamp(0.0, 100.0)}%" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height() {
        assert_eq!(bar_height(50.0, 100.0, 160.0), 80.0);
        assert_eq!(bar_height(100.0, 100.0, 160.0), 160.0);
        assert_eq!(bar_height(-5.0, 100.0, 160.0), 0.0);
        assert_eq!(bar_height(5.0, 0.0, 160.0), 0.0);
    }

    #[test]
    fn test_pie_slices_cover_full_turn() {
        let items = vec![
            ("食費".to_string(), 30.0),
            ("家賃".to_string(), 70.0),
            ("空".to_string(), 0.0),
        ];
        let slices = pie_slices(&items);
        assert_eq!(slices.len(), 2);
        assert!((slices[0].fraction - 0.3).abs() < 1e-9);
        assert!((slices[1].end - slices[0].start - 2.0 * PI).abs() < 1e-9);
        assert_eq!(slices[1].start, slices[0].end);
        assert_ne!(slices[0].color, slices[1].color);
    }

    #[test]
    fn test_pie_slices_empty() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[("x".to_string(), 0.0)]).is_empty());
    }

    fn row(category: &str, total: i64, percentage: f64) -> CategoryBreakdown {
        CategoryBreakdown {
            category: category.to_string(),
            total: Decimal::new(total, 0),
            percentage,
            transaction_count: 1,
        }
    }

    #[test]
    fn test_breakdown_slices_skip_empty_rows() {
        let breakdown = vec![row("食費", 0, 0.0), row("日用品", 100, 40.0), row("家賃", 150, 60.0)];
        let pairs = breakdown_slices(&breakdown);
        let labels: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(slice, item)| (slice.label.as_str(), item.category.as_str()))
            .collect();
        assert_eq!(labels, vec![("日用品", "日用品"), ("家賃", "家賃")]);
        assert_eq!(pairs[0].0.index, 1);
        assert_eq!(pairs[1].1.total, Decimal::new(150, 0));
    }

    #[test]
    fn test_arc_path_large_flag() {
        assert!(arc_path(100.0, 90.0, 0.0, PI / 2.0).contains(" 0 0 1 "));
        assert!(arc_path(100.0, 90.0, 0.0, 1.5 * PI).contains(" 0 1 1 "));
    }
}

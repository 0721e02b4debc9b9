//! Chart generation and rendering for the tracker page.
//!
//! This module creates ECharts visualizations of a session's transactions:
//! - **Category-wise Expenses**: pie chart of expense totals by category
//! - **Income vs Expense**: bar chart of the income and expense totals
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered as a container with an inline script that initializes it. The
//! script is inline so that charts are drawn again when htmx swaps in new
//! tracker content.

use std::collections::BTreeMap;

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    datatype::{DataPoint, DataPointItem},
    element::{AxisType, ItemStyle, Label, Tooltip, Trigger},
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    amount::Amount,
    category::{Category, TransactionType},
    html::{HeadElement, INFO_MESSAGE_STYLE},
    tracker::view_model::TrackerView,
};

const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js";

/// The script element that loads ECharts.
pub(super) fn echarts_script() -> HeadElement {
    HeadElement::ScriptLink(ECHARTS_URL)
}

/// A tracker chart with its HTML container ID and ECharts configuration.
pub(super) struct TrackerChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the charts for `view`.
///
/// The expense chart is replaced by a message when there are no expenses.
pub(super) fn charts_view(view: &TrackerView) -> Markup {
    let mut charts = Vec::with_capacity(2);

    if !view.expense_totals_by_category.is_empty() {
        charts.push(TrackerChart {
            id: "expenses-chart",
            options: expenses_by_category_chart(&view.expense_totals_by_category).to_string(),
        });
    }

    charts.push(TrackerChart {
        id: "income-expense-chart",
        options: income_vs_expense_chart(&view.totals_by_type).to_string(),
    });

    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @if view.expense_totals_by_category.is_empty() {
                    div class=(INFO_MESSAGE_STYLE) { "No expenses to show." }
                }

                @for chart in &charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }

            script { (charts_script(&charts)) }
        }
    )
}

/// Sets up the registry of live charts and a single window resize listener
/// the first time a script runs on the page.
const CHARTS_SETUP_SCRIPT: &str = r#"if (!window.trackerCharts) {
    window.trackerCharts = {};
    window.addEventListener('resize', () => {
        Object.values(window.trackerCharts).forEach((chart) => chart.resize());
    });
}"#;

/// Generates JavaScript initialization code for tracker charts.
///
/// The chart previously drawn under the same ID is disposed first, since the
/// containers are replaced after each new transaction.
fn charts_script(charts: &[TrackerChart]) -> PreEscaped<String> {
    let chart_scripts = charts.iter().map(|chart| {
        format!(
            r#"(function() {{
                    const chartDom = document.getElementById("{id}");
                    window.trackerCharts["{id}"]?.dispose();
                    const chart = echarts.init(chartDom);
                    const option = {options};
                    chart.setOption(option);
                    window.trackerCharts["{id}"] = chart;
                }})();"#,
            id = chart.id,
            options = chart.options
        )
    });

    let script_content = std::iter::once(CHARTS_SETUP_SCRIPT.to_owned())
        .chain(chart_scripts)
        .collect::<Vec<_>>()
        .join("\n");

    PreEscaped(script_content)
}

/// Pie chart of expenses by category, labelled with each category's share.
pub(super) fn expenses_by_category_chart(totals: &BTreeMap<Category, Amount>) -> Chart {
    let data = totals
        .iter()
        .map(|(category, amount)| (amount.as_f64(), category.as_str()))
        .collect::<Vec<_>>();

    Chart::new()
        .title(Title::new().text("Category-wise Expenses"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().bottom("0%"))
        .series(
            Pie::new()
                .name("Expenses")
                .radius("65%")
                .label(Label::new().formatter("{b}: {d}%"))
                .data(data),
        )
}

/// Bar chart comparing total income (green) with total expenses (red).
///
/// Only types that have transactions get a bar.
pub(super) fn income_vs_expense_chart(totals: &BTreeMap<TransactionType, Amount>) -> Chart {
    let labels = totals
        .keys()
        .map(|transaction_type| transaction_type.as_str())
        .collect::<Vec<_>>();
    let data = totals
        .iter()
        .map(|(transaction_type, total)| {
            DataPoint::Item(
                DataPointItem::new(total.as_f64())
                    .item_style(ItemStyle::new().color(bar_color(*transaction_type))),
            )
        })
        .collect::<Vec<_>>();

    Chart::new()
        .title(Title::new().text("Income vs Expense"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(Bar::new().name("Total").data(data))
}

fn bar_color(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Income => "green",
        TransactionType::Expense => "red",
    }
}

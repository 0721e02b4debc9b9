//! Table views for the tracker page.

use std::collections::BTreeMap;

use maud::{Markup, html};

use crate::{
    amount::Amount,
    category::Category,
    html::{
        INFO_MESSAGE_STYLE, SECTION_HEADING_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, TABLE_STYLE, format_currency,
    },
    tracker::aggregation::Summary,
    transaction::Transaction,
};

const TABLE_CELL_GREEN_STYLE: &str = "text-green-600 dark:text-green-400";
const TABLE_CELL_RED_STYLE: &str = "text-red-600 dark:text-red-400";

/// Gets the CSS class for coloring amounts (green for positive, red for negative).
fn amount_color_class(amount: Amount) -> &'static str {
    if amount.is_negative() {
        TABLE_CELL_RED_STYLE
    } else {
        TABLE_CELL_GREEN_STYLE
    }
}

/// Renders every transaction in the order it was added.
pub(super) fn transactions_table(transactions: &[Transaction], currency_symbol: &str) -> Markup {
    html! {
        section id="transactions"
        {
            h2 class=(SECTION_HEADING_STYLE) { "All Transactions" }

            @if transactions.is_empty() {
                div class=(INFO_MESSAGE_STYLE) { "No transactions yet. Add some from above!" }
            } @else {
                div class="overflow-x-auto rounded-lg shadow"
                {
                    table class=(TABLE_STYLE)
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            }
                        }

                        tbody
                        {
                            @for transaction in transactions {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    td class=(TABLE_CELL_STYLE) { (transaction.date()) }
                                    td class=(TABLE_CELL_STYLE) { (transaction.transaction_type()) }
                                    td class=(TABLE_CELL_STYLE)
                                    {
                                        (format_currency(transaction.amount(), currency_symbol))
                                    }
                                    td class=(TABLE_CELL_STYLE) { (transaction.category()) }
                                    td class=(TABLE_CELL_STYLE) { (transaction.description()) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the total of each category that has transactions.
pub(super) fn category_summary_table(
    category_totals: &BTreeMap<Category, Amount>,
    currency_symbol: &str,
) -> Markup {
    html! {
        section id="category-summary"
        {
            h2 class=(SECTION_HEADING_STYLE) { "Category Summary" }

            @if category_totals.is_empty() {
                div class=(INFO_MESSAGE_STYLE) { "No transactions yet." }
            } @else {
                table class=(TABLE_STYLE)
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class="px-3 py-3" { "Category" }
                            th scope="col" class="px-3 py-3 text-right" { "Amount" }
                        }
                    }

                    tbody
                    {
                        @for (category, total) in category_totals {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                th scope="row" class="px-3 py-2 font-medium text-gray-900 dark:text-white"
                                {
                                    (category)
                                }
                                td class="px-3 py-2 text-right"
                                {
                                    (format_currency(*total, currency_symbol))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders total income, total expenses and the balance.
pub(super) fn summary_table(summary: &Summary, currency_symbol: &str) -> Markup {
    html! {
        section id="summary"
        {
            h2 class=(SECTION_HEADING_STYLE) { "Summary" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table class=(TABLE_STYLE)
                {
                    tbody
                    {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            th scope="row" class=(TABLE_CELL_STYLE) { "Total Income" }
                            td class={(TABLE_CELL_STYLE) " " (TABLE_CELL_GREEN_STYLE)}
                            {
                                (format_currency(summary.income, currency_symbol))
                            }
                        }

                        tr class=(TABLE_ROW_STYLE)
                        {
                            th scope="row" class=(TABLE_CELL_STYLE) { "Total Expense" }
                            td class={(TABLE_CELL_STYLE) " " (TABLE_CELL_RED_STYLE)}
                            {
                                (format_currency(summary.expense, currency_symbol))
                            }
                        }

                        tr class=(TABLE_ROW_STYLE)
                        {
                            th scope="row" class=(TABLE_CELL_STYLE) { "Balance" }
                            td class={(TABLE_CELL_STYLE) " font-bold " (amount_color_class(summary.balance))}
                            {
                                (format_currency(summary.balance, currency_symbol))
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use scraper::{ElementRef, Html, Selector};
    use time::macros::date;

    use crate::{
        amount::Amount,
        category::{Category, TransactionType},
        tracker::{
            aggregation::Summary,
            tables::{category_summary_table, summary_table, transactions_table},
        },
        transaction::Transaction,
    };

    fn cell_text(row: &ElementRef<'_>) -> Vec<String> {
        row.select(&Selector::parse("th, td").unwrap())
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect()
    }

    fn body_rows(html: &Html) -> Vec<Vec<String>> {
        html.select(&Selector::parse("tbody tr").unwrap())
            .map(|row| cell_text(&row))
            .collect()
    }

    #[test]
    fn transactions_table_lists_transactions_in_order() {
        let transactions = vec![
            Transaction::new(
                date!(2024 - 01 - 02),
                TransactionType::Expense,
                Amount::from_units(200),
                Category::Food,
                "lunch",
            )
            .unwrap(),
            Transaction::new(
                date!(2024 - 01 - 01),
                TransactionType::Income,
                Amount::from_cents(500_050),
                Category::Salary,
                "",
            )
            .unwrap(),
        ];

        let html = Html::parse_fragment(&transactions_table(&transactions, "$").into_string());

        assert_eq!(
            body_rows(&html)[0],
            vec!["2024-01-02", "Expense", "$200.00", "Food", "lunch"]
        );
        assert_eq!(body_rows(&html)[1][0], "2024-01-01");
        assert_eq!(body_rows(&html)[1][3], "Salary");
    }

    #[test]
    fn transactions_table_shows_message_when_empty() {
        let html = Html::parse_fragment(&transactions_table(&[], "$").into_string());

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("No transactions yet. Add some from above!"));
        assert!(html.select(&Selector::parse("table").unwrap()).next().is_none());
    }

    #[test]
    fn category_summary_lists_each_category() {
        let totals = BTreeMap::from([
            (Category::Bonus, Amount::from_units(300)),
            (Category::Food, Amount::from_cents(15_050)),
        ]);

        let html = Html::parse_fragment(&category_summary_table(&totals, "₹").into_string());

        assert_eq!(
            body_rows(&html),
            vec![vec!["Bonus", "₹300.00"], vec!["Food", "₹150.50"]]
        );
    }

    #[test]
    fn category_summary_shows_message_when_empty() {
        let html = Html::parse_fragment(&category_summary_table(&BTreeMap::new(), "₹").into_string());

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("No transactions yet."));
    }

    #[test]
    fn summary_table_shows_totals() {
        let summary = Summary {
            income: Amount::from_units(500),
            expense: Amount::from_units(650),
            balance: Amount::from_units(-150),
        };

        let html = Html::parse_fragment(&summary_table(&summary, "₹").into_string());

        assert_eq!(
            body_rows(&html),
            vec![
                vec!["Total Income", "₹500.00"],
                vec!["Total Expense", "₹650.00"],
                vec!["Balance", "-₹150.00"],
            ]
        );
    }
}

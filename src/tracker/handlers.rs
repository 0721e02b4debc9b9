//! Tracker HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for the tracker page and the JSON summary
//! - The tracker content partial, which is also returned after adding a transaction

use axum::{
    Extension,
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    category::TransactionType,
    config::TrackerConfig,
    html::base,
    session::Session,
    timezone::local_today,
    tracker::{
        charts::{charts_view, echarts_script},
        tables::{category_summary_table, summary_table, transactions_table},
        view_model::TrackerView,
    },
    transaction::{TransactionFormDefaults, transaction_form},
};

/// Display the tracker page for the current session.
pub async fn get_tracker_page(
    State(config): State<TrackerConfig>,
    Extension(session): Extension<Session>,
) -> Result<Response, Error> {
    let today = local_today(&config.local_timezone)?;
    let view = {
        let store = session.lock_store()?;
        TrackerView::from_transactions(store.all())
    };

    let form_defaults = TransactionFormDefaults {
        transaction_type: TransactionType::Income,
        date: today,
        minimum_amount: config.minimum_amount,
    };

    Ok(tracker_page(&view, &form_defaults, &config.currency_symbol).into_response())
}

/// Get the current session's transactions and totals as JSON.
pub async fn get_summary(Extension(session): Extension<Session>) -> Result<Response, Error> {
    let view = {
        let store = session.lock_store()?;
        TrackerView::from_transactions(store.all())
    };

    let json = serde_json::to_string(&view)
        .inspect_err(|error| tracing::error!("could not serialize tracker view: {error}"))
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    Ok(([(CONTENT_TYPE, "application/json")], json).into_response())
}

fn tracker_page(
    view: &TrackerView,
    form_defaults: &TransactionFormDefaults,
    currency_symbol: &str,
) -> Markup {
    let content = html! {
        header class="px-4 py-6 lg:px-8"
        {
            h1 class="text-3xl font-bold text-gray-900 dark:text-white" { "Expense Tracker" }
        }

        (tracker_content(view, form_defaults, currency_symbol))
    };

    base("Expense Tracker", &[echarts_script()], &content)
}

/// Renders everything on the tracker page below the header.
///
/// Submitting the transaction form swaps this element out for a fresh copy.
pub(crate) fn tracker_content(
    view: &TrackerView,
    form_defaults: &TransactionFormDefaults,
    currency_symbol: &str,
) -> Markup {
    html! {
        div
            id="tracker-content"
            class="flex flex-col lg:flex-row gap-6 px-4 pb-8 lg:px-8 text-gray-900 dark:text-white"
        {
            aside class="w-full lg:w-80 shrink-0"
            {
                (category_summary_table(&view.category_totals, currency_symbol))
            }

            main class="flex-1 space-y-8 min-w-0"
            {
                div class="max-w-md"
                {
                    (transaction_form(form_defaults))
                }

                (transactions_table(&view.transactions, currency_symbol))

                @if !view.is_empty() {
                    (summary_table(&view.summary, currency_symbol))

                    (charts_view(view))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::Extension;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        amount::Amount,
        category::{Category, TransactionType},
        session::SessionRegistry,
        test_utils::{assert_content_type, assert_status_ok, assert_valid_html},
        tracker::{
            TrackerView,
            handlers::{get_summary, tracker_content},
        },
        transaction::{Transaction, TransactionFormDefaults},
    };

    fn form_defaults() -> TransactionFormDefaults {
        TransactionFormDefaults {
            transaction_type: TransactionType::Income,
            date: date!(2024 - 01 - 31),
            minimum_amount: Amount::from_units(1),
        }
    }

    fn has_element(html: &Html, selector: &str) -> bool {
        html.select(&Selector::parse(selector).unwrap())
            .next()
            .is_some()
    }

    #[test]
    fn empty_content_has_form_but_no_summary_or_charts() {
        let view = TrackerView::from_transactions(&[]);

        let html = Html::parse_fragment(
            &tracker_content(&view, &form_defaults(), "₹").into_string(),
        );

        assert_valid_html(&html);
        assert!(has_element(&html, "#tracker-content form"));
        assert!(has_element(&html, "#category-summary"));
        assert!(has_element(&html, "#transactions"));
        assert!(!has_element(&html, "#summary"));
        assert!(!has_element(&html, "#charts"));
    }

    #[test]
    fn content_with_transactions_has_summary_and_charts() {
        let transactions = vec![
            Transaction::new(
                date!(2024 - 01 - 02),
                TransactionType::Expense,
                Amount::from_units(200),
                Category::Food,
                "lunch",
            )
            .unwrap(),
        ];
        let view = TrackerView::from_transactions(&transactions);

        let html = Html::parse_fragment(
            &tracker_content(&view, &form_defaults(), "₹").into_string(),
        );

        assert_valid_html(&html);
        assert!(has_element(&html, "#summary"));
        assert!(has_element(&html, "#expenses-chart"));
        assert!(has_element(&html, "#income-expense-chart"));
    }

    #[tokio::test]
    async fn summary_is_json() {
        let registry = SessionRegistry::new(Duration::from_secs(60));
        let (session, _) = registry.get_or_create(None).unwrap();
        session.lock_store().unwrap().append(
            Transaction::new(
                date!(2024 - 01 - 01),
                TransactionType::Income,
                Amount::from_units(5000),
                Category::Salary,
                "",
            )
            .unwrap(),
        );

        let response = get_summary(Extension(session)).await.unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "application/json");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["summary"]["income"], 5000.0);
        assert_eq!(json["summary"]["balance"], 5000.0);
    }
}

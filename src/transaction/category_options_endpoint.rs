//! Defines the endpoint that lists the categories of a transaction type.

use axum::extract::Query;
use maud::Markup;
use serde::Deserialize;

use crate::{category::TransactionType, transaction::category_options};

/// The query parameters for [get_category_options].
#[derive(Debug, Deserialize)]
pub struct CategoryOptionsQuery {
    /// The transaction type to list categories for.
    pub type_: TransactionType,
}

/// A route handler that returns the `<option>` elements for the category
/// select, used when the transaction type in the form changes.
pub async fn get_category_options(Query(query): Query<CategoryOptionsQuery>) -> Markup {
    category_options(query.type_)
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{
        category::{Category, TransactionType, allowed_categories},
        endpoints,
        transaction::get_category_options,
    };

    fn get_test_server() -> TestServer {
        let app = Router::new().route(endpoints::CATEGORY_OPTIONS, get(get_category_options));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn lists_income_categories() {
        let server = get_test_server();

        let response = server
            .get(endpoints::CATEGORY_OPTIONS)
            .add_query_param("type_", "income")
            .await;

        response.assert_status_ok();
        let html = Html::parse_fragment(&response.text());
        let values = html
            .select(&Selector::parse("option").unwrap())
            .map(|option| option.value().attr("value").unwrap_or_default().to_owned())
            .collect::<Vec<_>>();
        let want = allowed_categories(TransactionType::Income)
            .iter()
            .map(|category| category.id().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(values, want);
    }

    #[tokio::test]
    async fn expense_options_do_not_include_income_categories() {
        let server = get_test_server();

        let response = server
            .get(endpoints::CATEGORY_OPTIONS)
            .add_query_param("type_", "expense")
            .await;

        response.assert_status_ok();
        let text = response.text();
        assert!(text.contains(Category::Food.id()));
        assert!(!text.contains(Category::Salary.id()));
    }

    #[tokio::test]
    async fn rejects_unknown_type() {
        let server = get_test_server();

        let response = server
            .get(endpoints::CATEGORY_OPTIONS)
            .add_query_param("type_", "transfer")
            .expect_failure()
            .await;

        response.assert_status_bad_request();
    }
}

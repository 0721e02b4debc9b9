//! The API endpoints URIs.

/// The expense tracker page.
pub const ROOT: &str = "/";

/// The route to add a transaction to the current session.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for the category options of a transaction type.
pub const CATEGORY_OPTIONS: &str = "/api/categories";
/// The route for the current session's totals as JSON.
pub const SUMMARY_API: &str = "/api/summary";

#[cfg(test)]
mod endpoints_tests {
    use super::*;

    #[test]
    fn api_routes_are_under_api_prefix() {
        for endpoint in [TRANSACTIONS_API, CATEGORY_OPTIONS, SUMMARY_API] {
            assert!(endpoint.starts_with("/api/"), "got {endpoint}");
        }
    }
}

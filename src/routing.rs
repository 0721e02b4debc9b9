//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    session::session_middleware,
    tracker::{get_summary, get_tracker_page},
    transaction::{create_transaction_endpoint, get_category_options},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let session_routes = Router::new()
        .route(endpoints::ROOT, get(get_tracker_page))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(endpoints::SUMMARY_API, get(get_summary))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .route(endpoints::CATEGORY_OPTIONS, get(get_category_options))
        .merge(session_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

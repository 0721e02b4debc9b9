//! Defines the endpoint for adding a transaction to the current session.

use axum::{
    Extension,
    extract::State,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that handles repeated and empty fields
// that axum::Form rejects.
use axum_extra::extract::Form;
use maud::html;

use crate::{
    Error,
    alert::Alert,
    config::TrackerConfig,
    session::Session,
    timezone::local_today,
    tracker::{TrackerView, tracker_content},
    transaction::{SubmissionPolicy, TransactionFormDefaults, TransactionSubmission, submit},
};

/// A route handler for adding a new transaction.
///
/// On success, responds with the refreshed tracker content, including a
/// cleared form, and an out-of-band success alert. Invalid submissions get a
/// 422 response with an error alert and leave the store unchanged.
pub async fn create_transaction_endpoint(
    State(config): State<TrackerConfig>,
    Extension(session): Extension<Session>,
    Form(submission): Form<TransactionSubmission>,
) -> Response {
    let today = match local_today(&config.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let policy = SubmissionPolicy {
        minimum_amount: config.minimum_amount,
        today,
    };

    let mut store = match session.lock_store() {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    let transaction = match submit(&mut store, &submission, &policy) {
        Ok(transaction) => transaction,
        Err(error) => {
            tracing::warn!("Rejected transaction for session {}: {error}", session.id());
            return Error::Validation(error).into_alert_response();
        }
    };

    tracing::info!(
        "Added {} transaction of {} ({}) to session {}",
        transaction.transaction_type(),
        transaction.amount(),
        transaction.category(),
        session.id()
    );

    let view = TrackerView::from_transactions(store.all());
    let form_defaults = TransactionFormDefaults {
        transaction_type: submission.transaction_type,
        date: today,
        minimum_amount: config.minimum_amount,
    };

    html! {
        (tracker_content(&view, &form_defaults, &config.currency_symbol))

        (Alert::Success {
            message: "Transaction added".to_owned(),
            details: String::new(),
        }
        .into_oob_html())
    }
    .into_response()
}

//! An expense tracker web app for recording income and expenses and seeing
//! where the money goes.
//!
//! This library provides a server that directly serves HTML pages. Each
//! browser session gets its own in-memory list of transactions, which is
//! summarised by category and type in tables and charts.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod amount;
mod app_state;
mod category;
mod config;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;
mod session;
mod timezone;
mod tracker;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use amount::{Amount, ParseAmountError};
pub use app_state::{AppState, create_cookie_key};
pub use category::{Category, TransactionType, allowed_categories};
pub use config::{
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_MAX_SESSIONS, DEFAULT_MINIMUM_AMOUNT,
    DEFAULT_SESSION_IDLE_TIMEOUT, DEFAULT_TIMEZONE, TrackerConfig,
};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use session::{Session, SessionId, SessionRegistry};
pub use tracker::{
    Summary, TrackerView, expenses, of_type, summary, total_by_category, total_by_type,
};
pub use transaction::{
    Field, SubmissionPolicy, Transaction, TransactionStore, TransactionSubmission,
    ValidationError, submit,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

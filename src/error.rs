//! Defines the app level error type and conversions to rendered HTML pages and alerts.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxReswap, SwapOption};

use crate::{
    alert::Alert, amount::Amount, internal_server_error::InternalServerError,
    transaction::ValidationError,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A submitted transaction failed validation.
    ///
    /// The submission was rejected and the transaction store is unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The lock on a session's transaction store was poisoned by a panic in
    /// another request.
    #[error("could not acquire the session lock")]
    SessionLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The configured minimum transaction amount is not greater than zero or
    /// is above the maximum transaction amount.
    #[error("the minimum amount must be greater than zero and at most {max}, got {0}", max = Amount::MAXIMUM)]
    InvalidMinimumAmount(Amount),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Validation(error) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                validation_alert(error).into_html(),
            )
                .into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to a valid, canonical timezone string"
                ),
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an alert fragment for htmx to swap into the
    /// page's alert container.
    ///
    /// The response overrides the requesting element's swap style with
    /// `innerHTML` so that the alert container itself is kept.
    pub(crate) fn into_alert_response(self) -> Response {
        let (status, alert) = match self {
            Error::Validation(error) => (StatusCode::UNPROCESSABLE_ENTITY, validation_alert(error)),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                        ensure the timezone has been set to a valid, canonical timezone string"
                    ),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details: "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                    },
                )
            }
        };

        (status, HxReswap(SwapOption::InnerHtml), alert.into_html()).into_response()
    }
}

fn validation_alert(error: ValidationError) -> Alert {
    Alert::Error {
        message: format!("Invalid {}", error.field),
        details: format!("{}. Fix the {} and try again.", error.reason, error.field),
    }
}

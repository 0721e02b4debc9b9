//! Settings that control how the tracker validates and displays transactions.

use std::time::Duration;

use axum::extract::FromRef;

use crate::{AppState, Error, amount::Amount, timezone::get_local_offset};

/// The default smallest amount accepted for a transaction.
pub const DEFAULT_MINIMUM_AMOUNT: Amount = Amount::from_units(1);

/// The default currency symbol shown in front of amounts.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// The default timezone used to work out today's date.
pub const DEFAULT_TIMEZONE: &str = "Etc/UTC";

/// How long a session may go unused before its transactions are discarded.
pub const DEFAULT_SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// The default limit on the number of sessions held at once.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// The configuration of the expense tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// The smallest amount accepted for a transaction.
    pub minimum_amount: Amount,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    /// The symbol shown in front of amounts, e.g. "₹" or "$".
    pub currency_symbol: String,
    /// How long a session may go unused before it is dropped.
    pub session_idle_timeout: Duration,
    /// The most sessions held at once, the least recently used is dropped
    /// to make room for a new one.
    pub max_sessions: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            minimum_amount: DEFAULT_MINIMUM_AMOUNT,
            local_timezone: DEFAULT_TIMEZONE.to_owned(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            session_idle_timeout: DEFAULT_SESSION_IDLE_TIMEOUT,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl TrackerConfig {
    /// Check that the configuration can be used to run the tracker.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::InvalidMinimumAmount] if the minimum amount is not greater than zero
    ///   or is greater than [Amount::MAXIMUM],
    /// - or [Error::InvalidTimezoneError] if the timezone is not a canonical timezone name.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.minimum_amount.is_positive() || self.minimum_amount > Amount::MAXIMUM {
            return Err(Error::InvalidMinimumAmount(self.minimum_amount));
        }

        if get_local_offset(&self.local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(self.local_timezone.clone()));
        }

        Ok(())
    }
}

impl FromRef<AppState> for TrackerConfig {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

use crate::{Error, config::TrackerConfig, session::SessionRegistry};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,

    /// The sessions and the transaction store owned by each.
    pub sessions: SessionRegistry,

    /// The settings that control validation and display of transactions.
    pub config: TrackerConfig,
}

impl AppState {
    /// Create a new [AppState] with no sessions.
    ///
    /// If `cookie_secret` is `None` a random key is generated, which means
    /// session cookies stop working when the server restarts. Since the
    /// transactions are only held in memory, they are lost on restart anyway.
    ///
    /// # Errors
    /// Returns an error if `config` is invalid, see [TrackerConfig::validate].
    pub fn new(cookie_secret: Option<&str>, config: TrackerConfig) -> Result<Self, Error> {
        config.validate()?;

        let cookie_key = match cookie_secret {
            Some(secret) => create_cookie_key(secret),
            None => Key::generate(),
        };

        Ok(Self {
            cookie_key,
            sessions: SessionRegistry::new(config.session_idle_timeout)
                .with_max_sessions(config.max_sessions),
            config,
        })
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Create a signing key for cookies from a `secret`s string.
pub fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}

#[cfg(test)]
mod tests {
    use crate::{AppState, Error, config::TrackerConfig};

    #[test]
    fn new_state_has_no_sessions() {
        let state = AppState::new(Some("foobar"), TrackerConfig::default()).unwrap();

        assert!(state.sessions.is_empty());
    }

    #[test]
    fn same_secret_gives_same_key() {
        let first = AppState::new(Some("foobar"), TrackerConfig::default()).unwrap();
        let second = AppState::new(Some("foobar"), TrackerConfig::default()).unwrap();

        assert_eq!(first.cookie_key.master(), second.cookie_key.master());
    }

    #[test]
    fn rejects_invalid_config() {
        let config = TrackerConfig {
            local_timezone: "Not/AZone".to_owned(),
            ..Default::default()
        };

        let result = AppState::new(None, config);

        assert_eq!(
            result.err(),
            Some(Error::InvalidTimezoneError("Not/AZone".to_owned()))
        );
    }
}

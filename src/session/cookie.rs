//! Reads and writes the cookie that identifies a browser session.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};

use crate::session::SessionId;

/// The name of the cookie holding the session ID.
pub(crate) const COOKIE_SESSION_ID: &str = "session_id";

/// Add the session cookie for `session_id` to the cookie jar.
///
/// The cookie has no expiry so the browser drops it when it closes, and the
/// server drops the session itself once it has been idle for too long.
pub(crate) fn set_session_cookie(jar: PrivateCookieJar, session_id: SessionId) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_SESSION_ID, session_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict),
    )
}

/// Get the session ID from the cookie jar.
///
/// Returns `None` if the cookie is missing or does not hold a valid session ID.
pub(crate) fn get_session_id_from_cookie(jar: &PrivateCookieJar) -> Option<SessionId> {
    let cookie = jar.get(COOKIE_SESSION_ID)?;

    cookie
        .value_trimmed()
        .parse()
        .inspect_err(|error| tracing::warn!("Invalid session cookie: {error}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::{
        PrivateCookieJar,
        cookie::{Cookie, Key, SameSite},
    };

    use crate::session::{
        SessionId,
        cookie::{COOKIE_SESSION_ID, get_session_id_from_cookie, set_session_cookie},
    };

    fn get_jar() -> PrivateCookieJar {
        PrivateCookieJar::new(Key::generate())
    }

    #[test]
    fn set_then_get_session_id() {
        let session_id = SessionId::new_random();

        let jar = set_session_cookie(get_jar(), session_id);

        assert_eq!(get_session_id_from_cookie(&jar), Some(session_id));
    }

    #[test]
    fn session_cookie_is_locked_down() {
        let jar = set_session_cookie(get_jar(), SessionId::new_random());

        let cookie = jar.get(COOKIE_SESSION_ID).unwrap();

        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }

    #[test]
    fn missing_cookie_has_no_session_id() {
        assert_eq!(get_session_id_from_cookie(&get_jar()), None);
    }

    #[test]
    fn garbage_cookie_has_no_session_id() {
        let jar = get_jar().add(Cookie::new(COOKIE_SESSION_ID, "not-a-session"));

        assert_eq!(get_session_id_from_cookie(&jar), None);
    }
}

//! Session middleware that attaches each request to its own transaction store.

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::header::SET_COOKIE,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};

use crate::{
    AppState,
    session::{
        SessionRegistry,
        cookie::{get_session_id_from_cookie, set_session_cookie},
    },
};

/// The state needed for the session middleware.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The sessions and their transaction stores.
    pub sessions: SessionRegistry,
}

impl FromRef<AppState> for SessionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            sessions: state.sessions.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<SessionState> for Key {
    fn from_ref(state: &SessionState) -> Self {
        state.cookie_key.clone()
    }
}

/// Middleware function that finds the session for the request's session
/// cookie, creating a new session and setting the cookie if there is none.
///
/// **Note**: Route handlers can use the function argument `Extension(session): Extension<Session>` to receive the session.
pub async fn session_middleware(
    State(state): State<SessionState>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();
    let Ok(jar) = PrivateCookieJar::<Key>::from_request_parts(&mut parts, &state).await;

    let session_id = get_session_id_from_cookie(&jar);
    let (session, is_new) = match state.sessions.get_or_create(session_id) {
        Ok(result) => result,
        Err(error) => return error.into_response(),
    };
    let session_id = session.id();

    parts.extensions.insert(session);
    let request = Request::from_parts(parts, body);
    let response = next.run(request).await;

    if !is_new {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let jar = set_session_cookie(jar, session_id);
    for (key, val) in jar.into_response().headers().iter() {
        if key != SET_COOKIE {
            continue;
        }

        parts.headers.append(key, val.to_owned());
    }

    Response::from_parts(parts, body)
}

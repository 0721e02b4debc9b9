//! Browser sessions, each owning an isolated in-memory transaction store.

mod cookie;
mod middleware;
mod registry;

#[cfg(test)]
pub(crate) use cookie::COOKIE_SESSION_ID;
pub use middleware::{SessionState, session_middleware};
pub use registry::{Session, SessionId, SessionRegistry};

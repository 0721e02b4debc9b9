//! The registry that gives every session its own transaction store.

use std::{
    collections::HashMap,
    fmt::Display,
    str::FromStr,
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};

use uuid::Uuid;

use crate::{Error, config::DEFAULT_MAX_SESSIONS, transaction::TransactionStore};

/// Uniquely identifies a browser session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(text).map(Self)
    }
}

/// A handle to the transaction store of one session.
///
/// Route handlers receive this handle from the session middleware with
/// `Extension(session): Extension<Session>`.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    store: Arc<Mutex<TransactionStore>>,
}

impl Session {
    /// The ID of the session.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Lock the session's transaction store.
    ///
    /// Hold the guard for the whole of a read-validate-append-render step so
    /// that concurrent requests from the same session run one after another.
    ///
    /// # Errors
    /// Returns [Error::SessionLockError] if the lock was poisoned.
    pub fn lock_store(&self) -> Result<MutexGuard<'_, TransactionStore>, Error> {
        self.store
            .lock()
            .inspect_err(|error| {
                tracing::error!("could not acquire lock for session {}: {error}", self.id)
            })
            .map_err(|_| Error::SessionLockError)
    }
}

#[derive(Debug)]
struct SessionEntry {
    store: Arc<Mutex<TransactionStore>>,
    last_seen: Instant,
}

/// Maps session IDs to the transaction store owned by each session.
///
/// Stores are never shared between sessions. Sessions that have not been
/// used for longer than the idle timeout are dropped whenever a new session
/// is created. When the registry is full, creating a session drops the least
/// recently used one.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<SessionId, SessionEntry>>>,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl SessionRegistry {
    /// Create an empty registry that drops sessions after `idle_timeout`
    /// without use and holds at most [DEFAULT_MAX_SESSIONS] sessions.
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            idle_timeout,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }

    /// Set the most sessions the registry holds at once, at least one.
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions.max(1);
        self
    }

    /// Get the session for `id`, or create a new empty session if `id` is
    /// `None`, unknown or has expired.
    ///
    /// Returns the session and whether it was newly created.
    ///
    /// # Errors
    /// Returns [Error::SessionLockError] if the registry lock was poisoned.
    pub fn get_or_create(&self, id: Option<SessionId>) -> Result<(Session, bool), Error> {
        self.get_or_create_at(id, Instant::now())
    }

    fn get_or_create_at(
        &self,
        id: Option<SessionId>,
        now: Instant,
    ) -> Result<(Session, bool), Error> {
        let mut sessions = self
            .sessions
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire session registry lock: {error}"))
            .map_err(|_| Error::SessionLockError)?;

        if let Some(id) = id
            && let Some(entry) = sessions.get_mut(&id)
            && now.saturating_duration_since(entry.last_seen) <= self.idle_timeout
        {
            entry.last_seen = now;

            return Ok((
                Session {
                    id,
                    store: entry.store.clone(),
                },
                false,
            ));
        }

        let idle_timeout = self.idle_timeout;
        let count_before = sessions.len();
        sessions.retain(|_, entry| now.saturating_duration_since(entry.last_seen) <= idle_timeout);
        let expired_count = count_before - sessions.len();
        if expired_count > 0 {
            tracing::info!("Dropped {expired_count} idle session(s)");
        }

        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id)
            else {
                break;
            };

            sessions.remove(&oldest);
            tracing::info!("Session limit reached, dropped least recently used session {oldest}");
        }

        let id = SessionId::new_random();
        let store = Arc::new(Mutex::new(TransactionStore::new()));
        sessions.insert(
            id,
            SessionEntry {
                store: store.clone(),
                last_seen: now,
            },
        );
        tracing::info!("Created session {id}");

        Ok((Session { id, store }, true))
    }

    /// The number of sessions currently held, including idle ones that have
    /// not been dropped yet.
    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .map(|sessions| sessions.len())
            .unwrap_or_default()
    }

    /// Whether the registry holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

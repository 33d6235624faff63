//! Durable persistence of the authenticated session.
//!
//! The persisted record is one JSON object `{token, principal}` under a
//! fixed path, read at startup, written at login, cleared at logout. A
//! corrupt or unreadable record is "no session", never a fatal error.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use atlas_shared::Principal;

/// The session record as persisted to durable storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    /// Bearer token.
    pub token: String,
    /// The principal's fields.
    pub principal: Principal,
}

/// Durable storage for the session record.
///
/// Implementations never propagate errors: a failed load is `None`, a
/// failed save is logged and dropped, so a missing storage environment
/// degrades to "no session".
pub trait SessionPersistence: Send + Sync {
    /// Reads the persisted session, if one exists and parses.
    fn load(&self) -> Option<PersistedSession>;

    /// Writes the session record.
    fn save(&self, session: &PersistedSession);

    /// Removes the persisted record.
    fn clear(&self);
}

/// File-backed persistence, the durable-storage equivalent of the
/// browser's local storage.
#[derive(Debug)]
pub struct FilePersistence {
    path: PathBuf,
}

impl FilePersistence {
    /// Creates persistence writing to the given file path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionPersistence for FilePersistence {
    fn load(&self) -> Option<PersistedSession> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "could not read session file");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "corrupt session record ignored");
                None
            }
        }
    }

    fn save(&self, session: &PersistedSession) {
        if let Some(parent) = self.path.parent()
            && let Err(err) = std::fs::create_dir_all(parent)
        {
            warn!(path = %self.path.display(), error = %err, "could not create session directory");
            return;
        }
        match serde_json::to_string_pretty(session) {
            Ok(raw) => {
                if let Err(err) = std::fs::write(&self.path, raw) {
                    warn!(path = %self.path.display(), error = %err, "could not persist session");
                } else {
                    debug!(path = %self.path.display(), "session persisted");
                }
            }
            Err(err) => warn!(error = %err, "could not serialize session"),
        }
    }

    fn clear(&self) {
        if let Err(err) = std::fs::remove_file(&self.path)
            && err.kind() != std::io::ErrorKind::NotFound
        {
            warn!(path = %self.path.display(), error = %err, "could not clear session file");
        }
    }
}

/// In-memory persistence for tests and short-lived sessions.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    inner: Mutex<Option<PersistedSession>>,
}

impl SessionPersistence for MemoryPersistence {
    fn load(&self) -> Option<PersistedSession> {
        self.inner.lock().ok()?.clone()
    }

    fn save(&self, session: &PersistedSession) {
        if let Ok(mut inner) = self.inner.lock() {
            *inner = Some(session.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            *inner = None;
        }
    }
}

/// Persistence for environments without durable storage, such as a
/// non-interactive render pass: nothing is ever written or restored.
#[derive(Debug, Default)]
pub struct NoPersistence;

impl SessionPersistence for NoPersistence {
    fn load(&self) -> Option<PersistedSession> {
        None
    }

    fn save(&self, _session: &PersistedSession) {}

    fn clear(&self) {}
}

//! Session store, the single source of truth for "is a staff member signed in".
//!
//! Holds one serialized [`Session`] under a fixed key in durable key-value
//! storage. The store never expires a session on its own: only the server can
//! reject a token, and that surfaces as an ordinary request failure.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::Session;

pub mod storage;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};

/// Storage key under which the serialized session lives.
pub const SESSION_KEY: &str = "ai_staff_auth";

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Returns the stored session, or `None` when there is none.
    ///
    /// A stored value that is not a complete session is deleted before
    /// returning `None`. Storage failures are logged and also read as `None`.
    pub fn load(&self) -> Option<Session> {
        let raw = match self.storage.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read session from storage: {e}");
                return None;
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Discarding corrupt session entry: {e}");
                if let Err(e) = self.storage.remove(SESSION_KEY) {
                    warn!("Failed to remove corrupt session entry: {e}");
                }
                None
            }
        }
    }

    /// Replaces any stored session with `session` in a single write.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let raw = serde_json::to_string(session)?;
        self.storage.set(SESSION_KEY, &raw)?;
        debug!("Session saved for user id={}", session.user.id);
        Ok(())
    }

    /// Deletes the stored session. Clearing an empty store is a no-op.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(SESSION_KEY)?;
        debug!("Session cleared");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.load().is_some_and(|s| !s.token.is_empty())
    }

    /// The bearer token to attach to authenticated requests, if any.
    pub fn token(&self) -> Option<String> {
        self.load()
            .map(|s| s.token)
            .filter(|token| !token.is_empty())
    }
}

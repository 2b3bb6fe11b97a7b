//! Credential-session store.
//!
//! DESIGN
//! ======
//! The session is an explicit object handed to the API client rather than an
//! ambient global, so "who may read or clear the token" is visible at every
//! construction site. Persistence is delegated to a [`SessionBackend`] so the
//! browser can use `localStorage`, the CLI a file, and tests plain memory.
//!
//! The token is opaque: nothing here judges validity. Only the backend can,
//! and it signals rejection with a 401 that the API client turns into
//! [`SessionStore::clear`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Storage key used by persistent backends.
pub const SESSION_STORAGE_KEY: &str = "supply_dash_session";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session token is empty")]
    EmptyToken,
    #[error("session storage failed: {0}")]
    Storage(String),
}

/// An opaque bearer credential issued by the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct Session(String);

impl Session {
    /// Wrap a token, rejecting blank ones.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] when `token` is blank.
    pub fn new(token: impl Into<String>) -> Result<Self, SessionError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Ok(Self(token))
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Session").field(&"<redacted>").finish()
    }
}

/// Where a session survives between page loads or process runs.
pub trait SessionBackend: Send + Sync {
    /// Read a previously saved token, if any.
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the medium rejects the write.
    fn save(&self, token: &str) -> Result<(), SessionError>;

    /// Forget the saved token. Removing an absent token is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the medium rejects the removal.
    fn remove(&self) -> Result<(), SessionError>;
}

/// Backend that keeps nothing beyond the process lifetime.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: Mutex<Option<String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: Mutex::new(Some(token.to_owned())) }
    }
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        Ok(())
    }

    fn remove(&self) -> Result<(), SessionError> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
        Ok(())
    }
}

/// Owner of the current session. One per application.
pub struct SessionStore {
    backend: Box<dyn SessionBackend>,
    current: Mutex<Option<Session>>,
}

impl SessionStore {
    /// Create a store, restoring any token the backend already holds.
    #[must_use]
    pub fn new(backend: impl SessionBackend + 'static) -> Self {
        let restored = backend.load().and_then(|token| Session::new(token).ok());
        if restored.is_some() {
            tracing::debug!("restored persisted session");
        }
        Self { backend: Box::new(backend), current: Mutex::new(restored) }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    /// Store a freshly issued token and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] for a blank token and
    /// [`SessionError::Storage`] when persisting fails; the in-memory session
    /// is left unchanged in both cases.
    pub fn set(&self, token: &str) -> Result<Session, SessionError> {
        let session = Session::new(token)?;
        self.backend.save(session.token())?;
        *self.lock() = Some(session.clone());
        tracing::debug!("session stored");
        Ok(session)
    }

    /// Drop the session. Safe to call any number of times.
    ///
    /// A backend that fails to forget the token is logged and otherwise
    /// ignored: the in-memory session is always cleared.
    pub fn clear(&self) {
        let had_session = self.lock().take().is_some();
        if let Err(err) = self.backend.remove() {
            tracing::warn!(error = %err, "failed to remove persisted session");
        }
        if had_session {
            tracing::debug!("session cleared");
        }
    }

    #[must_use]
    pub fn get(&self) -> Option<Session> {
        self.lock().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Session>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

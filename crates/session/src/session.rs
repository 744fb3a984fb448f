//! Session & access model.
//!
//! `Session` owns the current principal and the persisted copy of it. It is
//! created by the top-level shell and handed to consumers by reference; there
//! is no ambient global.
//!
//! ```text
//! Anonymous ──authenticate(ok)──▶ Authenticated(p)
//! Authenticated(p) ──logout──▶ Anonymous
//! Authenticated(system_admin) ──switch_role(ok)──▶ Authenticated(p')
//! any failed operation ──▶ unchanged
//! ```
//!
//! Every mutation runs under one lock that covers both the in-memory state and
//! the storage write, so the persisted record always matches what a
//! concurrent reader of this `Session` observes.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::{debug, info, warn};

use schoolhub_auth::{
    AuthzError, Capability, NavigationItem, Principal, PrincipalRegistry, Role, authorize_route,
    can, navigation_for, require_capability,
};

use crate::config::SessionConfig;
use crate::error::{SessionError, StorageError};
use crate::events::{EventLog, SessionEvent, SessionEventKind};
use crate::storage::SessionStorage;

/// Observable session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Anonymous,
    Authenticated(Principal),
}

struct SessionState {
    current: Option<Principal>,
    log: EventLog,
}

impl SessionState {
    fn record(&mut self, kind: SessionEventKind, principal: &Principal) {
        self.log.push(SessionEvent::new(kind, principal, Utc::now()));
    }
}

/// Process-wide session, backed by client-local storage.
pub struct Session<S> {
    registry: PrincipalRegistry,
    storage: S,
    config: SessionConfig,
    state: Mutex<SessionState>,
}

impl<S: SessionStorage> Session<S> {
    /// Create an empty (anonymous) session. Call
    /// [`restore_session`](Self::restore_session) to pick up a persisted one.
    pub fn new(registry: PrincipalRegistry, storage: S, config: SessionConfig) -> Self {
        let log = EventLog::new(config.history_limit);
        Self {
            registry,
            storage,
            config,
            state: Mutex::new(SessionState { current: None, log }),
        }
    }

    pub fn registry(&self) -> &PrincipalRegistry {
        &self.registry
    }

    /// Sign in by email and the shared secret.
    ///
    /// Async so a real credential check can replace the registry lookup
    /// without changing callers. On failure the session is left untouched.
    pub async fn authenticate(&self, email: &str, secret: &str) -> Result<Principal, SessionError> {
        let principal = self
            .registry
            .find_by_email(email)
            .filter(|_| secret == self.config.shared_secret)
            .cloned();

        let Some(principal) = principal else {
            warn!(email, "authentication failed");
            return Err(SessionError::Authentication);
        };

        self.commit_login(&principal)?;
        info!(principal_id = %principal.id(), role = %principal.role(), "signed in");
        Ok(principal)
    }

    fn commit_login(&self, principal: &Principal) -> Result<(), StorageError> {
        let mut state = self.lock();
        self.persist(principal)?;
        state.current = Some(principal.clone());
        state.record(SessionEventKind::LoggedIn, principal);
        Ok(())
    }

    /// Load the persisted session into memory (startup init).
    ///
    /// A missing, unreadable or invalid record yields an anonymous session.
    /// Invalid records are also deleted so they are not re-read next start.
    pub fn restore_session(&self) -> Option<Principal> {
        let mut state = self.lock();

        let raw = match self.storage.get(&self.config.storage_key) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "session storage unreadable; starting anonymous");
                state.current = None;
                return None;
            }
        };

        let restored = raw.and_then(|raw| match serde_json::from_str::<Principal>(&raw) {
            Ok(principal) => Some(principal),
            Err(err) => {
                warn!(error = %err, "discarding corrupt session record");
                if let Err(err) = self.storage.remove(&self.config.storage_key) {
                    warn!(error = %err, "failed to remove corrupt session record");
                }
                None
            }
        });

        match &restored {
            Some(principal) => {
                state.record(SessionEventKind::Restored, principal);
                info!(principal_id = %principal.id(), role = %principal.role(), "session restored");
            }
            None => debug!("no persisted session"),
        }

        state.current = restored.clone();
        restored
    }

    pub fn current_principal(&self) -> Option<Principal> {
        self.lock().current.clone()
    }

    pub fn status(&self) -> SessionStatus {
        match self.current_principal() {
            Some(p) => SessionStatus::Authenticated(p),
            None => SessionStatus::Anonymous,
        }
    }

    /// Sign out and erase the persisted record (teardown). Idempotent.
    ///
    /// If erasing the record fails the principal stays signed in and the
    /// storage error is returned; memory never drops a session that a restart
    /// would bring back.
    pub fn logout(&self) -> Result<(), SessionError> {
        let mut state = self.lock();

        if let Err(err) = self.storage.remove(&self.config.storage_key) {
            warn!(error = %err, "failed to erase session record; still signed in");
            return Err(err.into());
        }

        if let Some(principal) = state.current.take() {
            state.record(SessionEventKind::LoggedOut, &principal);
            info!(principal_id = %principal.id(), "signed out");
        }
        Ok(())
    }

    /// Replace the session with the registry's principal for `target`.
    ///
    /// Requires [`Capability::ImpersonateRole`] on the current principal.
    pub fn switch_role(&self, target: Role) -> Result<Principal, SessionError> {
        let mut state = self.lock();

        let Some(current) = state.current.as_ref() else {
            warn!(requested = %target, "role switch without a session");
            return Err(AuthzError::Unauthenticated.into());
        };

        if let Err(err) = require_capability(current, Capability::ImpersonateRole) {
            warn!(principal_id = %current.id(), role = %current.role(), requested = %target, "role switch denied");
            return Err(err.into());
        }

        let Some(next) = self.registry.find_by_role(target).cloned() else {
            warn!(requested = %target, "no registered principal for role");
            return Err(SessionError::NoPrincipalForRole(target));
        };

        let from = current.role();
        self.persist(&next)?;
        state.current = Some(next.clone());
        state.record(SessionEventKind::RoleSwitched { from }, &next);

        info!(from = %from, to = %target, principal_id = %next.id(), "role switched");
        Ok(next)
    }

    /// Navigation menu of the current principal (empty when anonymous).
    pub fn navigation(&self) -> &'static [NavigationItem] {
        match self.lock().current.as_ref() {
            Some(p) => navigation_for(p.role()),
            None => &[],
        }
    }

    /// Page-level check for the current principal.
    pub fn authorize_route(&self, path: &str) -> Result<(), AuthzError> {
        let state = self.lock();
        authorize_route(state.current.as_ref(), path)
    }

    /// Capability check for the current principal; false when anonymous.
    pub fn can(&self, capability: Capability) -> bool {
        self.lock().current.as_ref().is_some_and(|p| can(p, capability))
    }

    /// Successful transitions, oldest first.
    pub fn history(&self) -> Vec<SessionEvent> {
        self.lock().log.snapshot()
    }

    fn persist(&self, principal: &Principal) -> Result<(), StorageError> {
        let payload = serde_json::to_string(principal)?;
        self.storage.set(&self.config.storage_key, &payload)
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S> core::fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("registry_size", &self.registry.len())
            .finish_non_exhaustive()
    }
}

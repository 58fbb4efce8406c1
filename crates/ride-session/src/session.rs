use crate::error::Result;
use crate::storage::KeyValueStore;

use ride_core::{Identity, SignupProfile, UserRole};

use tracing::{debug, info, warn};

/// Durable key under which the current identity is persisted.
pub const SESSION_STORAGE_KEY: &str = "rideshare_user";

/// Process-wide holder of zero-or-one active [`Identity`].
///
/// The session is authenticated exactly when an identity is held; the
/// flag is derived, never stored, so the two can't drift apart. Durable
/// storage is written before in-memory state on every mutation, so a
/// crash between the two leaves at most a stale durable record that the
/// next [`restore`](Self::restore) re-establishes.
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    current: Option<Identity>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Creates an empty (unauthenticated) session over `storage`.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: None,
        }
    }

    /// Attempts to re-establish a previously persisted identity.
    ///
    /// Runs once at application start. A missing record, a storage read
    /// failure, or an undecodable record all leave the session empty;
    /// none of them is surfaced to the caller, because to the user they
    /// are indistinguishable from "no prior session".
    pub fn restore(&mut self) -> Option<&Identity> {
        let raw = match self.storage.get(SESSION_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no persisted session (first launch)");
                return None;
            }
            Err(e) => {
                warn!("session restore failed, starting empty: {e}");
                return None;
            }
        };

        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => {
                info!(
                    "restored session for {} ({})",
                    identity.id,
                    identity.role().as_str()
                );
                Some(self.current.insert(identity))
            }
            Err(e) => {
                warn!("persisted session record is corrupted, starting empty: {e}");
                None
            }
        }
    }

    /// Installs a brand-new identity, replacing any existing one.
    ///
    /// The identity is persisted before it becomes the in-memory session,
    /// so a failed write leaves the session unauthenticated rather than
    /// holding an identity with no durable backing.
    pub fn signup(&mut self, profile: SignupProfile) -> Result<&Identity> {
        let identity = Identity::new(profile);
        let raw = serde_json::to_string(&identity)?;
        self.storage.set(SESSION_STORAGE_KEY, &raw)?;

        info!(
            "signed up {} as {}",
            identity.id,
            identity.role().as_str()
        );
        Ok(self.current.insert(identity))
    }

    /// Re-activates the persisted identity when its email matches.
    ///
    /// The password is accepted but never verified against anything: this
    /// is the demo's mock authentication and must not be treated as a
    /// credential check. On a missing record or an email mismatch the
    /// session is left exactly as it was and `None` is returned.
    pub fn login(&mut self, email: &str, _password: &str) -> Option<&Identity> {
        let raw = match self.storage.get(SESSION_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            _ => {
                debug!("login attempt with no persisted identity");
                return None;
            }
        };

        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) if identity.email == email => {
                info!("reactivated session for {}", identity.id);
                Some(self.current.insert(identity))
            }
            Ok(_) => {
                debug!("login email does not match persisted identity");
                None
            }
            Err(e) => {
                warn!("persisted session record is corrupted: {e}");
                None
            }
        }
    }

    /// Erases the persisted identity and clears the session. Idempotent.
    ///
    /// The in-memory identity is dropped even if the durable delete
    /// fails; the storage error is still reported to the caller.
    pub fn logout(&mut self) -> Result<()> {
        let result = self.storage.delete(SESSION_STORAGE_KEY);
        if self.current.take().is_some() {
            info!("logged out");
        }
        result
    }

    /// True iff an identity is held.
    pub fn authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.current.as_ref().map(Identity::role)
    }
}

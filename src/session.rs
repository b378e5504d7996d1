use chrono::Utc;

use crate::errors::AuthError;
use crate::models::{Role, Session};
use crate::provenance::LAST_INTERNAL_PATH_KEY;
use crate::storage::{DurableState, EphemeralState};

/// Durable key holding the serialized session record. Matches the
/// localStorage key the web console uses.
pub const SESSION_KEY: &str = "tiketku_auth";

// --- Mock Credential Table ---

/// A registered (email, secret, role) triple. Authentication against this
/// table is mocked on purpose; a real deployment delegates the check to a
/// backend and this layer only ever sees the resulting session.
struct MockCredential {
    email: &'static str,
    secret: &'static str,
    role: Role,
    name: &'static str,
}

const MOCK_CREDENTIALS: &[MockCredential] = &[
    MockCredential {
        email: "superadmin@tiketku.id",
        secret: "superadmin",
        role: Role::Superadmin,
        name: "Super Admin",
    },
    MockCredential {
        email: "eventadmin@tiketku.id",
        secret: "eventadmin",
        role: Role::EventAdmin,
        name: "Event Admin",
    },
];

// --- Session Store ---

/// SessionStore
///
/// Owns the lifecycle of the current identity: created by a successful
/// login, destroyed by logout, read back corrupt-safe on every render.
/// Holds handles to both storage regions because logout must clear the
/// ephemeral provenance record along with the durable session.
pub struct SessionStore {
    durable: DurableState,
    ephemeral: EphemeralState,
}

impl SessionStore {
    pub fn new(durable: DurableState, ephemeral: EphemeralState) -> Self {
        Self { durable, ephemeral }
    }

    /// login
    ///
    /// Checks `(email, secret)` against the credential table: email matched
    /// case-insensitively, secret exactly. On success the new session is
    /// written durably and returned. On failure any prior session is left
    /// untouched.
    ///
    /// A durable write failure is swallowed: the caller still gets the
    /// session, it just will not survive a reload.
    pub fn login(&self, email: &str, secret: &str) -> Result<Session, AuthError> {
        if email.trim().is_empty() || secret.is_empty() {
            return Err(AuthError::MissingInput);
        }

        let wanted = email.trim().to_lowercase();
        let matched = MOCK_CREDENTIALS
            .iter()
            .find(|cred| cred.email == wanted && cred.secret == secret)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = Session {
            email: matched.email.to_string(),
            name: matched.name.to_string(),
            role: matched.role,
            logged_in_at: Utc::now(),
        };

        match serde_json::to_string(&session) {
            Ok(raw) => {
                if let Err(err) = self.durable.set(SESSION_KEY, &raw) {
                    tracing::warn!(%err, "session not persisted, will not survive reload");
                }
            }
            Err(err) => {
                tracing::warn!(%err, "session record did not serialize");
            }
        }

        tracing::info!(email = %session.email, role = ?session.role, "login succeeded");
        Ok(session)
    }

    /// logout
    ///
    /// Clears the durable session record and the ephemeral last-internal
    /// path. Idempotent: logging out twice is a no-op, not an error.
    /// Storage failures are swallowed.
    pub fn logout(&self) {
        if let Err(err) = self.durable.remove(SESSION_KEY) {
            tracing::warn!(%err, "could not clear durable session record");
        }
        if let Err(err) = self.ephemeral.remove(LAST_INTERNAL_PATH_KEY) {
            tracing::debug!(%err, "could not clear provenance record");
        }
        tracing::info!("logged out");
    }

    /// current_session
    ///
    /// Reads the durable record. Absent key, unreadable storage, and
    /// unparsable contents all yield `None`: corrupt storage means "not
    /// authenticated", never a fatal error.
    pub fn current_session(&self) -> Option<Session> {
        let raw = match self.durable.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::debug!(%err, "durable region unreadable, treating as signed out");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::debug!(%err, "session record corrupt, treating as signed out");
                None
            }
        }
    }
}

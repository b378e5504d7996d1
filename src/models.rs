use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// --- Identity & Session ---

/// Role
///
/// Closed enumeration of operator roles. The wire literals (`SUPERADMIN`,
/// `EVENT_ADMIN`) match the values the web console persists, so a stored
/// session is readable on either side. Extending the platform with a new
/// role means adding a variant here plus a menu table in `menu.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Role {
    Superadmin,
    EventAdmin,
}

/// Principal
///
/// The opaque identity attached to a session. No password or secret is
/// retained after login; authentication is a mocked check against the
/// credential table in `session.rs`, so this carries display data only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Principal {
    pub email: String,
    pub name: String,
}

/// Session
///
/// The current authenticated identity, persisted durably so a full page
/// reload does not deauthenticate the operator. Serialized as the flat
/// `{email, role, name, logged_in_at}` record under the `tiketku_auth`
/// durable key. An absent session is `Option::<Session>::None`; a session
/// value always carries both identity and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Stamped at login. Records written by older console builds omit it.
    #[serde(default = "Utc::now")]
    #[ts(type = "string")]
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// The identity portion of the session, without the role.
    pub fn principal(&self) -> Principal {
        Principal {
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

// --- Navigation ---

/// RouteEntry
///
/// One entry of a role's menu: the path the chrome links to, the label it
/// shows, and the icon name it renders. Menus are static tables in
/// `menu.rs`; a path may appear in more than one role's menu (shared paths
/// render role-specific content via the dispatch renderer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct RouteEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// ProvenanceHint
///
/// One-shot annotation on a single navigation transition saying how it was
/// initiated. Supplied by whichever code started the navigation (a menu
/// link sets `FromMenu`, a post-login redirect sets `FromLogin`) and never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum ProvenanceHint {
    None,
    FromMenu,
    FromLogin,
}

/// NavRequest
///
/// A navigation event as seen by the guards: the requested path plus the
/// transition's provenance hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NavRequest {
    pub path: String,
    pub hint: ProvenanceHint,
}

impl NavRequest {
    pub fn new(path: impl Into<String>, hint: ProvenanceHint) -> Self {
        Self {
            path: path.into(),
            hint,
        }
    }

    /// A bare URL entry: no hint attached to the transition.
    pub fn direct(path: impl Into<String>) -> Self {
        Self::new(path, ProvenanceHint::None)
    }
}

// --- Decisions & commands ---

/// Decision
///
/// The engine's verdict for one page render. Exhaustive by construction:
/// every input combination maps to exactly one variant, and no decision
/// path falls through to `Render` implicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum Decision {
    /// Mount the real page subtree.
    Render,
    /// Send the visitor to the login page, carrying the originally
    /// requested path so login can return them there afterwards.
    RedirectToLogin { from: String },
    /// Mount the generic not-found page. Deliberately indistinguishable
    /// from a genuinely unknown URL.
    NotFound,
}

/// NavigationCommand
///
/// A navigation the core asks the host shell to perform. Pure value: the
/// shell applies it, or drops it if the navigation was superseded, so a
/// stale redirect is never fired after its issuer is torn down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NavigationCommand {
    pub to: String,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
    pub hint: ProvenanceHint,
}

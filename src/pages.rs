//! Entry/exit page flows.
//!
//! The login and not-found pages expressed as pure command producers: each
//! flow reads the stores, records provenance at the moment a transition is
//! initiated, and hands back a `NavigationCommand` for the host shell to apply
//! (or drop, if the navigation was superseded). Presentation — forms,
//! toasts, buttons — stays with the out-of-scope collaborators.

use crate::ConsoleState;
use crate::errors::AuthError;
use crate::models::{NavigationCommand, ProvenanceHint, Session};

/// Role-neutral landing path, the default post-login destination and the
/// not-found recovery target.
pub const LANDING_PATH: &str = "/dashboard";

/// Path of the login page itself.
pub const LOGIN_PATH: &str = "/login";

/// login_entry
///
/// Mounting the login page with a session already present immediately
/// redirects to the originally requested path (or the landing path),
/// replacing the history entry and marked `FromLogin` so downstream guards
/// treat it as in-app provenance. Returns `None` when there is no session
/// and the login form should render.
pub fn login_entry(state: &ConsoleState, requested_from: Option<&str>) -> Option<NavigationCommand> {
    state.sessions.current_session()?;
    let to = requested_from.unwrap_or(LANDING_PATH);
    Some(NavigationCommand {
        to: to.to_string(),
        replace: true,
        hint: ProvenanceHint::FromLogin,
    })
}

/// login_submit
///
/// The credential submission flow. Credential failures come back to the
/// caller for display; on success the internal transition to the target
/// path is recorded *before* the redirect is issued, so the destination's
/// guards see the provenance evidence even if the one-shot hint is lost.
pub fn login_submit(
    state: &ConsoleState,
    email: &str,
    secret: &str,
    requested_from: Option<&str>,
) -> Result<(Session, NavigationCommand), AuthError> {
    let session = state.sessions.login(email, secret)?;

    let to = requested_from.unwrap_or(LANDING_PATH);
    state.tracker.record_internal_transition(to);

    Ok((
        session,
        NavigationCommand {
            to: to.to_string(),
            replace: true,
            hint: ProvenanceHint::FromLogin,
        },
    ))
}

/// not_found_recovery
///
/// The single safe way back from the not-found page: an in-app transition
/// to the landing path, recorded in the tracker and replacing the current
/// history entry so the unresolved URL is not revisitable via back
/// navigation.
pub fn not_found_recovery(state: &ConsoleState) -> NavigationCommand {
    state.tracker.record_internal_transition(LANDING_PATH);
    NavigationCommand {
        to: LANDING_PATH.to_string(),
        replace: true,
        hint: ProvenanceHint::FromMenu,
    }
}

/// logout_flow
///
/// Clears both storage regions through the session store, then sends the
/// operator to the login page with no provenance hint: the next navigation
/// starts from a clean slate.
pub fn logout_flow(state: &ConsoleState) -> NavigationCommand {
    state.sessions.logout();
    NavigationCommand {
        to: LOGIN_PATH.to_string(),
        replace: false,
        hint: ProvenanceHint::None,
    }
}

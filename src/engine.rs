//! Access Decision Engine.
//!
//! The algorithmic heart of the console: pure functions from
//! {session, requested path, provenance} to a render decision. All three
//! guard call sites invoke these with different parameterizations. The one
//! governing rule is fail-closed: every ambiguous or erroneous input maps
//! to `NotFound` or `RedirectToLogin`, and no branch falls through to
//! `Render` implicitly.

use crate::menu::path_matches;
use crate::models::{Decision, ProvenanceHint, Role, Session};
use crate::provenance::ProvenanceTracker;

/// came_from_app
///
/// The provenance test: did this navigation demonstrably originate inside
/// the app? True for a menu click, a post-login redirect, a reload of the
/// current document, or a path matching the recorded last internal
/// transition. Everything else — typed URLs, pasted links, bookmarks — is
/// treated as arriving from outside.
pub fn came_from_app(hint: ProvenanceHint, tracker: &ProvenanceTracker, path: &str) -> bool {
    matches!(hint, ProvenanceHint::FromMenu | ProvenanceHint::FromLogin)
        || tracker.is_reload()
        || tracker.last_internal_path_matches(path)
}

/// decide_entry
///
/// The blanket "is this visitor allowed to see *something*" decision.
///
/// An unauthenticated visitor who clearly came from inside the app (menu,
/// login flow, or reload of a page they already had open) is sent to the
/// login prompt, carrying the requested path so login can return them. A
/// stranger pasting an unknown internal URL gets `NotFound` instead — they
/// must not learn that the path exists or that it requires authentication,
/// so both outcomes look identical to them.
///
/// A present session yields `Render` in the sense of "proceed to the role
/// check"; this decision never grants protected content on its own.
pub fn decide_entry(
    session: Option<&Session>,
    path: &str,
    hint: ProvenanceHint,
    tracker: &ProvenanceTracker,
) -> Decision {
    match session {
        None if came_from_app(hint, tracker, path) => Decision::RedirectToLogin {
            from: path.to_string(),
        },
        None => Decision::NotFound,
        Some(_) => Decision::Render,
    }
}

/// decide_role_path
///
/// The layout-level "is this role allowed on this path" decision, over the
/// allowed-path set derived from the role's menu plus the global
/// allow-list.
///
/// A path outside the set yields `NotFound` unconditionally — a role
/// mismatch never reveals that the route exists. A path inside the set
/// still renders only if the provenance test passes: a same-role, same-path
/// direct URL entry with no in-app evidence also yields `NotFound`, so the
/// shape of a role's menu cannot be discovered by URL guessing.
///
/// The absent-session arm is a safety net; the blanket guard upstream
/// should already have caught that state.
pub fn decide_role_path(
    session: Option<&Session>,
    path: &str,
    hint: ProvenanceHint,
    tracker: &ProvenanceTracker,
    allowed_paths: &[&str],
) -> Decision {
    if session.is_none() {
        return Decision::RedirectToLogin {
            from: path.to_string(),
        };
    }

    let in_allowed = allowed_paths.iter().any(|base| path_matches(base, path));
    match (in_allowed, came_from_app(hint, tracker, path)) {
        (false, _) => Decision::NotFound,
        (true, false) => Decision::NotFound,
        (true, true) => Decision::Render,
    }
}

/// decide_roles
///
/// The per-route static allow-list decision used by the role guard for
/// routes outside the main per-role menu check. An empty list means "any
/// authenticated role". This deliberately does not re-test provenance: the
/// layout-level gate wrapping these routes already did, and the two checks
/// stay consistent by construction rather than by shared code.
pub fn decide_roles(session: Option<&Session>, path: &str, allowed: &[Role]) -> Decision {
    match session {
        None => Decision::RedirectToLogin {
            from: path.to_string(),
        },
        Some(session) => {
            if !allowed.is_empty() && !allowed.contains(&session.role) {
                Decision::NotFound
            } else {
                Decision::Render
            }
        }
    }
}

/// dispatch
///
/// Role-specific dispatch at a shared path: picks the view keyed by the
/// session's role. A role with no entry in the mapping, or an absent
/// session, yields `None` — the caller shows `NotFound`.
pub fn dispatch<'a, V>(session: Option<&Session>, map: &'a [(Role, V)]) -> Option<&'a V> {
    let role = session.map(|s| s.role)?;
    map.iter()
        .find(|(candidate, _)| *candidate == role)
        .map(|(_, view)| view)
}

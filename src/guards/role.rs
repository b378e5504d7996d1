use crate::ConsoleState;
use crate::engine;
use crate::guards::nav_span;
use crate::models::{Decision, NavRequest, Role};

/// Static role allow-lists for the routes that sit outside the shared
/// paths. This table is the route map of the console: each path paired with
/// the roles that may mount it. It intentionally does not consult the
/// dynamic menu registry — the layout gate already runs the menu check, and
/// keeping this list static makes the per-route policy readable in one
/// place.
pub const ROLE_GUARDED_ROUTES: &[(&str, &[Role])] = &[
    // Event-admin pages.
    ("/categories", &[Role::EventAdmin]),
    ("/regions", &[Role::EventAdmin]),
    ("/ticket-types", &[Role::EventAdmin]),
    ("/reports", &[Role::EventAdmin]),
    ("/orders", &[Role::EventAdmin]),
    ("/tickets", &[Role::EventAdmin]),
    ("/scan-staff", &[Role::EventAdmin]),
    // Superadmin pages.
    ("/event-admins", &[Role::Superadmin]),
    ("/users", &[Role::Superadmin]),
    ("/banner", &[Role::Superadmin]),
];

/// The static allow-list registered for `path`, if it is role-guarded.
pub fn allowed_roles_for(path: &str) -> Option<&'static [Role]> {
    ROLE_GUARDED_ROUTES
        .iter()
        .find(|(base, _)| *base == path)
        .map(|(_, roles)| *roles)
}

/// require_role
///
/// The per-route role guard. Applies the engine's static-list decision:
/// absent session redirects to login (safety net — the blanket guard
/// upstream should have caught it), a role outside the list sees the
/// not-found page so the route's existence is never revealed, and an empty
/// list admits any authenticated role.
pub fn require_role(state: &ConsoleState, req: &NavRequest, allowed: &[Role]) -> Decision {
    let span = nav_span("require_role", &req.path);
    let _guard = span.enter();

    let session = state.sessions.current_session();
    let decision = engine::decide_roles(session.as_ref(), &req.path, allowed);
    tracing::debug!(?decision, ?allowed, "role guard decision");
    decision
}

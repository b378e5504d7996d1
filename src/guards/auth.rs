use crate::ConsoleState;
use crate::engine;
use crate::guards::nav_span;
use crate::menu;
use crate::models::{Decision, NavRequest, RouteEntry};

/// require_auth
///
/// The blanket guard wrapping the whole protected subtree. Applies the
/// engine's entry decision: authenticated visitors proceed to the role
/// checks, in-app unauthenticated visitors are redirected to login with the
/// original path attached, and everyone else sees the not-found page.
pub fn require_auth(state: &ConsoleState, req: &NavRequest) -> Decision {
    let span = nav_span("require_auth", &req.path);
    let _guard = span.enter();

    let session = state.sessions.current_session();
    let decision = engine::decide_entry(session.as_ref(), &req.path, req.hint, &state.tracker);
    tracing::debug!(?decision, hint = ?req.hint, "blanket guard decision");
    decision
}

/// layout_gate
///
/// The gate on the authenticated shell. Re-derives the allowed-path set
/// from the live menu registry plus the global allow-list for the current
/// session's role, and applies the role/path decision — including the
/// provenance test — before any navigation chrome or nested outlet renders.
pub fn layout_gate(state: &ConsoleState, req: &NavRequest) -> Decision {
    let span = nav_span("layout_gate", &req.path);
    let _guard = span.enter();

    let session = state.sessions.current_session();
    let allowed = menu::allowed_paths(session.as_ref().map(|s| s.role));
    let decision = engine::decide_role_path(
        session.as_ref(),
        &req.path,
        req.hint,
        &state.tracker,
        &allowed,
    );
    tracing::debug!(?decision, role = ?session.as_ref().map(|s| s.role), "layout gate decision");
    decision
}

/// visible_menu
///
/// The menu the chrome may display for the current session: exactly the
/// registry's sequence for the session's role, empty when signed out. Kept
/// next to the gate so the chrome can only ever show paths the gate would
/// also render.
pub fn visible_menu(state: &ConsoleState) -> &'static [RouteEntry] {
    let session = state.sessions.current_session();
    menu::menu_for(session.map(|s| s.role))
}

use crate::ConsoleState;
use crate::engine;
use crate::guards::nav_span;
use crate::models::{NavRequest, Role};

/// Paths served to both roles, each rendering role-specific content through
/// the dispatch renderer rather than a role guard.
pub const SHARED_PATHS: &[&str] = &["/dashboard", "/events", "/settings"];

/// RoleViewMap
///
/// The role → view mapping for one shared path. `V` is whatever the host
/// treats as a mountable view (a component handle, a page id in tests).
pub struct RoleViewMap<V> {
    entries: Vec<(Role, V)>,
}

impl<V> RoleViewMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder-style registration of one role's view.
    pub fn with(mut self, role: Role, view: V) -> Self {
        self.entries.push((role, view));
        self
    }
}

impl<V> Default for RoleViewMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// RoleView
///
/// Outcome of the dispatch renderer: the selected view, or not-found when
/// the session's role has no entry in the mapping (or there is no session).
#[derive(Debug, PartialEq, Eq)]
pub enum RoleView<'a, V> {
    Render(&'a V),
    NotFound,
}

/// render_for_role
///
/// The role-dispatch renderer for a shared path. Looks up the current
/// session's role in the mapping; anything missing fails closed to
/// `NotFound`.
pub fn render_for_role<'a, V>(
    state: &ConsoleState,
    req: &NavRequest,
    map: &'a RoleViewMap<V>,
) -> RoleView<'a, V> {
    let span = nav_span("render_for_role", &req.path);
    let _guard = span.enter();

    let session = state.sessions.current_session();
    match engine::dispatch(session.as_ref(), &map.entries) {
        Some(view) => RoleView::Render(view),
        None => {
            tracing::debug!(role = ?session.map(|s| s.role), "no view for role, failing closed");
            RoleView::NotFound
        }
    }
}

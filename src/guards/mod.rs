/// Guard Module Index
///
/// Organizes the three call sites that invoke the Access Decision Engine,
/// one module per granularity. Access control is applied explicitly at each
/// site; no route renders without passing through at least one of them.
///
/// Every guard evaluation runs inside a tracing span carrying a fresh
/// navigation id, so all log lines for one navigation share a correlation
/// key.

/// Blanket authentication guard and the layout-level gate over the
/// role's live menu.
pub mod auth;

/// Per-route guard with an explicit static role allow-list, for routes
/// outside the main per-role menu.
pub mod role;

/// Role-dispatch renderer for paths shared by several roles.
pub mod dispatch;

use uuid::Uuid;

/// Span wrapping one guard evaluation. The `nav_id` plays the part a
/// request id plays on a server: one navigation, one correlation key.
pub(crate) fn nav_span(guard: &'static str, path: &str) -> tracing::Span {
    tracing::info_span!("navigation", guard, path, nav_id = %Uuid::new_v4())
}

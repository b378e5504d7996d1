use crate::models::{Role, RouteEntry};

// --- Static Menu Tables ---

/// Superadmin menu: platform-wide administration.
pub const SUPERADMIN_MENU: &[RouteEntry] = &[
    RouteEntry {
        path: "/dashboard",
        label: "Dashboard",
        icon: "LayoutDashboard",
    },
    RouteEntry {
        path: "/event-admins",
        label: "Event Admins",
        icon: "UserCog",
    },
    RouteEntry {
        path: "/users",
        label: "Users",
        icon: "Users",
    },
    RouteEntry {
        path: "/banner",
        label: "Banner",
        icon: "Image",
    },
    RouteEntry {
        path: "/settings",
        label: "Settings",
        icon: "Settings",
    },
];

/// Event-admin menu: per-event operations.
pub const EVENT_ADMIN_MENU: &[RouteEntry] = &[
    RouteEntry {
        path: "/dashboard",
        label: "Dashboard",
        icon: "LayoutDashboard",
    },
    RouteEntry {
        path: "/events",
        label: "Events",
        icon: "Ticket",
    },
    RouteEntry {
        path: "/categories",
        label: "Categories",
        icon: "List",
    },
    RouteEntry {
        path: "/regions",
        label: "Regions",
        icon: "MapPin",
    },
    RouteEntry {
        path: "/orders",
        label: "Orders",
        icon: "ShoppingCart",
    },
    RouteEntry {
        path: "/tickets",
        label: "Tickets",
        icon: "Ticket",
    },
    RouteEntry {
        path: "/ticket-types",
        label: "Ticket Types",
        icon: "Tag",
    },
    RouteEntry {
        path: "/reports",
        label: "Reports",
        icon: "FileText",
    },
    RouteEntry {
        path: "/scan-staff",
        label: "Scan Staff",
        icon: "Users",
    },
    RouteEntry {
        path: "/settings",
        label: "Settings",
        icon: "Settings",
    },
];

/// Paths available to every authenticated role regardless of menu.
pub const GLOBAL_ALLOWED_PATHS: &[&str] = &["/profile"];

// --- Registry Functions ---

/// menu_for
///
/// Pure mapping from role to its ordered menu. An absent role gets an empty
/// menu; there is no mutable state here. The chrome collaborator renders
/// exactly this sequence, so it can only ever display paths the engine
/// would also allow for that role.
pub fn menu_for(role: Option<Role>) -> &'static [RouteEntry] {
    match role {
        Some(Role::Superadmin) => SUPERADMIN_MENU,
        Some(Role::EventAdmin) => EVENT_ADMIN_MENU,
        None => &[],
    }
}

/// path_matches
///
/// True iff `requested` equals `base` or is a strict path-segment
/// descendant of it. Segment matching, not raw string prefix: `/users/42`
/// matches `/users`, `/users-archive` does not.
pub fn path_matches(base: &str, requested: &str) -> bool {
    requested == base || requested.starts_with(&format!("{base}/"))
}

/// allowed_paths
///
/// The role's menu paths plus the global allow-list, in menu order. This is
/// what the layout-level gate re-derives on every render.
pub fn allowed_paths(role: Option<Role>) -> Vec<&'static str> {
    menu_for(role)
        .iter()
        .map(|entry| entry.path)
        .chain(GLOBAL_ALLOWED_PATHS.iter().copied())
        .collect()
}

/// is_path_allowed
///
/// Whether `path` exists for `role`: equal to or a segment-descendant of
/// some menu entry, or of a globally allowed path. Distinguishes "this
/// route exists for this role" from "this string happens to prefix another
/// path".
pub fn is_path_allowed(role: Option<Role>, path: &str) -> bool {
    allowed_paths(role)
        .iter()
        .any(|base| path_matches(base, path))
}

use tiketku_console::{
    menu::{self, EVENT_ADMIN_MENU, GLOBAL_ALLOWED_PATHS, SUPERADMIN_MENU},
    models::Role,
};

// --- menu_for ---

#[test]
fn each_role_gets_its_ordered_menu() {
    let sa: Vec<&str> = menu::menu_for(Some(Role::Superadmin))
        .iter()
        .map(|e| e.path)
        .collect();
    assert_eq!(
        sa,
        ["/dashboard", "/event-admins", "/users", "/banner", "/settings"]
    );

    let ea: Vec<&str> = menu::menu_for(Some(Role::EventAdmin))
        .iter()
        .map(|e| e.path)
        .collect();
    assert_eq!(
        ea,
        [
            "/dashboard",
            "/events",
            "/categories",
            "/regions",
            "/orders",
            "/tickets",
            "/ticket-types",
            "/reports",
            "/scan-staff",
            "/settings"
        ]
    );
}

#[test]
fn absent_role_gets_an_empty_menu() {
    assert!(menu::menu_for(None).is_empty());
}

#[test]
fn shared_paths_appear_in_both_menus() {
    for shared in ["/dashboard", "/settings"] {
        assert!(SUPERADMIN_MENU.iter().any(|e| e.path == shared));
        assert!(EVENT_ADMIN_MENU.iter().any(|e| e.path == shared));
    }
}

// --- path_matches ---

#[test]
fn path_matches_is_segment_based() {
    assert!(menu::path_matches("/users", "/users"));
    assert!(menu::path_matches("/users", "/users/42"));
    assert!(menu::path_matches("/users", "/users/42/details"));
    // Raw string prefix is not a match.
    assert!(!menu::path_matches("/users", "/users-archive"));
    assert!(!menu::path_matches("/users", "/user"));
}

// --- is_path_allowed ---

#[test]
fn menu_paths_and_descendants_are_allowed() {
    assert!(menu::is_path_allowed(Some(Role::Superadmin), "/banner"));
    assert!(menu::is_path_allowed(Some(Role::Superadmin), "/users/42"));
    assert!(!menu::is_path_allowed(Some(Role::Superadmin), "/orders"));

    assert!(menu::is_path_allowed(Some(Role::EventAdmin), "/orders"));
    assert!(!menu::is_path_allowed(Some(Role::EventAdmin), "/users"));
}

#[test]
fn global_allow_list_applies_to_every_role() {
    assert_eq!(GLOBAL_ALLOWED_PATHS, ["/profile"]);
    assert!(menu::is_path_allowed(Some(Role::Superadmin), "/profile"));
    assert!(menu::is_path_allowed(Some(Role::EventAdmin), "/profile"));
}

#[test]
fn nothing_is_allowed_without_a_role() {
    // The allow-list still requires an authenticated role upstream; with no
    // role the set is just the global list.
    assert!(!menu::is_path_allowed(None, "/dashboard"));
    assert!(menu::is_path_allowed(None, "/profile"));
}

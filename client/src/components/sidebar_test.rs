use super::*;

#[test]
fn module_href_nests_under_dashboard() {
    assert_eq!(module_href("sales"), "/dashboard/sales");
}

#[test]
fn dashboard_link_matches_exactly() {
    assert!(is_active("/dashboard", DASHBOARD_HREF));
    assert!(is_active("/dashboard/", DASHBOARD_HREF));
    assert!(!is_active("/dashboard/sales", DASHBOARD_HREF));
}

#[test]
fn module_link_matches_itself_and_children() {
    assert!(is_active("/dashboard/settings", "/dashboard/settings"));
    assert!(is_active("/dashboard/settings/users", "/dashboard/settings"));
    assert!(!is_active("/dashboard/settingsx", "/dashboard/settings"));
    assert!(!is_active("/dashboard/sales", "/dashboard/settings"));
}

#[test]
fn classes_reflect_state() {
    assert_eq!(nav_class(true), "sidebar__link sidebar__link--active");
    assert_eq!(nav_class(false), "sidebar__link");
    assert_eq!(sidebar_class(true), "sidebar sidebar--open");
    assert_eq!(sidebar_class(false), "sidebar");
    assert_eq!(scrim_class(true), "sidebar__scrim sidebar__scrim--visible");
}

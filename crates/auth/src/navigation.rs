//! Role → navigation menu table.
//!
//! Menus are derived data: a pure function of the role, with no lifecycle of
//! their own. Order within a menu is the display order.

use serde::Serialize;

use schoolhub_core::ValueObject;

use crate::Role;

/// One entry in a role's navigation menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NavigationItem {
    /// Route path the entry links to.
    pub path: &'static str,
    pub label: &'static str,
    /// Icon reference (icon-set name) resolved by the view layer.
    pub icon: &'static str,
}

impl ValueObject for NavigationItem {}

const fn item(path: &'static str, label: &'static str, icon: &'static str) -> NavigationItem {
    NavigationItem { path, label, icon }
}

const DASHBOARD: NavigationItem = item("/", "Dashboard", "layout-dashboard");

const SYSTEM_ADMIN: &[NavigationItem] = &[
    DASHBOARD,
    item("/schools", "Schools", "school"),
    item("/subscriptions", "Subscriptions", "credit-card"),
    item("/users", "Users", "users"),
    item("/settings", "Settings", "settings"),
];

const SCHOOL_ADMIN: &[NavigationItem] = &[
    DASHBOARD,
    item("/teachers", "Teachers", "user-check"),
    item("/students", "Students", "graduation-cap"),
    item("/classes", "Classes", "book-open"),
    item("/terms", "Terms", "calendar"),
    item("/grade-system", "Grade System", "award"),
    item("/settings", "Settings", "settings"),
];

const PRINCIPAL: &[NavigationItem] = &[
    DASHBOARD,
    item("/teachers", "Teachers", "user-check"),
    item("/students", "Students", "graduation-cap"),
    item("/classes", "Classes", "book-open"),
    item("/reports", "Reports", "bar-chart"),
];

const TEACHER: &[NavigationItem] = &[
    DASHBOARD,
    item("/my-classes", "My Classes", "book-open"),
    item("/assignments", "Assignments", "clipboard-list"),
    item("/gradebook", "Gradebook", "award"),
    item("/attendance", "Attendance", "calendar-check"),
];

const STUDENT: &[NavigationItem] = &[
    DASHBOARD,
    item("/courses", "My Courses", "book-open"),
    item("/assignments", "Assignments", "clipboard-list"),
    item("/grades", "Grades", "award"),
    item("/schedule", "Schedule", "calendar"),
];

const PARENT: &[NavigationItem] = &[
    DASHBOARD,
    item("/children", "My Children", "users"),
    item("/grades", "Grades", "award"),
    item("/attendance", "Attendance", "calendar-check"),
    item("/messages", "Messages", "message-square"),
];

/// Navigation menu for a role.
pub fn navigation_for(role: Role) -> &'static [NavigationItem] {
    match role {
        Role::SystemAdmin => SYSTEM_ADMIN,
        Role::SchoolAdmin => SCHOOL_ADMIN,
        Role::Principal => PRINCIPAL,
        Role::Teacher => TEACHER,
        Role::Student => STUDENT,
        Role::Parent => PARENT,
    }
}

/// Navigation menu for a free-form role tag.
///
/// Tags outside the role set (including the empty tag) yield an empty menu.
pub fn navigation_for_tag(tag: &str) -> &'static [NavigationItem] {
    match tag.parse::<Role>() {
        Ok(role) => navigation_for(role),
        Err(_) => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_menu_starting_at_dashboard() {
        for role in Role::ALL {
            let menu = navigation_for(role);
            assert!(!menu.is_empty(), "empty menu for {role}");
            assert_eq!(menu[0], DASHBOARD);
        }
    }

    #[test]
    fn menus_have_unique_paths() {
        for role in Role::ALL {
            let menu = navigation_for(role);
            let mut paths: Vec<&str> = menu.iter().map(|i| i.path).collect();
            paths.sort_unstable();
            paths.dedup();
            assert_eq!(paths.len(), menu.len(), "duplicate path in {role} menu");
        }
    }

    #[test]
    fn unknown_tags_yield_empty_menu() {
        assert!(navigation_for_tag("").is_empty());
        assert!(navigation_for_tag("janitor").is_empty());
        assert!(navigation_for_tag("undefined").is_empty());
        assert_eq!(navigation_for_tag("teacher"), navigation_for(Role::Teacher));
    }

    #[test]
    fn subscriptions_only_reachable_by_system_admin() {
        for role in Role::ALL {
            let has = navigation_for(role).iter().any(|i| i.path == "/subscriptions");
            assert_eq!(has, role == Role::SystemAdmin);
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_role() -> impl Strategy<Value = Role> {
            prop::sample::select(Role::ALL.to_vec())
        }

        proptest! {
            /// Property: lookup is deterministic and order-stable.
            #[test]
            fn lookup_is_deterministic(role in any_role()) {
                let first: Vec<NavigationItem> = navigation_for(role).to_vec();
                let second: Vec<NavigationItem> = navigation_for(role).to_vec();
                prop_assert_eq!(first, second);
            }

            /// Property: arbitrary tags never panic; non-role tags give empty menus.
            #[test]
            fn arbitrary_tags_are_total(tag in ".{0,24}") {
                let menu = navigation_for_tag(&tag);
                if tag.parse::<Role>().is_err() {
                    prop_assert!(menu.is_empty());
                } else {
                    prop_assert!(!menu.is_empty());
                }
            }
        }
    }
}

//! Page-level access table: route path → roles allowed to render it.
//!
//! An empty role list means "any authenticated principal". Paths not listed
//! here are unrestricted; the view layer renders its own not-found page.

use crate::Role;

use Role::*;

const ROUTES: &[(&str, &[Role])] = &[
    ("/", &[]),
    ("/profile", &[]),
    ("/schools", &[SystemAdmin]),
    ("/subscriptions", &[SystemAdmin]),
    ("/users", &[SystemAdmin]),
    ("/settings", &[SystemAdmin, SchoolAdmin]),
    ("/teachers", &[SchoolAdmin, Principal]),
    ("/students", &[SchoolAdmin, Principal]),
    ("/classes", &[SchoolAdmin, Principal]),
    ("/terms", &[SchoolAdmin]),
    ("/grade-system", &[SchoolAdmin]),
    ("/reports", &[SchoolAdmin, Principal]),
    ("/my-classes", &[Teacher]),
    ("/assignments", &[Teacher, Student]),
    ("/gradebook", &[Teacher]),
    ("/attendance", &[Teacher, Parent]),
    ("/courses", &[Student]),
    ("/grades", &[Student, Parent]),
    ("/schedule", &[Student]),
    ("/children", &[Parent]),
    ("/messages", &[Parent]),
];

/// Roles allowed to render `path`.
///
/// Nested paths inherit the restriction of their closest listed ancestor
/// (`/schools/12/edit` is gated like `/schools`). Trailing slashes are ignored.
pub fn required_roles(path: &str) -> &'static [Role] {
    let path = normalize(path);

    ROUTES
        .iter()
        .filter(|(route, _)| {
            path == *route
                || (*route != "/"
                    && path.strip_prefix(*route).is_some_and(|rest| rest.starts_with('/')))
        })
        .max_by_key(|(route, _)| route.len())
        .map(|(_, roles)| *roles)
        .unwrap_or(&[])
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

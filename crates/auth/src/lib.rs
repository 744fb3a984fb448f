//! `schoolhub-auth`: pure access policy for the school-management front end.
//!
//! Roles, capabilities, principals, the principal registry, navigation menus
//! and page-level access checks. This crate does no I/O; session state and
//! persistence live in `schoolhub-session`.

pub mod authorize;
pub mod capability;
pub mod navigation;
pub mod principal;
pub mod registry;
pub mod roles;
pub mod routes;

pub use authorize::{
    AccessExplanation, AuthzError, DenialKind, authorize_route, can, explain_access, is_authorized,
    require_capability,
};
pub use capability::{Capability, capabilities_for};
pub use navigation::{NavigationItem, navigation_for, navigation_for_tag};
pub use principal::Principal;
pub use registry::PrincipalRegistry;
pub use roles::{Role, UnknownRole};
pub use routes::required_roles;

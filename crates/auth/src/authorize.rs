use serde::Serialize;
use thiserror::Error;

use crate::routes::required_roles;
use crate::{Capability, Principal, Role, capabilities_for};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("not signed in")]
    Unauthenticated,

    #[error("forbidden: role '{role}' may not open '{path}'")]
    Forbidden { role: Role, path: String },

    #[error("forbidden: role '{role}' lacks capability '{capability}'")]
    MissingCapability { role: Role, capability: Capability },
}

/// Role-set authorization check used before rendering role-gated pages.
///
/// - No principal → never authorized.
/// - Empty `required` → any authenticated principal is authorized.
pub fn is_authorized(principal: Option<&Principal>, required: &[Role]) -> bool {
    match principal {
        None => false,
        Some(p) => required.is_empty() || required.contains(&p.role()),
    }
}

/// Capability check (pure policy lookup).
pub fn can(principal: &Principal, capability: Capability) -> bool {
    capabilities_for(principal.role()).contains(&capability)
}

/// Like [`can`], but reports the missing grant.
pub fn require_capability(principal: &Principal, capability: Capability) -> Result<(), AuthzError> {
    if can(principal, capability) {
        Ok(())
    } else {
        Err(AuthzError::MissingCapability {
            role: principal.role(),
            capability,
        })
    }
}

/// Page-level authorization against the route access table.
pub fn authorize_route(principal: Option<&Principal>, path: &str) -> Result<(), AuthzError> {
    let Some(p) = principal else {
        return Err(AuthzError::Unauthenticated);
    };

    if is_authorized(Some(p), required_roles(path)) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden {
            role: p.role(),
            path: path.to_string(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Access Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Detailed explanation of a page access decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessExplanation {
    pub path: String,
    pub required_roles: Vec<Role>,
    pub granted: bool,

    /// Human-readable reason for the decision.
    pub reason: String,

    /// Role of the principal checked, if any.
    pub principal_role: Option<Role>,
    pub capabilities: Vec<Capability>,

    /// If denied, this explains what was missing.
    pub denial: Option<DenialKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    Unauthenticated,
    RoleNotPermitted,
}

/// Explain why access to `path` is (or would be) granted or denied.
///
/// The decision always agrees with [`authorize_route`].
pub fn explain_access(principal: Option<&Principal>, path: &str) -> AccessExplanation {
    let required = required_roles(path);

    let Some(p) = principal else {
        return AccessExplanation {
            path: path.to_string(),
            required_roles: required.to_vec(),
            granted: false,
            reason: "No principal is signed in".to_string(),
            principal_role: None,
            capabilities: Vec::new(),
            denial: Some(DenialKind::Unauthenticated),
        };
    };

    let role = p.role();
    let granted = is_authorized(Some(p), required);

    let reason = if required.is_empty() {
        "Route is open to any signed-in principal".to_string()
    } else if granted {
        format!("Role '{role}' is one of the permitted roles")
    } else {
        let permitted: Vec<&str> = required.iter().map(|r| r.as_str()).collect();
        format!(
            "Role '{role}' is not permitted; route requires one of [{}]",
            permitted.join(", ")
        )
    };

    AccessExplanation {
        path: path.to_string(),
        required_roles: required.to_vec(),
        granted,
        reason,
        principal_role: Some(role),
        capabilities: capabilities_for(role).to_vec(),
        denial: (!granted).then_some(DenialKind::RoleNotPermitted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrincipalRegistry;

    fn principal(role: Role) -> Principal {
        PrincipalRegistry::sample().find_by_role(role).unwrap().clone()
    }

    #[test]
    fn anonymous_is_never_authorized() {
        assert!(!is_authorized(None, &[]));
        assert!(!is_authorized(None, &Role::ALL));
        assert_eq!(authorize_route(None, "/"), Err(AuthzError::Unauthenticated));
    }

    #[test]
    fn empty_requirement_admits_everyone_signed_in() {
        for role in Role::ALL {
            assert!(is_authorized(Some(&principal(role)), &[]));
        }
    }

    #[test]
    fn role_membership_decides() {
        let teacher = principal(Role::Teacher);
        assert!(is_authorized(Some(&teacher), &[Role::Teacher, Role::Student]));
        assert!(!is_authorized(Some(&teacher), &[Role::SchoolAdmin]));
    }

    #[test]
    fn route_denial_names_role_and_path() {
        let student = principal(Role::Student);
        let err = authorize_route(Some(&student), "/grade-system").unwrap_err();
        assert_eq!(
            err,
            AuthzError::Forbidden {
                role: Role::Student,
                path: "/grade-system".to_string()
            }
        );
        assert!(err.to_string().contains("student"));
    }

    #[test]
    fn only_system_admin_can_impersonate() {
        for role in Role::ALL {
            assert_eq!(can(&principal(role), Capability::ImpersonateRole), role == Role::SystemAdmin);
        }
        let err = require_capability(&principal(Role::SchoolAdmin), Capability::ImpersonateRole).unwrap_err();
        assert!(matches!(err, AuthzError::MissingCapability { role: Role::SchoolAdmin, .. }));
    }

    #[test]
    fn explanation_agrees_with_decision() {
        let paths = ["/", "/schools", "/terms", "/grades", "/children/3", "/unknown"];
        for role in Role::ALL {
            let p = principal(role);
            for path in paths {
                let explanation = explain_access(Some(&p), path);
                assert_eq!(explanation.granted, authorize_route(Some(&p), path).is_ok());
                assert_eq!(explanation.denial.is_some(), !explanation.granted);
            }
        }

        let anonymous = explain_access(None, "/");
        assert!(!anonymous.granted);
        assert_eq!(anonymous.denial, Some(DenialKind::Unauthenticated));
    }

    #[test]
    fn explanation_serializes_for_audit() {
        let parent = principal(Role::Parent);
        let json = serde_json::to_value(explain_access(Some(&parent), "/schools")).unwrap();
        assert_eq!(json["granted"], false);
        assert_eq!(json["principal_role"], "parent");
        assert_eq!(json["denial"], "role_not_permitted");
        assert_eq!(json["required_roles"], serde_json::json!(["system_admin"]));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn role_subset() -> impl Strategy<Value = Vec<Role>> {
            prop::sample::subsequence(Role::ALL.to_vec(), 0..=Role::ALL.len())
        }

        proptest! {
            /// Property: no principal, no access, whatever the requirement.
            #[test]
            fn anonymous_denied_for_any_set(required in role_subset()) {
                prop_assert!(!is_authorized(None, &required));
            }

            /// Property: a non-empty requirement is plain set membership.
            #[test]
            fn membership_law(
                role in prop::sample::select(Role::ALL.to_vec()),
                required in role_subset(),
            ) {
                let p = principal(role);
                let expected = required.is_empty() || required.contains(&role);
                prop_assert_eq!(is_authorized(Some(&p), &required), expected);
            }
        }
    }
}

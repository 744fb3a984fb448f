use serde::{Deserialize, Serialize};

use schoolhub_core::{DomainError, DomainResult, Entity, PrincipalId, TenantId};

use crate::Role;

/// An authenticated actor: identity, role and tenant scope.
///
/// # Invariants
/// - A `system_admin` is tenant-less (scoped to every school).
/// - Every other role carries exactly one tenant scope.
///
/// The invariant is checked on construction *and* on deserialization, so a
/// persisted record that violates it never turns back into a `Principal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PrincipalRecord", into = "PrincipalRecord")]
pub struct Principal {
    id: PrincipalId,
    name: String,
    email: String,
    role: Role,
    tenant_id: Option<TenantId>,
}

impl Principal {
    pub fn new(
        id: PrincipalId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        tenant_id: Option<TenantId>,
    ) -> DomainResult<Self> {
        let principal = Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            tenant_id,
        };
        principal.validate()?;
        Ok(principal)
    }

    /// Re-check the tenant-scope invariant.
    pub fn validate(&self) -> DomainResult<()> {
        match (self.role.is_tenant_scoped(), &self.tenant_id) {
            (true, None) => Err(DomainError::invariant(format!(
                "{} principal '{}' has no tenant scope",
                self.role, self.id
            ))),
            (false, Some(tenant)) => Err(DomainError::invariant(format!(
                "{} principal '{}' must not be scoped to tenant '{}'",
                self.role, self.id, tenant
            ))),
            _ => Ok(()),
        }
    }

    pub fn id(&self) -> &PrincipalId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Tenant scope; `None` means "all tenants" (system admin).
    pub fn tenant_id(&self) -> Option<&TenantId> {
        self.tenant_id.as_ref()
    }
}

impl Entity for Principal {
    type Id = PrincipalId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Principal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} <{}> ({})", self.name, self.email, self.role.label())?;
        if let Some(tenant) = &self.tenant_id {
            write!(f, " @ school {tenant}")?;
        }
        Ok(())
    }
}

/// Wire shape of a principal (persisted session record).
#[derive(Serialize, Deserialize)]
struct PrincipalRecord {
    id: PrincipalId,
    name: String,
    email: String,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tenant_id: Option<TenantId>,
}

impl TryFrom<PrincipalRecord> for Principal {
    type Error = DomainError;

    fn try_from(r: PrincipalRecord) -> Result<Self, Self::Error> {
        Principal::new(r.id, r.name, r.email, r.role, r.tenant_id)
    }
}

impl From<Principal> for PrincipalRecord {
    fn from(p: Principal) -> Self {
        Self {
            id: p.id,
            name: p.name,
            email: p.email,
            role: p.role,
            tenant_id: p.tenant_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> PrincipalId {
        PrincipalId::new(s).unwrap()
    }

    fn school(s: &str) -> TenantId {
        TenantId::new(s).unwrap()
    }

    #[test]
    fn teacher_without_school_is_rejected() {
        let result = Principal::new(pid("4"), "John", "teacher@school.com", Role::Teacher, None);
        assert!(matches!(result, Err(DomainError::InvariantViolation(_))));
    }

    #[test]
    fn system_admin_with_school_is_rejected() {
        let result = Principal::new(
            pid("1"),
            "Root",
            "admin@system.com",
            Role::SystemAdmin,
            Some(school("1")),
        );
        assert!(result.is_err());
    }

    #[test]
    fn serialized_record_omits_missing_tenant() {
        let admin = Principal::new(pid("1"), "Root", "admin@system.com", Role::SystemAdmin, None).unwrap();
        let json = serde_json::to_value(&admin).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "Root",
                "email": "admin@system.com",
                "role": "system_admin",
            })
        );
    }

    #[test]
    fn deserialization_enforces_tenant_invariant() {
        let json = r#"{"id":"5","name":"Emma","email":"student@school.com","role":"student"}"#;
        let result: Result<Principal, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let json = r#"{"id":"5","name":"Emma","email":"student@school.com","role":"student","tenant_id":"1"}"#;
        let student: Principal = serde_json::from_str(json).unwrap();
        assert_eq!(student.tenant_id(), Some(&school("1")));
    }

    #[test]
    fn identity_ignores_display_attributes() {
        let a = Principal::new(pid("4"), "John", "teacher@school.com", Role::Teacher, Some(school("1"))).unwrap();
        let b = Principal::new(pid("4"), "Johnny", "teacher@school.com", Role::Teacher, Some(school("1"))).unwrap();
        assert!(a.same_identity(&b));
        assert_ne!(a, b);
    }
}

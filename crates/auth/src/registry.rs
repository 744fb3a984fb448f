//! Known-principal registry.
//!
//! The registry is fixed and read-only once built. Lookups are by exact email
//! (authentication) and by role (role switching, fixtures).

use std::collections::HashSet;

use schoolhub_core::{DomainError, DomainResult, PrincipalId, TenantId};

use crate::{Principal, Role};

/// Fixed collection of known principals.
#[derive(Debug, Clone)]
pub struct PrincipalRegistry {
    principals: Vec<Principal>,
}

impl PrincipalRegistry {
    /// Build a registry; emails must be unique.
    pub fn new(principals: Vec<Principal>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for p in &principals {
            if !seen.insert(p.email()) {
                return Err(DomainError::conflict(format!(
                    "duplicate principal email '{}'",
                    p.email()
                )));
            }
        }
        Ok(Self { principals })
    }

    /// Sample deployment: one principal per role, all in school `1` except the
    /// system administrator.
    ///
    /// # Panics
    ///
    /// If a built-in row breaks a principal invariant.
    pub fn sample() -> Self {
        let rows: [(&str, &str, &str, Role); 6] = [
            ("1", "System Administrator", "admin@system.com", Role::SystemAdmin),
            ("2", "School Administrator", "admin@school.com", Role::SchoolAdmin),
            ("3", "Dr. Sarah Johnson", "principal@school.com", Role::Principal),
            ("4", "John Smith", "teacher@school.com", Role::Teacher),
            ("5", "Emma Wilson", "student@school.com", Role::Student),
            ("6", "Robert Wilson", "parent@school.com", Role::Parent),
        ];

        rows.into_iter()
            .map(|(id, name, email, role)| {
                let tenant = role.is_tenant_scoped().then(|| TenantId::new("1")).transpose()?;
                Principal::new(PrincipalId::new(id)?, name, email, role, tenant)
            })
            .collect::<DomainResult<Vec<_>>>()
            .and_then(Self::new)
            .expect("sample registry rows must be valid")
    }

    /// Exact (case-sensitive) email match.
    pub fn find_by_email(&self, email: &str) -> Option<&Principal> {
        self.principals.iter().find(|p| p.email() == email)
    }

    /// Representative principal for a role (first registered).
    pub fn find_by_role(&self, role: Role) -> Option<&Principal> {
        self.principals.iter().find(|p| p.role() == role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Principal> {
        self.principals.iter()
    }

    pub fn len(&self) -> usize {
        self.principals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }
}

impl Default for PrincipalRegistry {
    fn default() -> Self {
        Self::sample()
    }
}

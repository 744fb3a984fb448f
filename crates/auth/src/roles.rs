use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role tag used for RBAC.
///
/// The set is closed: every principal carries exactly one of these. The wire
/// form (persisted session record, CLI arguments) is the snake_case tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SystemAdmin,
    SchoolAdmin,
    Principal,
    Teacher,
    Student,
    Parent,
}

/// A role tag outside the closed role set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 6] = [
        Role::SystemAdmin,
        Role::SchoolAdmin,
        Role::Principal,
        Role::Teacher,
        Role::Student,
        Role::Parent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SystemAdmin => "system_admin",
            Role::SchoolAdmin => "school_admin",
            Role::Principal => "principal",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Parent => "parent",
        }
    }

    /// Human-readable label shown in role pickers and headers.
    pub fn label(&self) -> &'static str {
        match self {
            Role::SystemAdmin => "System Administrator",
            Role::SchoolAdmin => "School Administrator",
            Role::Principal => "Principal",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::Parent => "Parent",
        }
    }

    /// Whether principals with this role are bound to a single school.
    pub fn is_tenant_scoped(&self) -> bool {
        !matches!(self, Role::SystemAdmin)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == tag)
            .ok_or_else(|| UnknownRole(tag.to_string()))
    }
}

use serde::{Deserialize, Serialize};

use crate::Role;

/// Privileged action a principal may perform.
///
/// Policy checks go through [`capabilities_for`] / [`crate::can`] rather than
/// comparing role names at call sites, so the grant table below is the single
/// place to audit who may do what.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Assume another role's identity (support/testing).
    ImpersonateRole,
    ManageSchools,
    ManageSubscriptions,
    ManageTerms,
    ManageTeachers,
    ConfigureGradeSystem,
    AssignClassOwnership,
    ViewReports,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ImpersonateRole => "impersonate_role",
            Capability::ManageSchools => "manage_schools",
            Capability::ManageSubscriptions => "manage_subscriptions",
            Capability::ManageTerms => "manage_terms",
            Capability::ManageTeachers => "manage_teachers",
            Capability::ConfigureGradeSystem => "configure_grade_system",
            Capability::AssignClassOwnership => "assign_class_ownership",
            Capability::ViewReports => "view_reports",
        }
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

const SYSTEM_ADMIN: &[Capability] = &[
    Capability::ImpersonateRole,
    Capability::ManageSchools,
    Capability::ManageSubscriptions,
    Capability::ViewReports,
];

const SCHOOL_ADMIN: &[Capability] = &[
    Capability::ManageTerms,
    Capability::ManageTeachers,
    Capability::ConfigureGradeSystem,
    Capability::AssignClassOwnership,
    Capability::ViewReports,
];

const PRINCIPAL: &[Capability] = &[Capability::AssignClassOwnership, Capability::ViewReports];

/// Role → capability grant table.
pub fn capabilities_for(role: Role) -> &'static [Capability] {
    match role {
        Role::SystemAdmin => SYSTEM_ADMIN,
        Role::SchoolAdmin => SCHOOL_ADMIN,
        Role::Principal => PRINCIPAL,
        Role::Teacher | Role::Student | Role::Parent => &[],
    }
}

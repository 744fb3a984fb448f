//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque strings (registry ids such as `"1"`, school codes,
//! etc.). The only rule enforced here is that they are non-blank.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a principal (actor identity).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PrincipalId(String);

/// Identifier of a tenant (a school; the multi-tenant boundary).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create an identifier, rejecting blank values.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::invalid_id(format!(
                        "{}: must not be blank",
                        $name
                    )));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_string_newtype!(PrincipalId, "PrincipalId");
impl_string_newtype!(TenantId, "TenantId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_rejected() {
        assert!(matches!(PrincipalId::new(""), Err(DomainError::InvalidId(_))));
        assert!(matches!(TenantId::from_str("   "), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = TenantId::new("school-7").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"school-7\"");

        let back: TenantId = serde_json::from_str("\"school-7\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn deserializing_blank_id_fails() {
        let result: Result<PrincipalId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}

//! Coarse staff roles.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse role attached to a staff profile.
///
/// Roles gate which workflow operations a profile may perform; they carry
/// no further structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access, including review decisions.
    Admin,
    /// Facilities staff executing approved work.
    Employee,
    /// Department manager with review authority.
    Manager,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
            Self::Manager => "manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "employee" => Ok(Self::Employee),
            "manager" => Ok(Self::Manager),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

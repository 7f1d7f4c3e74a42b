//! Pure role-gating policy.
//!
//! Mirrors the hosted backend's row-level-security rules as a single
//! in-process authority, so workflow services and the database agree on
//! who may do what.

use crate::identity::domain::Role;
use std::fmt;
use thiserror::Error;

/// Named capability groups gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Review decisions: approve, reject, and reschedule work orders.
    ReviewWorkOrders,
    /// Execution updates: start, pause, resume, complete, and checklist
    /// toggling.
    ExecuteWorkOrders,
}

impl Capability {
    /// Returns a short human-readable capability name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReviewWorkOrders => "review work orders",
            Self::ExecuteWorkOrders => "execute work orders",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role lacks a required capability.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("role {role} may not {capability}")]
pub struct AccessDenied {
    /// The acting role.
    pub role: Role,
    /// The capability the operation required.
    pub capability: Capability,
}

/// Role-to-capability policy.
///
/// Stateless; every check is a pure function of the role.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Returns whether the role carries the capability.
    #[must_use]
    pub const fn allows(role: Role, capability: Capability) -> bool {
        match capability {
            Capability::ReviewWorkOrders => matches!(role, Role::Admin | Role::Manager),
            Capability::ExecuteWorkOrders => {
                matches!(role, Role::Admin | Role::Manager | Role::Employee)
            }
        }
    }

    /// Requires the capability, returning a typed denial otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the role lacks the capability.
    pub const fn require(role: Role, capability: Capability) -> Result<(), AccessDenied> {
        if Self::allows(role, capability) {
            Ok(())
        } else {
            Err(AccessDenied { role, capability })
        }
    }
}

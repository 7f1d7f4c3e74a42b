//! Profile aggregate for staff identity.

use super::{IdentityDomainError, ProfileId, Role};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Staff profile linked one-to-one to a hosted backend account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    id: ProfileId,
    display_name: String,
    email: String,
    role: Role,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProfileData {
    /// Persisted profile identifier.
    pub id: ProfileId,
    /// Persisted display name.
    pub display_name: String,
    /// Persisted email address.
    pub email: String,
    /// Persisted role.
    pub role: Role,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a new profile with a validated name and email.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyDisplayName`] when the name is
    /// blank, or [`IdentityDomainError::InvalidEmail`] when the email lacks
    /// a local part or domain.
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        clock: &impl Clock,
    ) -> Result<Self, IdentityDomainError> {
        let display_name = normalize_display_name(display_name.into())?;
        let email = normalize_email(email.into())?;

        Ok(Self {
            id: ProfileId::new(),
            display_name,
            email,
            role,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a profile from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProfileData) -> Self {
        Self {
            id: data.id,
            display_name: data.display_name,
            email: data.email,
            role: data.role,
            created_at: data.created_at,
        }
    }

    /// Returns the profile identifier.
    #[must_use]
    pub const fn id(&self) -> ProfileId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the coarse role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn normalize_display_name(raw: String) -> Result<String, IdentityDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdentityDomainError::EmptyDisplayName);
    }
    Ok(trimmed.to_owned())
}

/// Accepts any `local@domain` shape with non-empty halves.
///
/// Full RFC validation is the hosted backend's concern; this check only
/// rejects values that could never reach a mailbox.
fn normalize_email(raw: String) -> Result<String, IdentityDomainError> {
    let trimmed = raw.trim();
    let valid = trimmed
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid {
        return Err(IdentityDomainError::InvalidEmail(raw));
    }
    Ok(trimmed.to_ascii_lowercase())
}

//! Requestor contact details captured from the public form.

use super::WorkOrderDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized department name used as a grouping key in reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentName(String);

impl DepartmentName {
    /// Creates a validated department name.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::EmptyDepartment`] when the value is
    /// blank after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, WorkOrderDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WorkOrderDomainError::EmptyDepartment);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the department name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DepartmentName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DepartmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contact block identifying who asked for the work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requestor {
    name: String,
    email: String,
    phone: Option<String>,
    department: DepartmentName,
}

impl Requestor {
    /// Creates a validated requestor.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::EmptyRequestorName`] when the name is
    /// blank or [`WorkOrderDomainError::InvalidRequestorEmail`] when the
    /// email lacks a local part or domain.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
        department: DepartmentName,
    ) -> Result<Self, WorkOrderDomainError> {
        let name = name.into();
        let trimmed_name = name.trim();
        if trimmed_name.is_empty() {
            return Err(WorkOrderDomainError::EmptyRequestorName);
        }

        let email = email.into();
        let trimmed_email = email.trim();
        let plausible = trimmed_email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !plausible {
            return Err(WorkOrderDomainError::InvalidRequestorEmail(email));
        }

        let phone = phone
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        Ok(Self {
            name: trimmed_name.to_owned(),
            email: trimmed_email.to_ascii_lowercase(),
            phone,
            department,
        })
    }

    /// Returns the requestor name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalized email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the phone number, if one was provided.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the requesting department.
    #[must_use]
    pub const fn department(&self) -> &DepartmentName {
        &self.department
    }
}

//! Identifier types for the work-order domain.

use super::ParseWorkOrderCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a work-order record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkOrderId(Uuid);

impl WorkOrderId {
    /// Creates a new random work-order identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a work-order identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for WorkOrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for WorkOrderId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for WorkOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable sequential work-order code in `WO-<n>` form.
///
/// Codes are allocated server-side from a single sequence and shown to
/// requestors as the public handle for status lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkOrderCode(u64);

impl WorkOrderCode {
    /// Creates a code from a raw sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`ParseWorkOrderCodeError`] when the sequence number is zero.
    pub const fn from_sequence(sequence: u64) -> Result<Self, ParseWorkOrderCodeError> {
        if sequence == 0 {
            return Err(ParseWorkOrderCodeError::ZeroSequence);
        }
        Ok(Self(sequence))
    }

    /// Returns the underlying sequence number.
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WorkOrderCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WO-{}", self.0)
    }
}

impl TryFrom<&str> for WorkOrderCode {
    type Error = ParseWorkOrderCodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        let digits = trimmed
            .strip_prefix("WO-")
            .ok_or_else(|| ParseWorkOrderCodeError::Malformed(value.to_owned()))?;
        let sequence: u64 = digits
            .parse()
            .map_err(|_| ParseWorkOrderCodeError::Malformed(value.to_owned()))?;
        Self::from_sequence(sequence)
    }
}

impl TryFrom<String> for WorkOrderCode {
    type Error = ParseWorkOrderCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<WorkOrderCode> for String {
    fn from(code: WorkOrderCode) -> Self {
        code.to_string()
    }
}

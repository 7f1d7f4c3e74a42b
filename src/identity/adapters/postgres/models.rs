//! Diesel row models for profile persistence.

use super::schema::profiles;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for profile records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProfileRow {
    /// Profile identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub display_name: String,
    /// Normalized email address.
    pub email: String,
    /// Coarse role.
    pub role: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for profile records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = profiles)]
pub struct NewProfileRow {
    /// Profile identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub display_name: String,
    /// Normalized email address.
    pub email: String,
    /// Coarse role.
    pub role: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

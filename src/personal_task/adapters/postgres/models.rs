//! Diesel row models for personal-task persistence.

use super::schema::personal_tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for personal-task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = personal_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PersonalTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning profile identifier.
    pub owner: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Priority level.
    pub priority: String,
    /// Board status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for personal-task records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = personal_tasks)]
pub struct PersonalTaskRecord {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning profile identifier.
    pub owner: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Priority level.
    pub priority: String,
    /// Board status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

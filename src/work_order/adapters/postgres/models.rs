//! Diesel row models for work-order persistence.

use super::schema::work_orders;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for work-order records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = work_orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WorkOrderRow {
    /// Internal identifier.
    pub id: uuid::Uuid,
    /// Public sequential code.
    pub code: String,
    /// Requestor JSON payload.
    pub requestor: Value,
    /// Request title.
    pub title: String,
    /// Request description.
    pub description: String,
    /// Request category.
    pub category: String,
    /// Request location.
    pub location: String,
    /// Priority level.
    pub priority: String,
    /// Lifecycle status.
    pub status: String,
    /// Currently requested date.
    pub requested_date: NaiveDate,
    /// Schedule change JSON payload.
    pub schedule_change: Option<Value>,
    /// Approval JSON payload.
    pub approval: Option<Value>,
    /// Rejection JSON payload.
    pub rejection: Option<Value>,
    /// Execution start timestamp.
    pub started_at: Option<DateTime<Utc>>,
    /// Most recent pause timestamp.
    pub paused_at: Option<DateTime<Utc>>,
    /// Most recent resume timestamp.
    pub resumed_at: Option<DateTime<Utc>>,
    /// Completion JSON payload.
    pub completion: Option<Value>,
    /// Accumulated timer seconds.
    pub timer_elapsed_seconds: i64,
    /// Timer-running flag.
    pub timer_active: bool,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for work-order records.
///
/// `treat_none_as_null` keeps the row an exact mirror of the aggregate:
/// a `None` clears the column rather than leaving a stale value.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = work_orders)]
#[diesel(treat_none_as_null = true)]
pub struct WorkOrderRecord {
    /// Internal identifier.
    pub id: uuid::Uuid,
    /// Public sequential code.
    pub code: String,
    /// Requestor JSON payload.
    pub requestor: Value,
    /// Request title.
    pub title: String,
    /// Request description.
    pub description: String,
    /// Request category.
    pub category: String,
    /// Request location.
    pub location: String,
    /// Priority level.
    pub priority: String,
    /// Lifecycle status.
    pub status: String,
    /// Currently requested date.
    pub requested_date: NaiveDate,
    /// Schedule change JSON payload.
    pub schedule_change: Option<Value>,
    /// Approval JSON payload.
    pub approval: Option<Value>,
    /// Rejection JSON payload.
    pub rejection: Option<Value>,
    /// Execution start timestamp.
    pub started_at: Option<DateTime<Utc>>,
    /// Most recent pause timestamp.
    pub paused_at: Option<DateTime<Utc>>,
    /// Most recent resume timestamp.
    pub resumed_at: Option<DateTime<Utc>>,
    /// Completion JSON payload.
    pub completion: Option<Value>,
    /// Accumulated timer seconds.
    pub timer_elapsed_seconds: i64,
    /// Timer-running flag.
    pub timer_active: bool,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

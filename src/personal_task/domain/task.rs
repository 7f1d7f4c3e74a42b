//! Personal task aggregate and its enums.

use super::{ParseTaskPriorityError, ParseTaskStatusError, PersonalTaskDomainError, TaskId};
use crate::identity::domain::ProfileId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority of a personal task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Whenever time allows.
    Low,
    /// Default priority.
    Medium,
    /// Needs attention soon.
    High,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Board column of a personal task.
///
/// Unlike work orders there is no state machine; any status may follow
/// any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started.
    Todo,
    /// Being worked on.
    InProgress,
    /// Finished.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Personal to-do item owned by one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalTask {
    id: TaskId,
    owner: ProfileId,
    title: String,
    description: String,
    priority: TaskPriority,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted personal task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedPersonalTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner.
    pub owner: ProfileId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl PersonalTask {
    /// Creates a new task in `Todo` status.
    ///
    /// # Errors
    ///
    /// Returns [`PersonalTaskDomainError::EmptyTitle`] when the title is
    /// blank after trimming.
    pub fn new(
        owner: ProfileId,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
        clock: &impl Clock,
    ) -> Result<Self, PersonalTaskDomainError> {
        let title = validate_title(title.into())?;
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            owner,
            title,
            description: description.into().trim().to_owned(),
            priority,
            status: TaskStatus::Todo,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedPersonalTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning profile.
    #[must_use]
    pub const fn owner(&self) -> ProfileId {
        self.owner
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the board status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the title and description.
    ///
    /// # Errors
    ///
    /// Returns [`PersonalTaskDomainError::EmptyTitle`] when the new title
    /// is blank after trimming.
    pub fn edit(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), PersonalTaskDomainError> {
        self.title = validate_title(title.into())?;
        self.description = description.into().trim().to_owned();
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Changes the priority.
    pub fn set_priority(&mut self, priority: TaskPriority, clock: &impl Clock) {
        self.priority = priority;
        self.updated_at = clock.utc();
    }

    /// Moves the task to another board column.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.updated_at = clock.utc();
    }
}

fn validate_title(raw: String) -> Result<String, PersonalTaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PersonalTaskDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}

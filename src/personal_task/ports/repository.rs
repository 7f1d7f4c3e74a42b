//! Repository port for personal-task persistence.

use crate::identity::domain::ProfileId;
use crate::personal_task::domain::{PersonalTask, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for personal-task repository operations.
pub type PersonalTaskRepositoryResult<T> = Result<T, PersonalTaskRepositoryError>;

/// Personal-task persistence contract.
#[async_trait]
pub trait PersonalTaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`PersonalTaskRepositoryError::DuplicateTask`] when the task
    /// ID already exists.
    async fn store(&self, task: &PersonalTask) -> PersonalTaskRepositoryResult<()>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`PersonalTaskRepositoryError::NotFound`] when the task does
    /// not exist.
    async fn update(&self, task: &PersonalTask) -> PersonalTaskRepositoryResult<()>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`PersonalTaskRepositoryError::NotFound`] when the task does
    /// not exist.
    async fn delete(&self, id: TaskId) -> PersonalTaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> PersonalTaskRepositoryResult<Option<PersonalTask>>;

    /// Returns all tasks belonging to the owner in creation order.
    async fn list_by_owner(
        &self,
        owner: ProfileId,
    ) -> PersonalTaskRepositoryResult<Vec<PersonalTask>>;
}

/// Errors returned by personal-task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PersonalTaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PersonalTaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

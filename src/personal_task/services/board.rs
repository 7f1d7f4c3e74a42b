//! Service layer for owner-scoped task boards.

use crate::identity::domain::{Profile, ProfileId};
use crate::personal_task::{
    domain::{PersonalTask, PersonalTaskDomainError, TaskId, TaskPriority, TaskStatus},
    ports::{PersonalTaskRepository, PersonalTaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task-board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Only the owner may mutate or delete a task.
    #[error("task {task} does not belong to profile {actor}")]
    NotOwner {
        /// The task being mutated.
        task: TaskId,
        /// The acting profile.
        actor: ProfileId,
    },
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] PersonalTaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] PersonalTaskRepositoryError),
}

/// Result type for task-board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Owner-scoped task-board orchestration service.
///
/// The ownership check mirrors the hosted backend's row policy: reads and
/// writes are both scoped to the acting profile.
#[derive(Clone)]
pub struct TaskBoardService<R, C>
where
    R: PersonalTaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskBoardService<R, C>
where
    R: PersonalTaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task-board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task on the actor's own board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError`] when validation fails or the repository
    /// rejects persistence.
    pub async fn create(
        &self,
        actor: &Profile,
        title: impl Into<String> + Send,
        description: impl Into<String> + Send,
        priority: TaskPriority,
    ) -> TaskBoardResult<PersonalTask> {
        let task = PersonalTask::new(actor.id(), title, description, priority, &*self.clock)?;
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Returns the actor's board in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when persistence lookup
    /// fails.
    pub async fn board(&self, actor: &Profile) -> TaskBoardResult<Vec<PersonalTask>> {
        Ok(self.repository.list_by_owner(actor.id()).await?)
    }

    /// Replaces a task's title and description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError`] when the actor does not own the task,
    /// validation fails, or persistence fails.
    pub async fn edit(
        &self,
        actor: &Profile,
        id: TaskId,
        title: impl Into<String> + Send,
        description: impl Into<String> + Send,
    ) -> TaskBoardResult<PersonalTask> {
        let mut task = self.find_owned(actor, id).await?;
        task.edit(title, description, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Moves a task to another board column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError`] when the actor does not own the task or
    /// persistence fails.
    pub async fn set_status(
        &self,
        actor: &Profile,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskBoardResult<PersonalTask> {
        let mut task = self.find_owned(actor, id).await?;
        task.set_status(status, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Changes a task's priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError`] when the actor does not own the task or
    /// persistence fails.
    pub async fn set_priority(
        &self,
        actor: &Profile,
        id: TaskId,
        priority: TaskPriority,
    ) -> TaskBoardResult<PersonalTask> {
        let mut task = self.find_owned(actor, id).await?;
        task.set_priority(priority, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task from the actor's board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError`] when the actor does not own the task or
    /// persistence fails.
    pub async fn delete(&self, actor: &Profile, id: TaskId) -> TaskBoardResult<()> {
        let task = self.find_owned(actor, id).await?;
        self.repository.delete(task.id()).await?;
        Ok(())
    }

    async fn find_owned(&self, actor: &Profile, id: TaskId) -> TaskBoardResult<PersonalTask> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PersonalTaskRepositoryError::NotFound(id))?;
        if task.owner() != actor.id() {
            return Err(TaskBoardError::NotOwner {
                task: id,
                actor: actor.id(),
            });
        }
        Ok(task)
    }
}

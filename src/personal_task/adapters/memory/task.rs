//! In-memory repository for personal-task tests and local mode.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::domain::ProfileId;
use crate::personal_task::{
    domain::{PersonalTask, TaskId},
    ports::{PersonalTaskRepository, PersonalTaskRepositoryError, PersonalTaskRepositoryResult},
};

/// Thread-safe in-memory personal-task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersonalTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, PersonalTask>,
    owner_index: HashMap<ProfileId, Vec<TaskId>>,
}

impl InMemoryPersonalTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> PersonalTaskRepositoryError {
    PersonalTaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl PersonalTaskRepository for InMemoryPersonalTaskRepository {
    async fn store(&self, task: &PersonalTask) -> PersonalTaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(PersonalTaskRepositoryError::DuplicateTask(task.id()));
        }
        state
            .owner_index
            .entry(task.owner())
            .or_default()
            .push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &PersonalTask) -> PersonalTaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(PersonalTaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> PersonalTaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let task = state
            .tasks
            .remove(&id)
            .ok_or(PersonalTaskRepositoryError::NotFound(id))?;
        if let Some(ids) = state.owner_index.get_mut(&task.owner()) {
            ids.retain(|task_id| *task_id != id);
            if ids.is_empty() {
                state.owner_index.remove(&task.owner());
            }
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> PersonalTaskRepositoryResult<Option<PersonalTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_by_owner(
        &self,
        owner: ProfileId,
    ) -> PersonalTaskRepositoryResult<Vec<PersonalTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let tasks = state
            .owner_index
            .get(&owner)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }
}

//! `PostgreSQL` repository implementation for personal-task storage.

use super::{
    models::{PersonalTaskRecord, PersonalTaskRow},
    schema::personal_tasks,
};
use crate::identity::domain::ProfileId;
use crate::personal_task::{
    domain::{PersistedPersonalTaskData, PersonalTask, TaskId, TaskPriority, TaskStatus},
    ports::{PersonalTaskRepository, PersonalTaskRepositoryError, PersonalTaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by personal-task adapters.
pub type PersonalTaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed personal-task repository.
#[derive(Debug, Clone)]
pub struct PostgresPersonalTaskRepository {
    pool: PersonalTaskPgPool,
}

impl PostgresPersonalTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PersonalTaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> PersonalTaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> PersonalTaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(PersonalTaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(PersonalTaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl PersonalTaskRepository for PostgresPersonalTaskRepository {
    async fn store(&self, task: &PersonalTask) -> PersonalTaskRepositoryResult<()> {
        let task_id = task.id();
        let record = to_record(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(personal_tasks::table)
                .values(&record)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        PersonalTaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => PersonalTaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &PersonalTask) -> PersonalTaskRepositoryResult<()> {
        let task_id = task.id();
        let record = to_record(task);

        self.run_blocking(move |connection| {
            let updated = diesel::update(personal_tasks::table.find(task_id.into_inner()))
                .set(&record)
                .execute(connection)
                .map_err(PersonalTaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(PersonalTaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> PersonalTaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(personal_tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(PersonalTaskRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(PersonalTaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> PersonalTaskRepositoryResult<Option<PersonalTask>> {
        self.run_blocking(move |connection| {
            let row = personal_tasks::table
                .find(id.into_inner())
                .select(PersonalTaskRow::as_select())
                .first::<PersonalTaskRow>(connection)
                .optional()
                .map_err(PersonalTaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_by_owner(
        &self,
        owner: ProfileId,
    ) -> PersonalTaskRepositoryResult<Vec<PersonalTask>> {
        self.run_blocking(move |connection| {
            let rows = personal_tasks::table
                .filter(personal_tasks::owner.eq(owner.into_inner()))
                .order(personal_tasks::created_at.asc())
                .select(PersonalTaskRow::as_select())
                .load::<PersonalTaskRow>(connection)
                .map_err(PersonalTaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_record(task: &PersonalTask) -> PersonalTaskRecord {
    PersonalTaskRecord {
        id: task.id().into_inner(),
        owner: task.owner().into_inner(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        priority: task.priority().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: PersonalTaskRow) -> PersonalTaskRepositoryResult<PersonalTask> {
    let priority = TaskPriority::try_from(row.priority.as_str())
        .map_err(PersonalTaskRepositoryError::persistence)?;
    let status = TaskStatus::try_from(row.status.as_str())
        .map_err(PersonalTaskRepositoryError::persistence)?;
    let data = PersistedPersonalTaskData {
        id: TaskId::from_uuid(row.id),
        owner: ProfileId::from_uuid(row.owner),
        title: row.title,
        description: row.description,
        priority,
        status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    };
    Ok(PersonalTask::from_persisted(data))
}

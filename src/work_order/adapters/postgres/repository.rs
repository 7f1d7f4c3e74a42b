//! `PostgreSQL` repository implementation for work-order storage.

use super::{
    models::{WorkOrderRecord, WorkOrderRow},
    schema::work_orders,
};
use crate::work_order::{
    domain::{
        Approval, Completion, PersistedWorkOrderData, Priority, Rejection, Requestor,
        ScheduleChange, WorkOrder, WorkOrderCode, WorkOrderDetails, WorkOrderId, WorkOrderStatus,
    },
    ports::{WorkOrderRepository, WorkOrderRepositoryError, WorkOrderRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by work-order adapters.
pub type WorkOrderPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed work-order repository.
#[derive(Debug, Clone)]
pub struct PostgresWorkOrderRepository {
    pool: WorkOrderPgPool,
}

impl PostgresWorkOrderRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: WorkOrderPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> WorkOrderRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> WorkOrderRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(WorkOrderRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(WorkOrderRepositoryError::persistence)?
    }
}

#[async_trait]
impl WorkOrderRepository for PostgresWorkOrderRepository {
    async fn store(&self, work_order: &WorkOrder) -> WorkOrderRepositoryResult<()> {
        let work_order_id = work_order.id();
        let code = work_order.code();
        let record = to_record(work_order)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(work_orders::table)
                .values(&record)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_code_unique_violation(info.as_ref()) =>
                    {
                        WorkOrderRepositoryError::DuplicateCode(code)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        WorkOrderRepositoryError::DuplicateWorkOrder(work_order_id)
                    }
                    _ => WorkOrderRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, work_order: &WorkOrder) -> WorkOrderRepositoryResult<()> {
        let work_order_id = work_order.id();
        let record = to_record(work_order)?;

        self.run_blocking(move |connection| {
            let updated = diesel::update(work_orders::table.find(work_order_id.into_inner()))
                .set(&record)
                .execute(connection)
                .map_err(WorkOrderRepositoryError::persistence)?;
            if updated == 0 {
                return Err(WorkOrderRepositoryError::NotFound(work_order_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: WorkOrderId) -> WorkOrderRepositoryResult<Option<WorkOrder>> {
        self.run_blocking(move |connection| {
            let row = work_orders::table
                .find(id.into_inner())
                .select(WorkOrderRow::as_select())
                .first::<WorkOrderRow>(connection)
                .optional()
                .map_err(WorkOrderRepositoryError::persistence)?;
            row.map(row_to_work_order).transpose()
        })
        .await
    }

    async fn find_by_code(
        &self,
        code: WorkOrderCode,
    ) -> WorkOrderRepositoryResult<Option<WorkOrder>> {
        self.run_blocking(move |connection| {
            let row = work_orders::table
                .filter(work_orders::code.eq(code.to_string()))
                .select(WorkOrderRow::as_select())
                .first::<WorkOrderRow>(connection)
                .optional()
                .map_err(WorkOrderRepositoryError::persistence)?;
            row.map(row_to_work_order).transpose()
        })
        .await
    }

    async fn list_all(&self) -> WorkOrderRepositoryResult<Vec<WorkOrder>> {
        self.run_blocking(move |connection| {
            let rows = work_orders::table
                .order(work_orders::created_at.asc())
                .select(WorkOrderRow::as_select())
                .load::<WorkOrderRow>(connection)
                .map_err(WorkOrderRepositoryError::persistence)?;
            rows.into_iter().map(row_to_work_order).collect()
        })
        .await
    }

    async fn list_by_status(
        &self,
        status: WorkOrderStatus,
    ) -> WorkOrderRepositoryResult<Vec<WorkOrder>> {
        self.run_blocking(move |connection| {
            let rows = work_orders::table
                .filter(work_orders::status.eq(status.as_str()))
                .order(work_orders::created_at.asc())
                .select(WorkOrderRow::as_select())
                .load::<WorkOrderRow>(connection)
                .map_err(WorkOrderRepositoryError::persistence)?;
            rows.into_iter().map(row_to_work_order).collect()
        })
        .await
    }
}

fn to_record(work_order: &WorkOrder) -> WorkOrderRepositoryResult<WorkOrderRecord> {
    let requestor = serde_json::to_value(work_order.requestor())
        .map_err(WorkOrderRepositoryError::persistence)?;
    let schedule_change = work_order
        .schedule_change()
        .map(serde_json::to_value)
        .transpose()
        .map_err(WorkOrderRepositoryError::persistence)?;
    let approval = work_order
        .approval()
        .map(serde_json::to_value)
        .transpose()
        .map_err(WorkOrderRepositoryError::persistence)?;
    let rejection = work_order
        .rejection()
        .map(serde_json::to_value)
        .transpose()
        .map_err(WorkOrderRepositoryError::persistence)?;
    let completion = work_order
        .completion()
        .map(serde_json::to_value)
        .transpose()
        .map_err(WorkOrderRepositoryError::persistence)?;

    Ok(WorkOrderRecord {
        id: work_order.id().into_inner(),
        code: work_order.code().to_string(),
        requestor,
        title: work_order.details().title().to_owned(),
        description: work_order.details().description().to_owned(),
        category: work_order.details().category().to_owned(),
        location: work_order.details().location().to_owned(),
        priority: work_order.priority().as_str().to_owned(),
        status: work_order.status().as_str().to_owned(),
        requested_date: work_order.requested_date(),
        schedule_change,
        approval,
        rejection,
        started_at: work_order.started_at(),
        paused_at: work_order.paused_at(),
        resumed_at: work_order.resumed_at(),
        completion,
        timer_elapsed_seconds: work_order.timer_elapsed_seconds(),
        timer_active: work_order.timer_active(),
        created_at: work_order.created_at(),
        updated_at: work_order.updated_at(),
    })
}

fn row_to_work_order(row: WorkOrderRow) -> WorkOrderRepositoryResult<WorkOrder> {
    let WorkOrderRow {
        id,
        code: persisted_code,
        requestor: persisted_requestor,
        title,
        description,
        category,
        location,
        priority: persisted_priority,
        status: persisted_status,
        requested_date,
        schedule_change,
        approval,
        rejection,
        started_at,
        paused_at,
        resumed_at,
        completion,
        timer_elapsed_seconds,
        timer_active,
        created_at,
        updated_at,
    } = row;

    let code = WorkOrderCode::try_from(persisted_code.as_str())
        .map_err(WorkOrderRepositoryError::persistence)?;
    let requestor = serde_json::from_value::<Requestor>(persisted_requestor)
        .map_err(WorkOrderRepositoryError::persistence)?;
    let details = WorkOrderDetails::new(title, description, category, location)
        .map_err(WorkOrderRepositoryError::persistence)?;
    let priority = Priority::try_from(persisted_priority.as_str())
        .map_err(WorkOrderRepositoryError::persistence)?;
    let status = WorkOrderStatus::try_from(persisted_status.as_str())
        .map_err(WorkOrderRepositoryError::persistence)?;
    let schedule_change = schedule_change
        .map(serde_json::from_value::<ScheduleChange>)
        .transpose()
        .map_err(WorkOrderRepositoryError::persistence)?;
    let approval = approval
        .map(serde_json::from_value::<Approval>)
        .transpose()
        .map_err(WorkOrderRepositoryError::persistence)?;
    let rejection = rejection
        .map(serde_json::from_value::<Rejection>)
        .transpose()
        .map_err(WorkOrderRepositoryError::persistence)?;
    let completion = completion
        .map(serde_json::from_value::<Completion>)
        .transpose()
        .map_err(WorkOrderRepositoryError::persistence)?;

    let data = PersistedWorkOrderData {
        id: WorkOrderId::from_uuid(id),
        code,
        requestor,
        details,
        priority,
        status,
        requested_date,
        schedule_change,
        approval,
        rejection,
        started_at,
        paused_at,
        resumed_at,
        completion,
        timer_elapsed_seconds,
        timer_active,
        created_at,
        updated_at,
    };
    Ok(WorkOrder::from_persisted(data))
}

fn is_code_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_work_orders_code_unique")
}

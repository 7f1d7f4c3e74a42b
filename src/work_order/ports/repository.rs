//! Repository port for work-order persistence and lookup.

use crate::work_order::domain::{WorkOrder, WorkOrderCode, WorkOrderId, WorkOrderStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for work-order repository operations.
pub type WorkOrderRepositoryResult<T> = Result<T, WorkOrderRepositoryError>;

/// Work-order persistence contract.
#[async_trait]
pub trait WorkOrderRepository: Send + Sync {
    /// Stores a new work order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderRepositoryError::DuplicateWorkOrder`] when the ID
    /// already exists or [`WorkOrderRepositoryError::DuplicateCode`] when
    /// the sequential code is already taken.
    async fn store(&self, work_order: &WorkOrder) -> WorkOrderRepositoryResult<()>;

    /// Persists changes to an existing work order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderRepositoryError::NotFound`] when the work order
    /// does not exist.
    async fn update(&self, work_order: &WorkOrder) -> WorkOrderRepositoryResult<()>;

    /// Finds a work order by internal identifier.
    ///
    /// Returns `None` when the work order does not exist.
    async fn find_by_id(&self, id: WorkOrderId) -> WorkOrderRepositoryResult<Option<WorkOrder>>;

    /// Finds a work order by its public sequential code.
    ///
    /// Returns `None` when no work order carries the code.
    async fn find_by_code(
        &self,
        code: WorkOrderCode,
    ) -> WorkOrderRepositoryResult<Option<WorkOrder>>;

    /// Returns all work orders ordered by submission time.
    async fn list_all(&self) -> WorkOrderRepositoryResult<Vec<WorkOrder>>;

    /// Returns all work orders in the given status, ordered by submission
    /// time.
    async fn list_by_status(
        &self,
        status: WorkOrderStatus,
    ) -> WorkOrderRepositoryResult<Vec<WorkOrder>>;
}

/// Errors returned by work-order repository implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkOrderRepositoryError {
    /// A work order with the same identifier already exists.
    #[error("duplicate work order identifier: {0}")]
    DuplicateWorkOrder(WorkOrderId),

    /// A work order with the same sequential code already exists.
    #[error("duplicate work order code: {0}")]
    DuplicateCode(WorkOrderCode),

    /// The work order was not found.
    #[error("work order not found: {0}")]
    NotFound(WorkOrderId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkOrderRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

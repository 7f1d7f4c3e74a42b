//! In-memory repository for work-order tests and local mode.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::work_order::{
    domain::{WorkOrder, WorkOrderCode, WorkOrderId, WorkOrderStatus},
    ports::{WorkOrderRepository, WorkOrderRepositoryError, WorkOrderRepositoryResult},
};

/// Thread-safe in-memory work-order repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkOrderRepository {
    state: Arc<RwLock<InMemoryWorkOrderState>>,
}

#[derive(Debug, Default)]
struct InMemoryWorkOrderState {
    work_orders: HashMap<WorkOrderId, WorkOrder>,
    code_index: HashMap<WorkOrderCode, WorkOrderId>,
    insertion_order: Vec<WorkOrderId>,
}

impl InMemoryWorkOrderRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> WorkOrderRepositoryError {
    WorkOrderRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl WorkOrderRepository for InMemoryWorkOrderRepository {
    async fn store(&self, work_order: &WorkOrder) -> WorkOrderRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.work_orders.contains_key(&work_order.id()) {
            return Err(WorkOrderRepositoryError::DuplicateWorkOrder(work_order.id()));
        }
        if state.code_index.contains_key(&work_order.code()) {
            return Err(WorkOrderRepositoryError::DuplicateCode(work_order.code()));
        }

        state.code_index.insert(work_order.code(), work_order.id());
        state.insertion_order.push(work_order.id());
        state.work_orders.insert(work_order.id(), work_order.clone());
        Ok(())
    }

    async fn update(&self, work_order: &WorkOrder) -> WorkOrderRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if !state.work_orders.contains_key(&work_order.id()) {
            return Err(WorkOrderRepositoryError::NotFound(work_order.id()));
        }
        state.work_orders.insert(work_order.id(), work_order.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: WorkOrderId) -> WorkOrderRepositoryResult<Option<WorkOrder>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.work_orders.get(&id).cloned())
    }

    async fn find_by_code(
        &self,
        code: WorkOrderCode,
    ) -> WorkOrderRepositoryResult<Option<WorkOrder>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let work_order = state
            .code_index
            .get(&code)
            .and_then(|id| state.work_orders.get(id))
            .cloned();
        Ok(work_order)
    }

    async fn list_all(&self) -> WorkOrderRepositoryResult<Vec<WorkOrder>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.work_orders.get(id).cloned())
            .collect())
    }

    async fn list_by_status(
        &self,
        status: WorkOrderStatus,
    ) -> WorkOrderRepositoryResult<Vec<WorkOrder>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.work_orders.get(id))
            .filter(|work_order| work_order.status() == status)
            .cloned()
            .collect())
    }
}

//! Service layer for admin-driven work-order transitions.

use crate::identity::domain::Profile;
use crate::identity::services::{AccessDenied, AccessPolicy, Capability};
use crate::work_order::{
    domain::{
        ActualHours, ApprovalChecklist, ChecklistItemId, WorkOrder, WorkOrderDomainError,
        WorkOrderEvent, WorkOrderId,
    },
    ports::{
        NotificationKind, WorkOrderFeed, WorkOrderNotifier, WorkOrderRepository,
        WorkOrderRepositoryError,
    },
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The acting profile lacks the required capability.
    #[error(transparent)]
    Access(#[from] AccessDenied),
    /// Domain validation or transition guard failed.
    #[error(transparent)]
    Domain(#[from] WorkOrderDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] WorkOrderRepositoryError),
}

/// Result type for workflow service operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Admin workflow orchestration service.
///
/// Every operation authorizes the acting profile, applies the transition
/// on the aggregate, persists the result, then publishes a feed event and
/// fires the matching webhook. Feed and webhook failures are logged and
/// swallowed; the persisted transition stands.
#[derive(Clone)]
pub struct WorkflowService<R, N, F, C>
where
    R: WorkOrderRepository,
    N: WorkOrderNotifier,
    F: WorkOrderFeed,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    notifier: Arc<N>,
    feed: Arc<F>,
    clock: Arc<C>,
}

impl<R, N, F, C> WorkflowService<R, N, F, C>
where
    R: WorkOrderRepository,
    N: WorkOrderNotifier,
    F: WorkOrderFeed,
    C: Clock + Send + Sync,
{
    /// Creates a new workflow service.
    #[must_use]
    pub const fn new(repository: Arc<R>, notifier: Arc<N>, feed: Arc<F>, clock: Arc<C>) -> Self {
        Self {
            repository,
            notifier,
            feed,
            clock,
        }
    }

    /// Approves a pending work order, optionally capturing a checklist.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the actor may not review, the order
    /// is missing or not pending, or persistence fails.
    pub async fn approve(
        &self,
        actor: &Profile,
        id: WorkOrderId,
        checklist_items: Option<Vec<String>>,
    ) -> WorkflowResult<WorkOrder> {
        AccessPolicy::require(actor.role(), Capability::ReviewWorkOrders)?;
        let checklist = checklist_items
            .map(ApprovalChecklist::from_texts)
            .transpose()?;

        let mut work_order = self.find_by_id_or_error(id).await?;
        work_order.approve(actor.id(), checklist, &*self.clock)?;
        self.persist_and_emit(&work_order, Some(NotificationKind::StatusChanged))
            .await?;
        Ok(work_order)
    }

    /// Rejects a pending work order with a required reason.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the actor may not review, the reason
    /// is blank, the order is missing or not pending, or persistence
    /// fails.
    pub async fn reject(
        &self,
        actor: &Profile,
        id: WorkOrderId,
        reason: impl Into<String> + Send,
    ) -> WorkflowResult<WorkOrder> {
        AccessPolicy::require(actor.role(), Capability::ReviewWorkOrders)?;
        let mut work_order = self.find_by_id_or_error(id).await?;
        work_order.reject(actor.id(), reason, &*self.clock)?;
        self.persist_and_emit(&work_order, Some(NotificationKind::StatusChanged))
            .await?;
        Ok(work_order)
    }

    /// Starts execution of an approved work order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the actor may not execute, the order
    /// is missing or not approved, or persistence fails.
    pub async fn start(&self, actor: &Profile, id: WorkOrderId) -> WorkflowResult<WorkOrder> {
        AccessPolicy::require(actor.role(), Capability::ExecuteWorkOrders)?;
        let mut work_order = self.find_by_id_or_error(id).await?;
        work_order.start(&*self.clock)?;
        self.persist_and_emit(&work_order, Some(NotificationKind::StatusChanged))
            .await?;
        Ok(work_order)
    }

    /// Pauses an in-progress work order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the actor may not execute, the order
    /// is missing or not in progress, or persistence fails.
    pub async fn pause(&self, actor: &Profile, id: WorkOrderId) -> WorkflowResult<WorkOrder> {
        AccessPolicy::require(actor.role(), Capability::ExecuteWorkOrders)?;
        let mut work_order = self.find_by_id_or_error(id).await?;
        work_order.pause(&*self.clock)?;
        self.persist_and_emit(&work_order, Some(NotificationKind::StatusChanged))
            .await?;
        Ok(work_order)
    }

    /// Resumes a paused work order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the actor may not execute, the order
    /// is missing or not paused, or persistence fails.
    pub async fn resume(&self, actor: &Profile, id: WorkOrderId) -> WorkflowResult<WorkOrder> {
        AccessPolicy::require(actor.role(), Capability::ExecuteWorkOrders)?;
        let mut work_order = self.find_by_id_or_error(id).await?;
        work_order.resume(&*self.clock)?;
        self.persist_and_emit(&work_order, Some(NotificationKind::StatusChanged))
            .await?;
        Ok(work_order)
    }

    /// Completes an in-progress work order with recorded hours.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the actor may not execute, the hours
    /// are invalid, the order is missing or not in progress, or
    /// persistence fails.
    pub async fn complete(
        &self,
        actor: &Profile,
        id: WorkOrderId,
        actual_hours: f64,
        notes: Option<String>,
    ) -> WorkflowResult<WorkOrder> {
        AccessPolicy::require(actor.role(), Capability::ExecuteWorkOrders)?;
        let hours = ActualHours::new(actual_hours)?;
        let mut work_order = self.find_by_id_or_error(id).await?;
        work_order.complete(actor.id(), hours, notes, &*self.clock)?;
        self.persist_and_emit(&work_order, Some(NotificationKind::StatusChanged))
            .await?;
        Ok(work_order)
    }

    /// Changes the requested date, recording a reason once approved.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the actor may not review, the
    /// schedule is locked, a required reason is missing, the order is
    /// missing, or persistence fails.
    pub async fn reschedule(
        &self,
        actor: &Profile,
        id: WorkOrderId,
        new_date: NaiveDate,
        reason: Option<String>,
    ) -> WorkflowResult<WorkOrder> {
        AccessPolicy::require(actor.role(), Capability::ReviewWorkOrders)?;
        let mut work_order = self.find_by_id_or_error(id).await?;
        work_order.reschedule(new_date, reason, &*self.clock)?;
        self.persist_and_emit(&work_order, Some(NotificationKind::ScheduleChanged))
            .await?;
        Ok(work_order)
    }

    /// Flips one approval checklist item.
    ///
    /// Checklist toggles update the live feed but fire no webhook; the
    /// automation endpoint only cares about status and schedule changes.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the actor may not execute, the
    /// checklist is locked or missing, the item is unknown, the order is
    /// missing, or persistence fails.
    pub async fn toggle_checklist_item(
        &self,
        actor: &Profile,
        id: WorkOrderId,
        item_id: ChecklistItemId,
    ) -> WorkflowResult<WorkOrder> {
        AccessPolicy::require(actor.role(), Capability::ExecuteWorkOrders)?;
        let mut work_order = self.find_by_id_or_error(id).await?;
        work_order.toggle_checklist_item(item_id, &*self.clock)?;
        self.persist_and_emit(&work_order, None).await?;
        Ok(work_order)
    }

    async fn find_by_id_or_error(&self, id: WorkOrderId) -> WorkflowResult<WorkOrder> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| WorkOrderRepositoryError::NotFound(id).into())
    }

    async fn persist_and_emit(
        &self,
        work_order: &WorkOrder,
        notification: Option<NotificationKind>,
    ) -> WorkflowResult<()> {
        self.repository.update(work_order).await?;

        if let Err(err) = self.feed.publish(WorkOrderEvent::Updated {
            work_order: work_order.clone(),
        }) {
            tracing::warn!("change feed publish failed for {}: {err}", work_order.code());
        }
        if let Some(kind) = notification {
            if let Err(err) = self.notifier.notify(kind, work_order).await {
                tracing::warn!("{kind} webhook failed for {}: {err}", work_order.code());
            }
        }
        Ok(())
    }
}

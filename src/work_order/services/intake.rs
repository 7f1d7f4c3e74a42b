//! Service layer for public request intake and status lookup.

use crate::work_order::{
    domain::{
        DepartmentName, Priority, Requestor, WorkOrder, WorkOrderCode, WorkOrderDetails,
        WorkOrderDomainError, WorkOrderEvent, WorkOrderStatus,
    },
    ports::{
        NotificationKind, WorkOrderFeed, WorkOrderNotifier, WorkOrderRepository,
        WorkOrderRepositoryError, WorkOrderSequence, WorkOrderSequenceError,
    },
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for a public form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    requestor_name: String,
    requestor_email: String,
    requestor_phone: Option<String>,
    department: String,
    title: String,
    description: String,
    category: String,
    location: String,
    priority: Priority,
    requested_date: NaiveDate,
}

impl SubmitRequest {
    /// Creates a request with required submission fields.
    #[must_use]
    pub fn new(
        requestor_name: impl Into<String>,
        requestor_email: impl Into<String>,
        department: impl Into<String>,
        title: impl Into<String>,
        priority: Priority,
        requested_date: NaiveDate,
    ) -> Self {
        Self {
            requestor_name: requestor_name.into(),
            requestor_email: requestor_email.into(),
            requestor_phone: None,
            department: department.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            location: String::new(),
            priority,
            requested_date,
        }
    }

    /// Sets the requestor phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.requestor_phone = Some(phone.into());
        self
    }

    /// Sets the request description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the request category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the request location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

/// Trimmed view served to the unauthenticated status-check form.
///
/// Deliberately omits requestor contact details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Public sequential code.
    pub code: WorkOrderCode,
    /// Request title.
    pub title: String,
    /// Current lifecycle status.
    pub status: WorkOrderStatus,
    /// Currently requested date.
    pub requested_date: NaiveDate,
    /// Submission timestamp.
    pub submitted_at: DateTime<Utc>,
}

/// Service-level errors for intake operations.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] WorkOrderDomainError),
    /// Code allocation failed.
    #[error(transparent)]
    Sequence(#[from] WorkOrderSequenceError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] WorkOrderRepositoryError),
}

/// Result type for intake service operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Public intake and status-lookup orchestration service.
#[derive(Clone)]
pub struct IntakeService<R, S, N, F, C>
where
    R: WorkOrderRepository,
    S: WorkOrderSequence,
    N: WorkOrderNotifier,
    F: WorkOrderFeed,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    sequence: Arc<S>,
    notifier: Arc<N>,
    feed: Arc<F>,
    clock: Arc<C>,
}

impl<R, S, N, F, C> IntakeService<R, S, N, F, C>
where
    R: WorkOrderRepository,
    S: WorkOrderSequence,
    N: WorkOrderNotifier,
    F: WorkOrderFeed,
    C: Clock + Send + Sync,
{
    /// Creates a new intake service.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        sequence: Arc<S>,
        notifier: Arc<N>,
        feed: Arc<F>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            sequence,
            notifier,
            feed,
            clock,
        }
    }

    /// Accepts a public form submission as a new pending work order.
    ///
    /// The order is persisted before any notification fires; feed and
    /// webhook failures are logged and never surfaced to the requestor.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError`] when validation fails, code allocation
    /// fails, or the repository rejects persistence.
    pub async fn submit(&self, request: SubmitRequest) -> IntakeResult<WorkOrder> {
        let SubmitRequest {
            requestor_name,
            requestor_email,
            requestor_phone,
            department,
            title,
            description,
            category,
            location,
            priority,
            requested_date,
        } = request;

        let department = DepartmentName::new(department)?;
        let requestor = Requestor::new(requestor_name, requestor_email, requestor_phone, department)?;
        let details = WorkOrderDetails::new(title, description, category, location)?;

        let code = self.sequence.next_code().await?;
        let work_order = WorkOrder::submit(
            code,
            requestor,
            details,
            priority,
            requested_date,
            &*self.clock,
        );
        self.repository.store(&work_order).await?;

        if let Err(err) = self.feed.publish(WorkOrderEvent::Created {
            work_order: work_order.clone(),
        }) {
            tracing::warn!("change feed publish failed for {}: {err}", work_order.code());
        }
        if let Err(err) = self
            .notifier
            .notify(NotificationKind::Submitted, &work_order)
            .await
        {
            tracing::warn!(
                "submission webhook failed for {}: {err}",
                work_order.code()
            );
        }

        Ok(work_order)
    }

    /// Serves the public status-check form.
    ///
    /// Returns `Ok(None)` when no work order carries the code.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Repository`] when persistence lookup fails.
    pub async fn status_report(&self, code: WorkOrderCode) -> IntakeResult<Option<StatusReport>> {
        let work_order = self.repository.find_by_code(code).await?;
        Ok(work_order.map(|order| StatusReport {
            code: order.code(),
            title: order.details().title().to_owned(),
            status: order.status(),
            requested_date: order.requested_date(),
            submitted_at: order.created_at(),
        }))
    }
}

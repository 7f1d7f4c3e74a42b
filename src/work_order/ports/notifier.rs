//! Notifier port for outbound work-order notifications.

use crate::work_order::domain::WorkOrder;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The occasion a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// A new request was submitted.
    Submitted,
    /// The lifecycle status changed.
    StatusChanged,
    /// An approved order's requested date changed.
    ScheduleChanged,
}

impl NotificationKind {
    /// Returns the wire name carried in outbound payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "work_order.submitted",
            Self::StatusChanged => "work_order.status_changed",
            Self::ScheduleChanged => "work_order.schedule_changed",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound notification contract.
///
/// Implementations deliver the full aggregate snapshot to an external
/// automation endpoint. Callers treat delivery failure as non-fatal: the
/// triggering operation has already been persisted when a notification
/// fires.
#[async_trait]
pub trait WorkOrderNotifier: Send + Sync {
    /// Delivers a notification for the given occasion.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderNotifierError`] when the payload cannot be built
    /// or the endpoint rejects delivery.
    async fn notify(
        &self,
        kind: NotificationKind,
        work_order: &WorkOrder,
    ) -> Result<(), WorkOrderNotifierError>;
}

/// Errors returned by notifier implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkOrderNotifierError {
    /// The notification payload could not be rendered or serialized.
    #[error("failed to build notification payload: {0}")]
    Payload(String),

    /// The endpoint was unreachable or rejected the delivery.
    #[error("delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),

    /// The endpoint answered with a non-success status code.
    #[error("endpoint answered {status}")]
    EndpointStatus {
        /// HTTP status code returned by the endpoint.
        status: u16,
    },
}

impl WorkOrderNotifierError {
    /// Wraps a transport error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}

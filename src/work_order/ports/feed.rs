//! Feed port for the live work-order change stream.

use crate::work_order::domain::WorkOrderEvent;
use std::sync::Arc;
use thiserror::Error;

/// Result type for feed operations.
pub type WorkOrderFeedResult<T> = Result<T, WorkOrderFeedError>;

/// Push-based change feed for work-order mutations.
///
/// Publishing is synchronous fan-out: events reach current subscribers in
/// emission order, and publishing with no subscribers is a no-op.
pub trait WorkOrderFeed: Send + Sync {
    /// Publishes an event to all current subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderFeedError`] when the feed has been shut down.
    fn publish(&self, event: WorkOrderEvent) -> WorkOrderFeedResult<()>;
}

/// Errors returned by feed implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkOrderFeedError {
    /// The feed is no longer accepting events.
    #[error("feed closed: {0}")]
    Closed(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkOrderFeedError {
    /// Wraps a channel error.
    pub fn closed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Closed(Arc::new(err))
    }
}

//! Sequence port for server-side work-order code allocation.

use crate::work_order::domain::WorkOrderCode;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for sequence operations.
pub type WorkOrderSequenceResult<T> = Result<T, WorkOrderSequenceError>;

/// Allocator for the public `WO-<n>` code sequence.
///
/// Codes are strictly increasing and never reused, including across
/// process restarts when backed by durable storage.
#[async_trait]
pub trait WorkOrderSequence: Send + Sync {
    /// Allocates the next code in the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderSequenceError`] when the underlying sequence
    /// cannot be advanced.
    async fn next_code(&self) -> WorkOrderSequenceResult<WorkOrderCode>;
}

/// Errors returned by sequence implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkOrderSequenceError {
    /// The sequence produced a value outside the valid code range.
    #[error("sequence produced invalid value: {0}")]
    InvalidValue(i64),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkOrderSequenceError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

//! In-memory code sequence for tests and local mode.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::work_order::{
    domain::WorkOrderCode,
    ports::{WorkOrderSequence, WorkOrderSequenceError, WorkOrderSequenceResult},
};

/// Atomic in-process code sequence starting at `WO-1`.
#[derive(Debug, Default)]
pub struct InMemoryWorkOrderSequence {
    last_allocated: AtomicU64,
}

impl InMemoryWorkOrderSequence {
    /// Creates a sequence whose next code is `WO-1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_allocated: AtomicU64::new(0),
        }
    }

    /// Creates a sequence that resumes after the given sequence number.
    #[must_use]
    pub const fn starting_after(last_allocated: u64) -> Self {
        Self {
            last_allocated: AtomicU64::new(last_allocated),
        }
    }
}

#[async_trait]
impl WorkOrderSequence for InMemoryWorkOrderSequence {
    async fn next_code(&self) -> WorkOrderSequenceResult<WorkOrderCode> {
        let next = self.last_allocated.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        WorkOrderCode::from_sequence(next).map_err(WorkOrderSequenceError::persistence)
    }
}

//! Recording notifier test double.

use async_trait::async_trait;
use std::sync::{
    Arc, RwLock,
    atomic::{AtomicBool, Ordering},
};

use crate::work_order::{
    domain::{WorkOrder, WorkOrderId},
    ports::{NotificationKind, WorkOrderNotifier, WorkOrderNotifierError},
};

/// Notifier that records every delivery instead of sending it.
///
/// Failure injection lets service tests assert that delivery problems
/// never fail the triggering operation.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    deliveries: Arc<RwLock<Vec<(NotificationKind, WorkOrderId)>>>,
    fail: Arc<AtomicBool>,
}

impl RecordingNotifier {
    /// Creates a notifier that accepts every delivery.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent delivery fail until cleared.
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    /// Returns the recorded deliveries in order.
    #[must_use]
    pub fn deliveries(&self) -> Vec<(NotificationKind, WorkOrderId)> {
        match self.deliveries.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl WorkOrderNotifier for RecordingNotifier {
    async fn notify(
        &self,
        kind: NotificationKind,
        work_order: &WorkOrder,
    ) -> Result<(), WorkOrderNotifierError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(WorkOrderNotifierError::EndpointStatus { status: 503 });
        }
        let mut guard = self
            .deliveries
            .write()
            .map_err(|err| WorkOrderNotifierError::Payload(err.to_string()))?;
        guard.push((kind, work_order.id()));
        Ok(())
    }
}

//! Broadcast-channel adapter for the live change feed.

use crate::work_order::{
    domain::WorkOrderEvent,
    ports::{WorkOrderFeed, WorkOrderFeedResult},
};
use tokio::sync::broadcast;

/// Default number of events buffered per subscriber before lagging.
pub const DEFAULT_FEED_CAPACITY: usize = 256;

/// Change feed backed by a `tokio` broadcast channel.
///
/// Subscribers receive events in emission order. A subscriber that falls
/// more than the buffer capacity behind observes a lag gap rather than
/// blocking the publisher.
#[derive(Debug, Clone)]
pub struct BroadcastWorkOrderFeed {
    sender: broadcast::Sender<WorkOrderEvent>,
}

impl BroadcastWorkOrderFeed {
    /// Creates a feed with the given per-subscriber buffer capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Opens a new subscription starting at the next published event.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<WorkOrderEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastWorkOrderFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_CAPACITY)
    }
}

impl WorkOrderFeed for BroadcastWorkOrderFeed {
    fn publish(&self, event: WorkOrderEvent) -> WorkOrderFeedResult<()> {
        // A send error only means no subscriber is currently attached,
        // which the feed contract defines as a no-op.
        drop(self.sender.send(event));
        Ok(())
    }
}

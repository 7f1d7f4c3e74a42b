//! Change-feed events emitted on work-order mutation.

use super::WorkOrder;
use serde::{Deserialize, Serialize};

/// Event published to the live change feed.
///
/// Each event carries a full aggregate snapshot so subscribers never need
/// a follow-up read; events arrive in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkOrderEvent {
    /// A new work order was submitted.
    Created {
        /// Snapshot at submission time.
        work_order: WorkOrder,
    },
    /// An existing work order was mutated.
    Updated {
        /// Snapshot after the mutation.
        work_order: WorkOrder,
    },
}

impl WorkOrderEvent {
    /// Returns the event kind as its wire name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Updated { .. } => "updated",
        }
    }

    /// Returns the carried aggregate snapshot.
    #[must_use]
    pub const fn work_order(&self) -> &WorkOrder {
        match self {
            Self::Created { work_order } | Self::Updated { work_order } => work_order,
        }
    }
}

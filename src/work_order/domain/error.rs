//! Error types for work-order domain validation and parsing.

use super::{ChecklistItemId, WorkOrderId, WorkOrderStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating work-order values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkOrderDomainError {
    /// The requested status change is not permitted by the state machine.
    #[error("work order {id} cannot move from {from} to {to}")]
    InvalidStateTransition {
        /// The work order being mutated.
        id: WorkOrderId,
        /// Current status.
        from: WorkOrderStatus,
        /// Requested status.
        to: WorkOrderStatus,
    },

    /// The title is empty after trimming.
    #[error("work order title must not be empty")]
    EmptyTitle,

    /// The requestor name is empty after trimming.
    #[error("requestor name must not be empty")]
    EmptyRequestorName,

    /// The requestor email is not plausibly formed.
    #[error("invalid requestor email: {0}")]
    InvalidRequestorEmail(String),

    /// The department name is empty after trimming.
    #[error("department name must not be empty")]
    EmptyDepartment,

    /// A rejection was attempted without a usable reason.
    #[error("rejection requires a non-empty reason")]
    EmptyRejectionReason,

    /// An approved order's date change was attempted without a reason.
    #[error("changing an approved work order's date requires a reason")]
    ScheduleChangeReasonRequired,

    /// The schedule can no longer be changed in the current status.
    #[error("work order {id} schedule is locked in status {status}")]
    ScheduleLocked {
        /// The work order being rescheduled.
        id: WorkOrderId,
        /// Status that locks the schedule.
        status: WorkOrderStatus,
    },

    /// Actual hours must be a positive, finite value.
    #[error("invalid actual hours: {0}")]
    InvalidActualHours(f64),

    /// A checklist item text is empty after trimming.
    #[error("checklist item text must not be empty")]
    EmptyChecklistItem,

    /// An approval checklist must contain at least one item.
    #[error("approval checklist must not be empty")]
    EmptyChecklist,

    /// The referenced checklist item does not exist.
    #[error("checklist item not found: {0}")]
    ChecklistItemNotFound(ChecklistItemId),

    /// The work order has no checklist to toggle.
    #[error("work order {0} has no approval checklist")]
    NoChecklist(WorkOrderId),

    /// Checklist items may only be toggled between approval and completion.
    #[error("work order {id} checklist is locked in status {status}")]
    ChecklistLocked {
        /// The work order being toggled.
        id: WorkOrderId,
        /// Status that locks the checklist.
        status: WorkOrderStatus,
    },
}

/// Error returned while parsing work-order statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown work order status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Errors returned while parsing work-order codes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseWorkOrderCodeError {
    /// The code does not follow the `WO-<n>` format.
    #[error("malformed work order code '{0}', expected WO-<n>")]
    Malformed(String),

    /// Sequence numbers start at one.
    #[error("work order code sequence must be positive")]
    ZeroSequence,
}

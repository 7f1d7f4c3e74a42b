//! Domain model for the work-order lifecycle.
//!
//! The work-order domain models request intake, review decisions,
//! execution tracking, scheduling, and completion while keeping all
//! infrastructure concerns outside of the domain boundary.

mod checklist;
mod error;
mod event;
mod ids;
mod priority;
mod requestor;
mod status;
mod work_order;

pub use checklist::{ApprovalChecklist, ChecklistItem, ChecklistItemId};
pub use error::{
    ParsePriorityError, ParseStatusError, ParseWorkOrderCodeError, WorkOrderDomainError,
};
pub use event::WorkOrderEvent;
pub use ids::{WorkOrderCode, WorkOrderId};
pub use priority::Priority;
pub use requestor::{DepartmentName, Requestor};
pub use status::WorkOrderStatus;
pub use work_order::{
    ActualHours, Approval, Completion, PersistedWorkOrderData, Rejection, ScheduleChange,
    WorkOrder, WorkOrderDetails,
};

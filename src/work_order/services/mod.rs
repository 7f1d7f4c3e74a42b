//! Application services for work-order lifecycle orchestration.

mod intake;
mod query;
mod workflow;

pub use intake::{IntakeError, IntakeResult, IntakeService, StatusReport, SubmitRequest};
pub use query::WorkOrderFilter;
pub use workflow::{WorkflowError, WorkflowResult, WorkflowService};

//! Unit tests for the work-order context.

mod checklist_tests;
mod domain_tests;
mod feed_tests;
mod filter_tests;
mod intake_service_tests;

use crate::work_order::domain::{
    DepartmentName, Priority, Requestor, WorkOrder, WorkOrderCode, WorkOrderDetails,
};
use chrono::NaiveDate;
use mockable::DefaultClock;

/// Builds a pending work order with representative fixture data.
pub(super) fn sample_work_order(sequence: u64) -> WorkOrder {
    let department = DepartmentName::new("Youth Ministry").expect("valid department");
    let requestor = Requestor::new(
        "Grace Obi",
        "grace@parish.example.org",
        Some("555-0114".to_owned()),
        department,
    )
    .expect("valid requestor");
    let details = WorkOrderDetails::new(
        "Replace fellowship hall projector bulb",
        "The projector dims badly after ten minutes.",
        "electrical",
        "Fellowship Hall",
    )
    .expect("valid details");
    WorkOrder::submit(
        WorkOrderCode::from_sequence(sequence).expect("valid code"),
        requestor,
        details,
        Priority::Medium,
        NaiveDate::from_ymd_opt(2024, 6, 14).expect("valid date"),
        &DefaultClock,
    )
}

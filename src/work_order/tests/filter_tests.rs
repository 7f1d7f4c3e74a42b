//! Unit tests for the pure admin-view filter.

use crate::identity::domain::ProfileId;
use crate::work_order::domain::{
    DepartmentName, Priority, Requestor, WorkOrder, WorkOrderCode, WorkOrderDetails,
    WorkOrderStatus,
};
use crate::work_order::services::WorkOrderFilter;
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::rstest;

fn order(sequence: u64, department: &str, title: &str, priority: Priority) -> WorkOrder {
    let department = DepartmentName::new(department).expect("valid department");
    let requestor = Requestor::new(
        "Filter Fixture",
        "fixture@parish.example.org",
        None,
        department,
    )
    .expect("valid requestor");
    let details =
        WorkOrderDetails::new(title, "", "general", "Campus").expect("valid details");
    WorkOrder::submit(
        WorkOrderCode::from_sequence(sequence).expect("valid code"),
        requestor,
        details,
        priority,
        NaiveDate::from_ymd_opt(2024, 5, 6).expect("valid date"),
        &DefaultClock,
    )
}

fn fixture_orders() -> Vec<WorkOrder> {
    let mut approved = order(2, "Kitchen", "Degrease the oven hood", Priority::High);
    approved
        .approve(ProfileId::new(), None, &DefaultClock)
        .expect("approve succeeds");

    vec![
        order(1, "Youth Ministry", "Patch drywall in classroom", Priority::Low),
        approved,
        order(3, "Kitchen", "Replace walk-in gasket", Priority::Urgent),
        order(4, "Grounds", "Aerate the north lawn", Priority::Low),
    ]
}

#[rstest]
fn empty_filter_matches_everything_in_order() {
    let orders = fixture_orders();
    let matched = WorkOrderFilter::new().apply(&orders);

    let codes: Vec<String> = matched.iter().map(|o| o.code().to_string()).collect();
    assert_eq!(codes, vec!["WO-1", "WO-2", "WO-3", "WO-4"]);
}

#[rstest]
fn status_filter_selects_only_matching_orders() {
    let orders = fixture_orders();
    let matched = WorkOrderFilter::new()
        .with_status(WorkOrderStatus::Approved)
        .apply(&orders);

    assert_eq!(matched.len(), 1);
    assert_eq!(matched.first().map(|o| o.code().to_string()), Some("WO-2".to_owned()));
}

#[rstest]
fn department_filter_is_case_insensitive_and_preserves_order() {
    let orders = fixture_orders();
    let matched = WorkOrderFilter::new()
        .with_department("  kitchen ")
        .apply(&orders);

    let codes: Vec<String> = matched.iter().map(|o| o.code().to_string()).collect();
    assert_eq!(codes, vec!["WO-2", "WO-3"]);
}

#[rstest]
fn priority_filter_selects_only_matching_orders() {
    let orders = fixture_orders();
    let matched = WorkOrderFilter::new()
        .with_priority(Priority::Low)
        .apply(&orders);

    let codes: Vec<String> = matched.iter().map(|o| o.code().to_string()).collect();
    assert_eq!(codes, vec!["WO-1", "WO-4"]);
}

#[rstest]
#[case("drywall", &["WO-1"])]
#[case("WO-3", &["WO-3"])]
#[case("LAWN", &["WO-4"])]
#[case("fixture", &["WO-1", "WO-2", "WO-3", "WO-4"])]
fn search_matches_code_title_and_requestor(#[case] needle: &str, #[case] expected: &[&str]) {
    let orders = fixture_orders();
    let matched = WorkOrderFilter::new().with_search(needle).apply(&orders);

    let codes: Vec<String> = matched.iter().map(|o| o.code().to_string()).collect();
    assert_eq!(codes, expected.to_vec());
}

#[rstest]
fn blank_search_matches_everything() {
    let orders = fixture_orders();
    let matched = WorkOrderFilter::new().with_search("   ").apply(&orders);
    assert_eq!(matched.len(), orders.len());
}

#[rstest]
fn criteria_combine_as_conjunction() {
    let orders = fixture_orders();
    let matched = WorkOrderFilter::new()
        .with_department("Kitchen")
        .with_priority(Priority::Urgent)
        .apply(&orders);

    let codes: Vec<String> = matched.iter().map(|o| o.code().to_string()).collect();
    assert_eq!(codes, vec!["WO-3"]);
}

#[rstest]
fn filter_does_not_mutate_input() {
    let orders = fixture_orders();
    let before: Vec<String> = orders.iter().map(|o| o.code().to_string()).collect();
    drop(WorkOrderFilter::new().with_search("oven").apply(&orders));
    let after: Vec<String> = orders.iter().map(|o| o.code().to_string()).collect();
    assert_eq!(before, after);
}

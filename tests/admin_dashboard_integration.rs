//! Behavioural integration tests for admin list filtering and reporting.
//!
//! Exercises the fetch-once-filter-locally pattern the admin views use:
//! a handful of requests move through different lifecycle states, then
//! the pure filter and the analytics summary are applied to one fetched
//! snapshot.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use mockable::DefaultClock;
use tokio::runtime::Runtime;
use verger::analytics::AnalyticsSummary;
use verger::identity::domain::{Profile, Role};
use verger::work_order::{
    adapters::{
        broadcast::BroadcastWorkOrderFeed,
        memory::{InMemoryWorkOrderRepository, InMemoryWorkOrderSequence, RecordingNotifier},
    },
    domain::{Priority, WorkOrderStatus},
    ports::WorkOrderRepository,
    services::{IntakeService, SubmitRequest, WorkOrderFilter, WorkflowService},
};

fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

fn request(department: &str, title: &str, priority: Priority) -> SubmitRequest {
    SubmitRequest::new(
        "Dashboard Fixture",
        "fixture@parish.example.org",
        department,
        title,
        priority,
        chrono::NaiveDate::from_ymd_opt(2024, 11, 18).expect("valid date"),
    )
    .with_category("general")
    .with_location("Campus")
}

#[test]
fn fetched_snapshot_filters_and_aggregates_consistently() {
    let rt = test_runtime();
    let repository = Arc::new(InMemoryWorkOrderRepository::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let feed = Arc::new(BroadcastWorkOrderFeed::new(64));
    let clock = Arc::new(DefaultClock);

    let intake = IntakeService::new(
        Arc::clone(&repository),
        Arc::new(InMemoryWorkOrderSequence::new()),
        Arc::clone(&notifier),
        Arc::clone(&feed),
        Arc::clone(&clock),
    );
    let workflow = WorkflowService::new(
        Arc::clone(&repository),
        Arc::clone(&notifier),
        Arc::clone(&feed),
        Arc::clone(&clock),
    );
    let admin = Profile::new(
        "Pat Reilly",
        "pat@parish.example.org",
        Role::Admin,
        &DefaultClock,
    )
    .expect("valid admin");

    let kitchen_leak = rt
        .block_on(intake.submit(request("Kitchen", "Fix the sprayer leak", Priority::Urgent)))
        .expect("submission succeeds");
    let kitchen_shelf = rt
        .block_on(intake.submit(request("Kitchen", "Mount the pantry shelf", Priority::Low)))
        .expect("submission succeeds");
    let grounds_fence = rt
        .block_on(intake.submit(request("Grounds", "Mend the cemetery fence", Priority::Medium)))
        .expect("submission succeeds");

    // Move one kitchen order through to completion and reject the shelf.
    rt.block_on(workflow.approve(&admin, kitchen_leak.id(), None))
        .expect("approve succeeds");
    rt.block_on(workflow.start(&admin, kitchen_leak.id()))
        .expect("start succeeds");
    rt.block_on(workflow.complete(&admin, kitchen_leak.id(), 2.0, None))
        .expect("complete succeeds");
    rt.block_on(workflow.reject(&admin, kitchen_shelf.id(), "Shelf arrives next month"))
        .expect("reject succeeds");

    // One fetch, then pure local filtering.
    let snapshot = rt
        .block_on(repository.list_all())
        .expect("snapshot loads");
    assert_eq!(snapshot.len(), 3);

    let kitchen_only = WorkOrderFilter::new().with_department("Kitchen").apply(&snapshot);
    let kitchen_codes: Vec<String> = kitchen_only.iter().map(|o| o.code().to_string()).collect();
    assert_eq!(kitchen_codes, vec!["WO-1", "WO-2"]);

    let still_open = WorkOrderFilter::new()
        .with_status(WorkOrderStatus::Pending)
        .apply(&snapshot);
    let open_codes: Vec<String> = still_open.iter().map(|o| o.code().to_string()).collect();
    assert_eq!(open_codes, vec![grounds_fence.code().to_string()]);

    let fence_search = WorkOrderFilter::new().with_search("fence").apply(&snapshot);
    assert_eq!(fence_search.len(), 1);

    // The same snapshot feeds the dashboard charts.
    let summary = AnalyticsSummary::from_work_orders(&snapshot);
    assert_eq!(summary.total_requests(), 3);
    assert_eq!(
        summary.status_volume().get(&WorkOrderStatus::Completed),
        Some(&1)
    );
    assert_eq!(
        summary.status_volume().get(&WorkOrderStatus::Rejected),
        Some(&1)
    );
    assert_eq!(
        summary.status_volume().get(&WorkOrderStatus::Pending),
        Some(&1)
    );
    let average_hours = summary.average_actual_hours().expect("average present");
    assert!((average_hours - 2.0).abs() < f64::EPSILON);
    // Everything was submitted this week, so the weekly average equals the
    // total.
    let weekly = summary.average_weekly_volume().expect("average present");
    assert!((weekly - 3.0).abs() < f64::EPSILON);
}

//! Service orchestration tests for public intake and status lookup.

use std::sync::Arc;

use crate::work_order::{
    adapters::{
        broadcast::BroadcastWorkOrderFeed,
        memory::{InMemoryWorkOrderRepository, InMemoryWorkOrderSequence, RecordingNotifier},
    },
    domain::{Priority, WorkOrderCode, WorkOrderStatus},
    ports::{
        NotificationKind, WorkOrderRepository, WorkOrderSequence, WorkOrderSequenceError,
        WorkOrderSequenceResult,
    },
    services::{IntakeError, IntakeService, SubmitRequest},
};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestIntake = IntakeService<
    InMemoryWorkOrderRepository,
    InMemoryWorkOrderSequence,
    RecordingNotifier,
    BroadcastWorkOrderFeed,
    DefaultClock,
>;

struct Harness {
    service: TestIntake,
    repository: Arc<InMemoryWorkOrderRepository>,
    notifier: Arc<RecordingNotifier>,
    feed: Arc<BroadcastWorkOrderFeed>,
}

#[fixture]
fn harness() -> Harness {
    let repository = Arc::new(InMemoryWorkOrderRepository::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let feed = Arc::new(BroadcastWorkOrderFeed::new(16));
    let service = IntakeService::new(
        Arc::clone(&repository),
        Arc::new(InMemoryWorkOrderSequence::new()),
        Arc::clone(&notifier),
        Arc::clone(&feed),
        Arc::new(DefaultClock),
    );
    Harness {
        service,
        repository,
        notifier,
        feed,
    }
}

fn sample_request(title: &str) -> SubmitRequest {
    SubmitRequest::new(
        "Tunde Alabi",
        "tunde@parish.example.org",
        "Facilities",
        title,
        Priority::High,
        NaiveDate::from_ymd_opt(2024, 8, 2).expect("valid date"),
    )
    .with_phone("555-0180")
    .with_description("Water pooling near the east entrance after rain.")
    .with_category("plumbing")
    .with_location("East entrance")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submit_persists_pending_order_with_first_code(harness: Harness) {
    let order = harness
        .service
        .submit(sample_request("Clear east entrance drain"))
        .await
        .expect("submission succeeds");

    assert_eq!(order.code().to_string(), "WO-1");
    assert_eq!(order.status(), WorkOrderStatus::Pending);

    let stored = harness
        .repository
        .find_by_id(order.id())
        .await
        .expect("lookup succeeds");
    assert_eq!(stored, Some(order));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submitted_codes_increase_without_reuse(harness: Harness) {
    let first = harness
        .service
        .submit(sample_request("First request"))
        .await
        .expect("first submission");
    let second = harness
        .service
        .submit(sample_request("Second request"))
        .await
        .expect("second submission");
    let third = harness
        .service
        .submit(sample_request("Third request"))
        .await
        .expect("third submission");

    let sequences = [
        first.code().sequence(),
        second.code().sequence(),
        third.code().sequence(),
    ];
    assert_eq!(sequences, [1, 2, 3]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submit_publishes_created_event_and_webhook(harness: Harness) {
    let mut subscriber = harness.feed.subscribe();

    let order = harness
        .service
        .submit(sample_request("Feed and webhook check"))
        .await
        .expect("submission succeeds");

    let event = subscriber.recv().await.expect("created event");
    assert_eq!(event.kind(), "created");
    assert_eq!(event.work_order().id(), order.id());

    assert_eq!(
        harness.notifier.deliveries(),
        vec![(NotificationKind::Submitted, order.id())]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn webhook_failure_does_not_fail_submission(harness: Harness) {
    harness.notifier.set_failing(true);

    let order = harness
        .service
        .submit(sample_request("Webhook offline"))
        .await
        .expect("submission still succeeds");

    let stored = harness
        .repository
        .find_by_id(order.id())
        .await
        .expect("lookup succeeds");
    assert!(stored.is_some());
    assert!(harness.notifier.deliveries().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submit_rejects_invalid_payload_without_consuming_codes(harness: Harness) {
    let invalid = SubmitRequest::new(
        "Tunde Alabi",
        "tunde@parish.example.org",
        "Facilities",
        "   ",
        Priority::Low,
        NaiveDate::from_ymd_opt(2024, 8, 2).expect("valid date"),
    );
    let result = harness.service.submit(invalid).await;
    assert!(matches!(result, Err(IntakeError::Domain(_))));

    // Validation failed before allocation, so the next order still gets WO-1.
    let order = harness
        .service
        .submit(sample_request("Valid after invalid"))
        .await
        .expect("submission succeeds");
    assert_eq!(order.code().to_string(), "WO-1");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_report_serves_trimmed_public_view(harness: Harness) {
    let order = harness
        .service
        .submit(sample_request("Status lookup check"))
        .await
        .expect("submission succeeds");

    let report = harness
        .service
        .status_report(order.code())
        .await
        .expect("lookup succeeds")
        .expect("report present");

    assert_eq!(report.code, order.code());
    assert_eq!(report.title, "Status lookup check");
    assert_eq!(report.status, WorkOrderStatus::Pending);
    assert_eq!(report.requested_date, order.requested_date());
    assert_eq!(report.submitted_at, order.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_report_unknown_code_returns_none(harness: Harness) {
    let report = harness
        .service
        .status_report(WorkOrderCode::from_sequence(999).expect("valid code"))
        .await
        .expect("lookup succeeds");
    assert_eq!(report, None);
}

mockall::mock! {
    Sequence {}

    #[async_trait::async_trait]
    impl WorkOrderSequence for Sequence {
        async fn next_code(&self) -> WorkOrderSequenceResult<WorkOrderCode>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sequence_failure_surfaces_and_persists_nothing() {
    let repository = Arc::new(InMemoryWorkOrderRepository::new());
    let mut sequence = MockSequence::new();
    sequence.expect_next_code().returning(|| {
        Err(WorkOrderSequenceError::persistence(std::io::Error::other(
            "sequence offline",
        )))
    });
    let service = IntakeService::new(
        Arc::clone(&repository),
        Arc::new(sequence),
        Arc::new(RecordingNotifier::new()),
        Arc::new(BroadcastWorkOrderFeed::new(4)),
        Arc::new(DefaultClock),
    );

    let result = service.submit(sample_request("Never stored")).await;
    assert!(matches!(result, Err(IntakeError::Sequence(_))));

    let all = repository.list_all().await.expect("list succeeds");
    assert!(all.is_empty());
}

//! Unit tests for the broadcast change feed.

use super::sample_work_order;
use crate::work_order::adapters::broadcast::BroadcastWorkOrderFeed;
use crate::work_order::domain::WorkOrderEvent;
use crate::work_order::ports::WorkOrderFeed;
use rstest::rstest;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn subscribers_receive_events_in_emission_order() {
    let feed = BroadcastWorkOrderFeed::new(8);
    let mut subscriber = feed.subscribe();

    let first = sample_work_order(1);
    let second = sample_work_order(2);
    feed.publish(WorkOrderEvent::Created {
        work_order: first.clone(),
    })
    .expect("publish succeeds");
    feed.publish(WorkOrderEvent::Updated {
        work_order: second.clone(),
    })
    .expect("publish succeeds");

    let received_first = subscriber.recv().await.expect("first event");
    assert_eq!(received_first.kind(), "created");
    assert_eq!(received_first.work_order().id(), first.id());

    let received_second = subscriber.recv().await.expect("second event");
    assert_eq!(received_second.kind(), "updated");
    assert_eq!(received_second.work_order().id(), second.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn publish_without_subscribers_is_a_no_op() {
    let feed = BroadcastWorkOrderFeed::new(8);
    assert_eq!(feed.subscriber_count(), 0);

    feed.publish(WorkOrderEvent::Created {
        work_order: sample_work_order(3),
    })
    .expect("publish succeeds with no subscribers");

    // A subscription opened afterwards starts at the next event.
    let mut late_subscriber = feed.subscribe();
    assert!(matches!(
        late_subscriber.try_recv(),
        Err(TryRecvError::Empty)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_subscriber_sees_every_event() {
    let feed = BroadcastWorkOrderFeed::new(8);
    let mut first_subscriber = feed.subscribe();
    let mut second_subscriber = feed.subscribe();

    let order = sample_work_order(4);
    feed.publish(WorkOrderEvent::Created {
        work_order: order.clone(),
    })
    .expect("publish succeeds");

    let from_first = first_subscriber.recv().await.expect("event for first");
    let from_second = second_subscriber.recv().await.expect("event for second");
    assert_eq!(from_first, from_second);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lagging_subscriber_observes_gap_not_blockage() {
    let feed = BroadcastWorkOrderFeed::new(1);
    let mut slow_subscriber = feed.subscribe();

    feed.publish(WorkOrderEvent::Created {
        work_order: sample_work_order(5),
    })
    .expect("publish succeeds");
    feed.publish(WorkOrderEvent::Created {
        work_order: sample_work_order(6),
    })
    .expect("publish succeeds");

    // Capacity one: the first event was overwritten while unread.
    assert!(matches!(
        slow_subscriber.recv().await,
        Err(RecvError::Lagged(_))
    ));
    let survivor = slow_subscriber.recv().await.expect("latest event");
    assert_eq!(survivor.work_order().code().sequence(), 6);
}

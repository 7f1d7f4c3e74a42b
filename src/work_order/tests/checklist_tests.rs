//! Unit tests for approval checklists.

use super::sample_work_order;
use crate::identity::domain::ProfileId;
use crate::work_order::domain::{
    ActualHours, ApprovalChecklist, ChecklistItemId, WorkOrderDomainError, WorkOrderStatus,
};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn safety_checklist() -> ApprovalChecklist {
    ApprovalChecklist::from_texts(vec![
        "Shut off breaker".to_owned(),
        "Post wet floor sign".to_owned(),
        "Photograph finished work".to_owned(),
    ])
    .expect("valid checklist")
}

#[rstest]
fn from_texts_trims_and_keeps_order() {
    let checklist = ApprovalChecklist::from_texts(vec![
        "  First step ".to_owned(),
        "Second step".to_owned(),
    ])
    .expect("valid checklist");

    let texts: Vec<&str> = checklist.items().iter().map(|item| item.text()).collect();
    assert_eq!(texts, vec!["First step", "Second step"]);
    assert_eq!(checklist.len(), 2);
    assert_eq!(checklist.completed_count(), 0);
    assert!(!checklist.is_complete());
}

#[rstest]
fn from_texts_rejects_empty_inputs() {
    assert_eq!(
        ApprovalChecklist::from_texts(Vec::new()),
        Err(WorkOrderDomainError::EmptyChecklist)
    );
    assert_eq!(
        ApprovalChecklist::from_texts(vec!["ok".to_owned(), "  ".to_owned()]),
        Err(WorkOrderDomainError::EmptyChecklistItem)
    );
}

#[rstest]
fn toggle_flips_item_state_both_ways() {
    let mut checklist = safety_checklist();
    let item_id = checklist.items().first().expect("item present").id();

    assert_eq!(checklist.toggle(item_id), Ok(true));
    assert_eq!(checklist.completed_count(), 1);

    assert_eq!(checklist.toggle(item_id), Ok(false));
    assert_eq!(checklist.completed_count(), 0);
}

#[rstest]
fn toggle_unknown_item_is_rejected() {
    let mut checklist = safety_checklist();
    let unknown = ChecklistItemId::new();
    assert_eq!(
        checklist.toggle(unknown),
        Err(WorkOrderDomainError::ChecklistItemNotFound(unknown))
    );
}

#[rstest]
fn is_complete_once_every_item_ticked() {
    let mut checklist = safety_checklist();
    let ids: Vec<ChecklistItemId> = checklist.items().iter().map(|item| item.id()).collect();
    for id in ids {
        checklist.toggle(id).expect("toggle succeeds");
    }
    assert!(checklist.is_complete());
    assert_eq!(checklist.completed_count(), checklist.len());
}

#[rstest]
fn aggregate_toggles_only_between_approval_and_completion(
    clock: DefaultClock,
) -> eyre::Result<()> {
    let reviewer = ProfileId::new();
    let mut order = sample_work_order(20);

    // Pending: nothing to toggle yet.
    let premature = order.toggle_checklist_item(ChecklistItemId::new(), &clock);
    ensure!(
        premature
            == Err(WorkOrderDomainError::ChecklistLocked {
                id: order.id(),
                status: WorkOrderStatus::Pending,
            })
    );

    order.approve(reviewer, Some(safety_checklist()), &clock)?;
    let item_id = order
        .approval()
        .and_then(|approval| approval.checklist())
        .and_then(|checklist| checklist.items().first())
        .map(|item| item.id())
        .expect("checklist item present");

    ensure!(order.toggle_checklist_item(item_id, &clock)?);
    order.start(&clock)?;
    ensure!(!order.toggle_checklist_item(item_id, &clock)?);

    order.complete(reviewer, ActualHours::new(0.5)?, None, &clock)?;
    let locked = order.toggle_checklist_item(item_id, &clock);
    ensure!(
        locked
            == Err(WorkOrderDomainError::ChecklistLocked {
                id: order.id(),
                status: WorkOrderStatus::Completed,
            })
    );
    Ok(())
}

#[rstest]
fn aggregate_without_checklist_reports_no_checklist(clock: DefaultClock) -> eyre::Result<()> {
    let reviewer = ProfileId::new();
    let mut order = sample_work_order(21);
    order.approve(reviewer, None, &clock)?;

    let result = order.toggle_checklist_item(ChecklistItemId::new(), &clock);
    ensure!(result == Err(WorkOrderDomainError::NoChecklist(order.id())));
    Ok(())
}

#[rstest]
fn checklist_survives_approval_snapshot(clock: DefaultClock) -> eyre::Result<()> {
    let reviewer = ProfileId::new();
    let mut order = sample_work_order(22);
    order.approve(reviewer, Some(safety_checklist()), &clock)?;

    let checklist = order
        .approval()
        .and_then(|approval| approval.checklist())
        .expect("checklist captured");
    ensure!(checklist.len() == 3);
    ensure!(!checklist.is_complete());
    Ok(())
}

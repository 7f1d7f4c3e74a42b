//! Domain-focused tests for work-order construction and metadata.

use super::sample_work_order;
use crate::identity::domain::ProfileId;
use crate::work_order::domain::{
    ActualHours, DepartmentName, ParseWorkOrderCodeError, Priority, Requestor, WorkOrderCode,
    WorkOrderDetails, WorkOrderDomainError, WorkOrderStatus,
};
use chrono::NaiveDate;
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn code_displays_in_wo_form() {
    let code = WorkOrderCode::from_sequence(42).expect("valid code");
    assert_eq!(code.to_string(), "WO-42");
    assert_eq!(code.sequence(), 42);
}

#[rstest]
#[case("WO-1", 1)]
#[case("WO-204", 204)]
#[case("  WO-7 ", 7)]
fn code_parses_valid_values(#[case] text: &str, #[case] sequence: u64) {
    let code = WorkOrderCode::try_from(text).expect("valid code");
    assert_eq!(code.sequence(), sequence);
}

#[rstest]
#[case("WO-")]
#[case("WO-abc")]
#[case("42")]
#[case("wo-42")]
fn code_rejects_malformed_values(#[case] text: &str) {
    assert_eq!(
        WorkOrderCode::try_from(text),
        Err(ParseWorkOrderCodeError::Malformed(text.to_owned()))
    );
}

#[rstest]
fn code_rejects_zero_sequence() {
    assert_eq!(
        WorkOrderCode::from_sequence(0),
        Err(ParseWorkOrderCodeError::ZeroSequence)
    );
    assert_eq!(
        WorkOrderCode::try_from("WO-0"),
        Err(ParseWorkOrderCodeError::ZeroSequence)
    );
}

#[rstest]
fn submit_starts_pending_with_clean_slate() {
    let order = sample_work_order(9);

    assert_eq!(order.status(), WorkOrderStatus::Pending);
    assert_eq!(order.code().to_string(), "WO-9");
    assert!(order.approval().is_none());
    assert!(order.rejection().is_none());
    assert!(order.completion().is_none());
    assert!(order.schedule_change().is_none());
    assert_eq!(order.timer_elapsed_seconds(), 0);
    assert!(!order.timer_active());
    assert_eq!(order.created_at(), order.updated_at());
}

#[rstest]
fn details_trim_and_reject_blank_title() {
    let details = WorkOrderDetails::new("  Fix door  ", " sticks ", "carpentry", " Narthex ")
        .expect("valid details");
    assert_eq!(details.title(), "Fix door");
    assert_eq!(details.description(), "sticks");
    assert_eq!(details.location(), "Narthex");

    let result = WorkOrderDetails::new("   ", "", "", "");
    assert_eq!(result, Err(WorkOrderDomainError::EmptyTitle));
}

#[rstest]
fn requestor_validates_contact_block() {
    let department = DepartmentName::new("Music").expect("valid department");
    let requestor = Requestor::new(
        " Chioma Eze ",
        " Chioma@Parish.example.org ",
        Some("  ".to_owned()),
        department,
    )
    .expect("valid requestor");

    assert_eq!(requestor.name(), "Chioma Eze");
    assert_eq!(requestor.email(), "chioma@parish.example.org");
    assert_eq!(requestor.phone(), None);
}

#[rstest]
fn requestor_rejects_blank_name_and_bad_email() {
    let department = DepartmentName::new("Music").expect("valid department");
    let blank = Requestor::new("  ", "ok@parish.example.org", None, department.clone());
    assert_eq!(blank, Err(WorkOrderDomainError::EmptyRequestorName));

    let bad_email = Requestor::new("Name", "not-an-email", None, department);
    assert_eq!(
        bad_email,
        Err(WorkOrderDomainError::InvalidRequestorEmail(
            "not-an-email".to_owned()
        ))
    );
}

#[rstest]
fn department_rejects_blank_values() {
    assert_eq!(
        DepartmentName::new("   "),
        Err(WorkOrderDomainError::EmptyDepartment)
    );
}

#[rstest]
fn approve_records_actor_and_timestamp_together(clock: DefaultClock) -> eyre::Result<()> {
    let reviewer = ProfileId::new();
    let mut order = sample_work_order(10);

    order.approve(reviewer, None, &clock)?;

    let approval = order.approval().expect("approval recorded");
    ensure!(approval.approved_by() == reviewer);
    ensure!(approval.approved_at() >= order.created_at());
    ensure!(approval.checklist().is_none());
    Ok(())
}

#[rstest]
fn reject_requires_non_blank_reason(clock: DefaultClock) -> eyre::Result<()> {
    let reviewer = ProfileId::new();
    let mut order = sample_work_order(11);

    let result = order.reject(reviewer, "   ", &clock);
    ensure!(result == Err(WorkOrderDomainError::EmptyRejectionReason));
    ensure!(order.status() == WorkOrderStatus::Pending);
    ensure!(order.rejection().is_none());

    order.reject(reviewer, "  Duplicate of WO-4  ", &clock)?;
    let rejection = order.rejection().expect("rejection recorded");
    ensure!(rejection.reason() == "Duplicate of WO-4");
    ensure!(rejection.rejected_by() == reviewer);
    Ok(())
}

#[rstest]
fn actual_hours_validation() {
    assert!(ActualHours::new(0.25).is_ok());
    assert_eq!(
        ActualHours::new(0.0),
        Err(WorkOrderDomainError::InvalidActualHours(0.0))
    );
    assert_eq!(
        ActualHours::new(-3.0),
        Err(WorkOrderDomainError::InvalidActualHours(-3.0))
    );
    assert!(ActualHours::new(f64::NAN).is_err());
    assert!(ActualHours::new(f64::INFINITY).is_err());
}

#[rstest]
fn complete_records_hours_and_trims_notes(clock: DefaultClock) -> eyre::Result<()> {
    let reviewer = ProfileId::new();
    let worker = ProfileId::new();
    let mut order = sample_work_order(12);
    order.approve(reviewer, None, &clock)?;
    order.start(&clock)?;

    order.complete(
        worker,
        ActualHours::new(3.5)?,
        Some("  Replaced bulb and cleaned filter.  ".to_owned()),
        &clock,
    )?;

    let completion = order.completion().expect("completion recorded");
    ensure!(completion.completed_by() == worker);
    ensure!((completion.actual_hours().value() - 3.5).abs() < f64::EPSILON);
    ensure!(completion.notes() == Some("Replaced bulb and cleaned filter."));
    ensure!(!order.timer_active());
    Ok(())
}

#[rstest]
fn pending_reschedule_is_free_and_unrecorded(clock: DefaultClock) -> eyre::Result<()> {
    let mut order = sample_work_order(13);
    let new_date = NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date");

    order.reschedule(new_date, None, &clock)?;

    ensure!(order.requested_date() == new_date);
    ensure!(order.schedule_change().is_none());
    Ok(())
}

#[rstest]
fn approved_reschedule_requires_and_records_reason(clock: DefaultClock) -> eyre::Result<()> {
    let reviewer = ProfileId::new();
    let mut order = sample_work_order(14);
    let original_date = order.requested_date();
    order.approve(reviewer, None, &clock)?;
    let new_date = NaiveDate::from_ymd_opt(2024, 7, 8).expect("valid date");

    let missing = order.reschedule(new_date, None, &clock);
    ensure!(missing == Err(WorkOrderDomainError::ScheduleChangeReasonRequired));
    ensure!(order.requested_date() == original_date);

    let blank = order.reschedule(new_date, Some("   ".to_owned()), &clock);
    ensure!(blank == Err(WorkOrderDomainError::ScheduleChangeReasonRequired));

    order.reschedule(new_date, Some("Contractor moved the visit".to_owned()), &clock)?;
    let change = order.schedule_change().expect("change recorded");
    ensure!(change.previous_date() == original_date);
    ensure!(change.reason() == "Contractor moved the visit");
    ensure!(order.requested_date() == new_date);
    Ok(())
}

#[rstest]
fn reschedule_locks_once_execution_begins(clock: DefaultClock) -> eyre::Result<()> {
    let reviewer = ProfileId::new();
    let mut order = sample_work_order(15);
    order.approve(reviewer, None, &clock)?;
    order.start(&clock)?;
    let new_date = NaiveDate::from_ymd_opt(2024, 7, 15).expect("valid date");

    let result = order.reschedule(new_date, Some("too late".to_owned()), &clock);
    ensure!(
        result
            == Err(WorkOrderDomainError::ScheduleLocked {
                id: order.id(),
                status: WorkOrderStatus::InProgress,
            })
    );
    Ok(())
}

#[rstest]
fn timer_runs_only_while_in_progress(clock: DefaultClock) -> eyre::Result<()> {
    let reviewer = ProfileId::new();
    let mut order = sample_work_order(16);
    order.approve(reviewer, None, &clock)?;
    order.start(&clock)?;
    ensure!(order.timer_active());

    order.pause(&clock)?;
    ensure!(!order.timer_active());
    ensure!(order.timer_elapsed_seconds() >= 0);

    order.resume(&clock)?;
    ensure!(order.timer_active());
    ensure!(order.resumed_at().is_some());

    order.complete(reviewer, ActualHours::new(1.0)?, None, &clock)?;
    ensure!(!order.timer_active());
    Ok(())
}

#[rstest]
#[case(Priority::Low, "low")]
#[case(Priority::Medium, "medium")]
#[case(Priority::High, "high")]
#[case(Priority::Urgent, "urgent")]
#[case(Priority::Emergency, "emergency")]
fn priority_storage_round_trip(#[case] priority: Priority, #[case] text: &str) {
    assert_eq!(priority.as_str(), text);
    assert_eq!(Priority::try_from(text), Ok(priority));
}

#[rstest]
#[case(WorkOrderStatus::Pending, "pending")]
#[case(WorkOrderStatus::Approved, "approved")]
#[case(WorkOrderStatus::Rejected, "rejected")]
#[case(WorkOrderStatus::InProgress, "in_progress")]
#[case(WorkOrderStatus::Paused, "paused")]
#[case(WorkOrderStatus::Completed, "completed")]
fn status_storage_round_trip(#[case] status: WorkOrderStatus, #[case] text: &str) {
    assert_eq!(status.as_str(), text);
    assert_eq!(WorkOrderStatus::try_from(text), Ok(status));
}

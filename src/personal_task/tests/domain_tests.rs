//! Domain-focused tests for personal tasks.

use crate::identity::domain::ProfileId;
use crate::personal_task::domain::{
    PersonalTask, PersonalTaskDomainError, TaskPriority, TaskStatus,
};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn new_task_starts_in_todo(clock: DefaultClock) -> eyre::Result<()> {
    let owner = ProfileId::new();
    let task = PersonalTask::new(
        owner,
        "  Order replacement candles ",
        " for Advent services ",
        TaskPriority::Medium,
        &clock,
    )?;

    ensure!(task.owner() == owner);
    ensure!(task.title() == "Order replacement candles");
    ensure!(task.description() == "for Advent services");
    ensure!(task.status() == TaskStatus::Todo);
    ensure!(task.created_at() == task.updated_at());
    Ok(())
}

#[rstest]
fn new_task_rejects_blank_title(clock: DefaultClock) {
    let result = PersonalTask::new(
        ProfileId::new(),
        "   ",
        "",
        TaskPriority::Low,
        &clock,
    );
    assert_eq!(result, Err(PersonalTaskDomainError::EmptyTitle));
}

#[rstest]
fn status_toggles_freely_in_any_direction(clock: DefaultClock) -> eyre::Result<()> {
    let mut task = PersonalTask::new(
        ProfileId::new(),
        "Sort donation receipts",
        "",
        TaskPriority::Low,
        &clock,
    )?;

    task.set_status(TaskStatus::Completed, &clock);
    ensure!(task.status() == TaskStatus::Completed);

    // No workflow: completed tasks may reopen.
    task.set_status(TaskStatus::Todo, &clock);
    ensure!(task.status() == TaskStatus::Todo);

    task.set_status(TaskStatus::InProgress, &clock);
    ensure!(task.status() == TaskStatus::InProgress);
    Ok(())
}

#[rstest]
fn edit_validates_title_and_touches_timestamp(clock: DefaultClock) -> eyre::Result<()> {
    let mut task = PersonalTask::new(
        ProfileId::new(),
        "Original",
        "",
        TaskPriority::High,
        &clock,
    )?;
    let before = task.updated_at();

    let blank = task.edit("  ", "whatever", &clock);
    ensure!(blank == Err(PersonalTaskDomainError::EmptyTitle));
    ensure!(task.title() == "Original");

    task.edit("Renamed", "with detail", &clock)?;
    ensure!(task.title() == "Renamed");
    ensure!(task.description() == "with detail");
    ensure!(task.updated_at() >= before);
    Ok(())
}

#[rstest]
#[case(TaskPriority::Low, "low")]
#[case(TaskPriority::Medium, "medium")]
#[case(TaskPriority::High, "high")]
fn priority_storage_round_trip(#[case] priority: TaskPriority, #[case] text: &str) {
    assert_eq!(priority.as_str(), text);
    assert_eq!(TaskPriority::try_from(text), Ok(priority));
}

#[rstest]
#[case(TaskStatus::Todo, "todo")]
#[case(TaskStatus::InProgress, "in_progress")]
#[case(TaskStatus::Completed, "completed")]
fn status_storage_round_trip(#[case] status: TaskStatus, #[case] text: &str) {
    assert_eq!(status.as_str(), text);
    assert_eq!(TaskStatus::try_from(text), Ok(status));
}

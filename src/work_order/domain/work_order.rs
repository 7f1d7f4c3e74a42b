//! Work-order aggregate root and lifecycle metadata.

use super::{
    ApprovalChecklist, ChecklistItemId, Priority, Requestor, WorkOrderCode, WorkOrderDomainError,
    WorkOrderId, WorkOrderStatus,
};
use crate::identity::domain::ProfileId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Positive, finite hour count recorded at completion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActualHours(f64);

impl ActualHours {
    /// Creates a validated hour count.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::InvalidActualHours`] when the value
    /// is not finite or not positive.
    pub fn new(value: f64) -> Result<Self, WorkOrderDomainError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(WorkOrderDomainError::InvalidActualHours(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying hour count.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Review acceptance metadata, recorded as one value so the actor and
/// timestamp can never diverge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    approved_by: ProfileId,
    approved_at: DateTime<Utc>,
    checklist: Option<ApprovalChecklist>,
}

impl Approval {
    /// Creates approval metadata.
    #[must_use]
    pub const fn new(
        approved_by: ProfileId,
        approved_at: DateTime<Utc>,
        checklist: Option<ApprovalChecklist>,
    ) -> Self {
        Self {
            approved_by,
            approved_at,
            checklist,
        }
    }

    /// Returns the approving profile.
    #[must_use]
    pub const fn approved_by(&self) -> ProfileId {
        self.approved_by
    }

    /// Returns the approval timestamp.
    #[must_use]
    pub const fn approved_at(&self) -> DateTime<Utc> {
        self.approved_at
    }

    /// Returns the checklist captured at approval, if any.
    #[must_use]
    pub const fn checklist(&self) -> Option<&ApprovalChecklist> {
        self.checklist.as_ref()
    }

    /// Returns a mutable handle to the checklist, if one was captured.
    fn checklist_mut(&mut self) -> Option<&mut ApprovalChecklist> {
        self.checklist.as_mut()
    }
}

/// Review decline metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    rejected_by: ProfileId,
    rejected_at: DateTime<Utc>,
    reason: String,
}

impl Rejection {
    /// Creates rejection metadata.
    #[must_use]
    pub const fn new(rejected_by: ProfileId, rejected_at: DateTime<Utc>, reason: String) -> Self {
        Self {
            rejected_by,
            rejected_at,
            reason,
        }
    }

    /// Returns the rejecting profile.
    #[must_use]
    pub const fn rejected_by(&self) -> ProfileId {
        self.rejected_by
    }

    /// Returns the rejection timestamp.
    #[must_use]
    pub const fn rejected_at(&self) -> DateTime<Utc> {
        self.rejected_at
    }

    /// Returns the rejection reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Completion metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    completed_by: ProfileId,
    completed_at: DateTime<Utc>,
    actual_hours: ActualHours,
    notes: Option<String>,
}

impl Completion {
    /// Creates completion metadata.
    #[must_use]
    pub const fn new(
        completed_by: ProfileId,
        completed_at: DateTime<Utc>,
        actual_hours: ActualHours,
        notes: Option<String>,
    ) -> Self {
        Self {
            completed_by,
            completed_at,
            actual_hours,
            notes,
        }
    }

    /// Returns the completing profile.
    #[must_use]
    pub const fn completed_by(&self) -> ProfileId {
        self.completed_by
    }

    /// Returns the completion timestamp.
    #[must_use]
    pub const fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Returns the recorded hours.
    #[must_use]
    pub const fn actual_hours(&self) -> ActualHours {
        self.actual_hours
    }

    /// Returns the completion notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Record of a post-approval requested-date change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleChange {
    previous_date: NaiveDate,
    reason: String,
    changed_at: DateTime<Utc>,
}

impl ScheduleChange {
    /// Creates a schedule-change record.
    #[must_use]
    pub const fn new(previous_date: NaiveDate, reason: String, changed_at: DateTime<Utc>) -> Self {
        Self {
            previous_date,
            reason,
            changed_at,
        }
    }

    /// Returns the date the order previously asked for.
    #[must_use]
    pub const fn previous_date(&self) -> NaiveDate {
        self.previous_date
    }

    /// Returns the recorded reason for the change.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns when the change was recorded.
    #[must_use]
    pub const fn changed_at(&self) -> DateTime<Utc> {
        self.changed_at
    }
}

/// What the work is, free of who asked for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderDetails {
    title: String,
    description: String,
    category: String,
    location: String,
}

impl WorkOrderDetails {
    /// Creates validated work details.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::EmptyTitle`] when the title is blank
    /// after trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, WorkOrderDomainError> {
        let title = title.into();
        let trimmed_title = title.trim();
        if trimmed_title.is_empty() {
            return Err(WorkOrderDomainError::EmptyTitle);
        }

        Ok(Self {
            title: trimmed_title.to_owned(),
            description: description.into().trim().to_owned(),
            category: category.into().trim().to_owned(),
            location: location.into().trim().to_owned(),
        })
    }

    /// Returns the request title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the request description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the request category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the request location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Work-order aggregate root.
///
/// All status transitions flow through guarded methods on this type; the
/// state machine here is the single authority for what may follow what.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    id: WorkOrderId,
    code: WorkOrderCode,
    requestor: Requestor,
    details: WorkOrderDetails,
    priority: Priority,
    status: WorkOrderStatus,
    requested_date: NaiveDate,
    schedule_change: Option<ScheduleChange>,
    approval: Option<Approval>,
    rejection: Option<Rejection>,
    started_at: Option<DateTime<Utc>>,
    paused_at: Option<DateTime<Utc>>,
    resumed_at: Option<DateTime<Utc>>,
    completion: Option<Completion>,
    timer_elapsed_seconds: i64,
    timer_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted work order.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedWorkOrderData {
    /// Persisted identifier.
    pub id: WorkOrderId,
    /// Persisted sequential code.
    pub code: WorkOrderCode,
    /// Persisted requestor block.
    pub requestor: Requestor,
    /// Persisted work details.
    pub details: WorkOrderDetails,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted status.
    pub status: WorkOrderStatus,
    /// Persisted requested date.
    pub requested_date: NaiveDate,
    /// Persisted schedule-change record, if any.
    pub schedule_change: Option<ScheduleChange>,
    /// Persisted approval metadata, if any.
    pub approval: Option<Approval>,
    /// Persisted rejection metadata, if any.
    pub rejection: Option<Rejection>,
    /// Persisted start timestamp, if any.
    pub started_at: Option<DateTime<Utc>>,
    /// Persisted pause timestamp, if any.
    pub paused_at: Option<DateTime<Utc>>,
    /// Persisted resume timestamp, if any.
    pub resumed_at: Option<DateTime<Utc>>,
    /// Persisted completion metadata, if any.
    pub completion: Option<Completion>,
    /// Persisted accumulated timer seconds.
    pub timer_elapsed_seconds: i64,
    /// Persisted timer-running flag.
    pub timer_active: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl WorkOrder {
    /// Creates a newly submitted work order in `Pending` status.
    #[must_use]
    pub fn submit(
        code: WorkOrderCode,
        requestor: Requestor,
        details: WorkOrderDetails,
        priority: Priority,
        requested_date: NaiveDate,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: WorkOrderId::new(),
            code,
            requestor,
            details,
            priority,
            status: WorkOrderStatus::Pending,
            requested_date,
            schedule_change: None,
            approval: None,
            rejection: None,
            started_at: None,
            paused_at: None,
            resumed_at: None,
            completion: None,
            timer_elapsed_seconds: 0,
            timer_active: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a work order from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedWorkOrderData) -> Self {
        Self {
            id: data.id,
            code: data.code,
            requestor: data.requestor,
            details: data.details,
            priority: data.priority,
            status: data.status,
            requested_date: data.requested_date,
            schedule_change: data.schedule_change,
            approval: data.approval,
            rejection: data.rejection,
            started_at: data.started_at,
            paused_at: data.paused_at,
            resumed_at: data.resumed_at,
            completion: data.completion,
            timer_elapsed_seconds: data.timer_elapsed_seconds,
            timer_active: data.timer_active,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the work-order identifier.
    #[must_use]
    pub const fn id(&self) -> WorkOrderId {
        self.id
    }

    /// Returns the sequential code.
    #[must_use]
    pub const fn code(&self) -> WorkOrderCode {
        self.code
    }

    /// Returns the requestor block.
    #[must_use]
    pub const fn requestor(&self) -> &Requestor {
        &self.requestor
    }

    /// Returns the work details.
    #[must_use]
    pub const fn details(&self) -> &WorkOrderDetails {
        &self.details
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> WorkOrderStatus {
        self.status
    }

    /// Returns the requested date.
    #[must_use]
    pub const fn requested_date(&self) -> NaiveDate {
        self.requested_date
    }

    /// Returns the post-approval schedule change, if any.
    #[must_use]
    pub const fn schedule_change(&self) -> Option<&ScheduleChange> {
        self.schedule_change.as_ref()
    }

    /// Returns the approval metadata, if any.
    #[must_use]
    pub const fn approval(&self) -> Option<&Approval> {
        self.approval.as_ref()
    }

    /// Returns the rejection metadata, if any.
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        self.rejection.as_ref()
    }

    /// Returns when execution started, if it has.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Returns the most recent pause timestamp, if any.
    #[must_use]
    pub const fn paused_at(&self) -> Option<DateTime<Utc>> {
        self.paused_at
    }

    /// Returns the most recent resume timestamp, if any.
    #[must_use]
    pub const fn resumed_at(&self) -> Option<DateTime<Utc>> {
        self.resumed_at
    }

    /// Returns the completion metadata, if any.
    #[must_use]
    pub const fn completion(&self) -> Option<&Completion> {
        self.completion.as_ref()
    }

    /// Returns the accumulated execution timer in seconds.
    #[must_use]
    pub const fn timer_elapsed_seconds(&self) -> i64 {
        self.timer_elapsed_seconds
    }

    /// Returns whether the execution timer is currently running.
    #[must_use]
    pub const fn timer_active(&self) -> bool {
        self.timer_active
    }

    /// Returns the submission timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Approves a pending work order, capturing the reviewer and an
    /// optional checklist.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::InvalidStateTransition`] when the
    /// order is not `Pending`.
    pub fn approve(
        &mut self,
        approved_by: ProfileId,
        checklist: Option<ApprovalChecklist>,
        clock: &impl Clock,
    ) -> Result<(), WorkOrderDomainError> {
        self.check_transition(WorkOrderStatus::Approved)?;
        let now = clock.utc();
        self.approval = Some(Approval::new(approved_by, now, checklist));
        self.status = WorkOrderStatus::Approved;
        self.updated_at = now;
        Ok(())
    }

    /// Rejects a pending work order with a required reason.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::InvalidStateTransition`] when the
    /// order is not `Pending`, or
    /// [`WorkOrderDomainError::EmptyRejectionReason`] when the reason is
    /// blank after trimming.
    pub fn reject(
        &mut self,
        rejected_by: ProfileId,
        reason: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), WorkOrderDomainError> {
        self.check_transition(WorkOrderStatus::Rejected)?;
        let reason = reason.into();
        let trimmed = reason.trim();
        if trimmed.is_empty() {
            return Err(WorkOrderDomainError::EmptyRejectionReason);
        }

        let now = clock.utc();
        self.rejection = Some(Rejection::new(rejected_by, now, trimmed.to_owned()));
        self.status = WorkOrderStatus::Rejected;
        self.updated_at = now;
        Ok(())
    }

    /// Starts execution of an approved work order and the elapsed timer.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::InvalidStateTransition`] when the
    /// order is not `Approved`.
    pub fn start(&mut self, clock: &impl Clock) -> Result<(), WorkOrderDomainError> {
        self.check_transition(WorkOrderStatus::InProgress)?;
        let now = clock.utc();
        self.started_at = Some(now);
        self.timer_active = true;
        self.status = WorkOrderStatus::InProgress;
        self.updated_at = now;
        Ok(())
    }

    /// Pauses an in-progress work order, folding the running timer segment
    /// into the accumulated total.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::InvalidStateTransition`] when the
    /// order is not `InProgress`.
    pub fn pause(&mut self, clock: &impl Clock) -> Result<(), WorkOrderDomainError> {
        self.check_transition(WorkOrderStatus::Paused)?;
        let now = clock.utc();
        self.accumulate_timer(now);
        self.paused_at = Some(now);
        self.timer_active = false;
        self.status = WorkOrderStatus::Paused;
        self.updated_at = now;
        Ok(())
    }

    /// Resumes a paused work order and restarts the elapsed timer.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::InvalidStateTransition`] when the
    /// order is not `Paused`.
    pub fn resume(&mut self, clock: &impl Clock) -> Result<(), WorkOrderDomainError> {
        self.check_transition(WorkOrderStatus::InProgress)?;
        let now = clock.utc();
        self.resumed_at = Some(now);
        self.timer_active = true;
        self.status = WorkOrderStatus::InProgress;
        self.updated_at = now;
        Ok(())
    }

    /// Completes an in-progress work order with recorded hours and
    /// optional notes, stopping the timer.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::InvalidStateTransition`] when the
    /// order is not `InProgress`.
    pub fn complete(
        &mut self,
        completed_by: ProfileId,
        actual_hours: ActualHours,
        notes: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), WorkOrderDomainError> {
        self.check_transition(WorkOrderStatus::Completed)?;
        let now = clock.utc();
        self.accumulate_timer(now);
        self.timer_active = false;
        let notes = notes
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        self.completion = Some(Completion::new(completed_by, now, actual_hours, notes));
        self.status = WorkOrderStatus::Completed;
        self.updated_at = now;
        Ok(())
    }

    /// Changes the requested date.
    ///
    /// Pending orders reschedule freely. Approved orders require a reason
    /// and record the previous date. Any later status locks the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::ScheduleLocked`] outside `Pending`
    /// and `Approved`, or
    /// [`WorkOrderDomainError::ScheduleChangeReasonRequired`] when an
    /// approved order is rescheduled without a usable reason.
    pub fn reschedule(
        &mut self,
        new_date: NaiveDate,
        reason: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), WorkOrderDomainError> {
        match self.status {
            WorkOrderStatus::Pending => {
                self.requested_date = new_date;
                self.updated_at = clock.utc();
                Ok(())
            }
            WorkOrderStatus::Approved => {
                let reason = reason
                    .map(|value| value.trim().to_owned())
                    .filter(|value| !value.is_empty())
                    .ok_or(WorkOrderDomainError::ScheduleChangeReasonRequired)?;
                let now = clock.utc();
                self.schedule_change =
                    Some(ScheduleChange::new(self.requested_date, reason, now));
                self.requested_date = new_date;
                self.updated_at = now;
                Ok(())
            }
            status => Err(WorkOrderDomainError::ScheduleLocked {
                id: self.id,
                status,
            }),
        }
    }

    /// Flips one approval checklist item between approval and completion.
    ///
    /// Returns the item's new completion state.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::ChecklistLocked`] outside the
    /// approval-to-completion window, [`WorkOrderDomainError::NoChecklist`]
    /// when approval captured no checklist, or
    /// [`WorkOrderDomainError::ChecklistItemNotFound`] for an unknown item.
    pub fn toggle_checklist_item(
        &mut self,
        item_id: ChecklistItemId,
        clock: &impl Clock,
    ) -> Result<bool, WorkOrderDomainError> {
        if !matches!(
            self.status,
            WorkOrderStatus::Approved | WorkOrderStatus::InProgress | WorkOrderStatus::Paused
        ) {
            return Err(WorkOrderDomainError::ChecklistLocked {
                id: self.id,
                status: self.status,
            });
        }

        let id = self.id;
        let checklist = self
            .approval
            .as_mut()
            .and_then(Approval::checklist_mut)
            .ok_or(WorkOrderDomainError::NoChecklist(id))?;
        let new_state = checklist.toggle(item_id)?;
        self.updated_at = clock.utc();
        Ok(new_state)
    }

    fn check_transition(&self, to: WorkOrderStatus) -> Result<(), WorkOrderDomainError> {
        if self.status.can_transition_to(to) {
            Ok(())
        } else {
            Err(WorkOrderDomainError::InvalidStateTransition {
                id: self.id,
                from: self.status,
                to,
            })
        }
    }

    /// Folds the running timer segment into the accumulated total.
    ///
    /// The segment began at the latest resume, falling back to the start
    /// timestamp. Clock skew never drives the total backwards.
    fn accumulate_timer(&mut self, now: DateTime<Utc>) {
        if !self.timer_active {
            return;
        }
        let Some(segment_start) = self.resumed_at.or(self.started_at) else {
            return;
        };
        let elapsed = now.signed_duration_since(segment_start).num_seconds().max(0);
        self.timer_elapsed_seconds = self.timer_elapsed_seconds.saturating_add(elapsed);
    }
}

//! Aggregated reporting figures for admin dashboards.

use crate::work_order::domain::{DepartmentName, Priority, WorkOrder, WorkOrderStatus};
use chrono::Datelike;
use std::collections::BTreeMap;
use std::fmt;

/// ISO year/week grouping key, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekKey {
    /// ISO week-numbering year.
    pub iso_year: i32,
    /// ISO week within the year (1 through 53).
    pub week: u32,
}

impl WeekKey {
    /// Derives the key from a work order's submission timestamp.
    #[must_use]
    pub fn for_work_order(work_order: &WorkOrder) -> Self {
        let iso_week = work_order.created_at().date_naive().iso_week();
        Self {
            iso_year: iso_week.year(),
            week: iso_week.week(),
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.iso_year, self.week)
    }
}

/// One pass over a fetched order list, every dashboard figure at once.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    total_requests: u64,
    weekly_volume: BTreeMap<WeekKey, u64>,
    department_volume: BTreeMap<DepartmentName, u64>,
    status_volume: BTreeMap<WorkOrderStatus, u64>,
    priority_volume: BTreeMap<Priority, u64>,
    average_weekly_volume: Option<f64>,
    average_actual_hours: Option<f64>,
}

impl AnalyticsSummary {
    /// Aggregates a fetched order list.
    ///
    /// Input order is irrelevant; grouping keys order themselves.
    #[must_use]
    pub fn from_work_orders(work_orders: &[WorkOrder]) -> Self {
        let mut weekly_volume: BTreeMap<WeekKey, u64> = BTreeMap::new();
        let mut department_volume: BTreeMap<DepartmentName, u64> = BTreeMap::new();
        let mut status_volume: BTreeMap<WorkOrderStatus, u64> = BTreeMap::new();
        let mut priority_volume: BTreeMap<Priority, u64> = BTreeMap::new();
        let mut completed_hours_total = 0.0_f64;
        let mut completed_count: u64 = 0;

        for work_order in work_orders {
            *weekly_volume
                .entry(WeekKey::for_work_order(work_order))
                .or_insert(0) += 1;
            *department_volume
                .entry(work_order.requestor().department().clone())
                .or_insert(0) += 1;
            *status_volume.entry(work_order.status()).or_insert(0) += 1;
            *priority_volume.entry(work_order.priority()).or_insert(0) += 1;

            if let Some(completion) = work_order.completion() {
                accumulate_hours(&mut completed_hours_total, completion.actual_hours().value());
                completed_count += 1;
            }
        }

        let total_requests = work_orders.len() as u64;
        let average_weekly_volume = average(total_requests, weekly_volume.len() as u64);
        let average_actual_hours = hours_average(completed_hours_total, completed_count);

        Self {
            total_requests,
            weekly_volume,
            department_volume,
            status_volume,
            priority_volume,
            average_weekly_volume,
            average_actual_hours,
        }
    }

    /// Returns the total number of requests aggregated.
    #[must_use]
    pub const fn total_requests(&self) -> u64 {
        self.total_requests
    }

    /// Returns submission counts grouped by ISO week, chronologically.
    #[must_use]
    pub const fn weekly_volume(&self) -> &BTreeMap<WeekKey, u64> {
        &self.weekly_volume
    }

    /// Returns submission counts grouped by department.
    #[must_use]
    pub const fn department_volume(&self) -> &BTreeMap<DepartmentName, u64> {
        &self.department_volume
    }

    /// Returns counts grouped by lifecycle status.
    #[must_use]
    pub const fn status_volume(&self) -> &BTreeMap<WorkOrderStatus, u64> {
        &self.status_volume
    }

    /// Returns counts grouped by priority.
    #[must_use]
    pub const fn priority_volume(&self) -> &BTreeMap<Priority, u64> {
        &self.priority_volume
    }

    /// Returns the mean submissions per observed week, or `None` for an
    /// empty input.
    #[must_use]
    pub const fn average_weekly_volume(&self) -> Option<f64> {
        self.average_weekly_volume
    }

    /// Returns the mean recorded hours across completed orders, or `None`
    /// when nothing has completed.
    #[must_use]
    pub const fn average_actual_hours(&self) -> Option<f64> {
        self.average_actual_hours
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "reporting averages are display values, not invariants"
)]
fn accumulate_hours(total: &mut f64, hours: f64) {
    *total += hours;
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "reporting averages are display values, not invariants"
)]
fn average(total: u64, buckets: u64) -> Option<f64> {
    if buckets == 0 {
        return None;
    }
    Some(total as f64 / buckets as f64)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "reporting averages are display values, not invariants"
)]
fn hours_average(total: f64, count: u64) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some(total / count as f64)
}

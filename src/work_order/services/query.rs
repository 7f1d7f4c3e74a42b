//! Pure filtering over fetched work-order lists.

use crate::work_order::domain::{Priority, WorkOrder, WorkOrderStatus};

/// Order-preserving predicate over a fetched work-order list.
///
/// Admin views fetch once and filter locally; the filter never reorders
/// or mutates the input. All criteria must match (conjunction), and an
/// empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkOrderFilter {
    status: Option<WorkOrderStatus>,
    priority: Option<Priority>,
    department: Option<String>,
    search: Option<String>,
}

impl WorkOrderFilter {
    /// Creates a filter that matches every work order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts matches to one lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: WorkOrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts matches to one priority level.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts matches to one department (case-insensitive).
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Restricts matches to orders whose code, title, description,
    /// category, location, or requestor name contains the text
    /// (case-insensitive).
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Returns whether one work order satisfies every criterion.
    #[must_use]
    pub fn matches(&self, work_order: &WorkOrder) -> bool {
        if self
            .status
            .is_some_and(|status| work_order.status() != status)
        {
            return false;
        }
        if self
            .priority
            .is_some_and(|priority| work_order.priority() != priority)
        {
            return false;
        }
        if let Some(department) = &self.department {
            let matches_department = work_order
                .requestor()
                .department()
                .as_str()
                .eq_ignore_ascii_case(department.trim());
            if !matches_department {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !Self::search_haystacks(work_order, &needle) {
                return false;
            }
        }
        true
    }

    /// Applies the predicate, preserving input order.
    #[must_use]
    pub fn apply<'a>(&self, work_orders: &'a [WorkOrder]) -> Vec<&'a WorkOrder> {
        work_orders
            .iter()
            .filter(|work_order| self.matches(work_order))
            .collect()
    }

    fn search_haystacks(work_order: &WorkOrder, needle: &str) -> bool {
        let details = work_order.details();
        let haystacks = [
            work_order.code().to_string().to_lowercase(),
            details.title().to_lowercase(),
            details.description().to_lowercase(),
            details.category().to_lowercase(),
            details.location().to_lowercase(),
            work_order.requestor().name().to_lowercase(),
        ];
        haystacks.iter().any(|haystack| haystack.contains(needle))
    }
}

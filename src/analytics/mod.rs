//! Reporting aggregation over fetched work-order lists.
//!
//! Every aggregation here is a pure, in-memory transformation: admin
//! dashboards fetch the order list once and derive all charts locally.
//! Nothing in this module touches a port.

mod summary;

pub use summary::{AnalyticsSummary, WeekKey};

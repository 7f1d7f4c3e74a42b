//! `PostgreSQL` adapters for work-order persistence and code allocation.

mod models;
mod repository;
mod schema;
mod sequence;

pub use repository::{PostgresWorkOrderRepository, WorkOrderPgPool};
pub use sequence::PostgresWorkOrderSequence;

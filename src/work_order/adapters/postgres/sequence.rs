//! `PostgreSQL` sequence adapter for work-order code allocation.

use super::repository::WorkOrderPgPool;
use crate::work_order::{
    domain::WorkOrderCode,
    ports::{WorkOrderSequence, WorkOrderSequenceError, WorkOrderSequenceResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::BigInt;

/// Database sequence backing the public code series.
const CODE_SEQUENCE_SQL: &str = "SELECT nextval('work_order_code_seq') AS value";

#[derive(Debug, QueryableByName)]
struct SequenceValue {
    #[diesel(sql_type = BigInt)]
    value: i64,
}

/// `PostgreSQL`-backed code sequence.
///
/// `nextval` guarantees uniqueness and monotonicity across concurrent
/// allocators and process restarts.
#[derive(Debug, Clone)]
pub struct PostgresWorkOrderSequence {
    pool: WorkOrderPgPool,
}

impl PostgresWorkOrderSequence {
    /// Creates a new sequence adapter from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: WorkOrderPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkOrderSequence for PostgresWorkOrderSequence {
    async fn next_code(&self) -> WorkOrderSequenceResult<WorkOrderCode> {
        let pool = self.pool.clone();
        let raw = tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(WorkOrderSequenceError::persistence)?;
            diesel::sql_query(CODE_SEQUENCE_SQL)
                .get_result::<SequenceValue>(&mut connection)
                .map_err(WorkOrderSequenceError::persistence)
        })
        .await
        .map_err(WorkOrderSequenceError::persistence)??;

        let sequence = u64::try_from(raw.value)
            .map_err(|_| WorkOrderSequenceError::InvalidValue(raw.value))?;
        WorkOrderCode::from_sequence(sequence)
            .map_err(|_| WorkOrderSequenceError::InvalidValue(raw.value))
    }
}

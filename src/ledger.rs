//! Leave ledger: validated access to month-wise leave records.
//!
//! The ledger owns the one-record-per-`(employee, month, year)` rule from the
//! application's point of view. It validates arguments and verifies the
//! employee exists before touching the store, then delegates creation and
//! increments to the store's atomic primitives. Validation always happens
//! before any mutation, so a rejected call has no side effects.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::LeaveRecord;
use crate::store::LedgerStore;

/// Checks that a month is in `1..=12`.
pub(crate) fn validate_month(month: u32) -> EngineResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(EngineError::InvalidMonth { month })
    }
}

/// Manages leave records on top of a [`LedgerStore`].
#[derive(Clone)]
pub struct LeaveLedger {
    store: Arc<dyn LedgerStore>,
}

impl LeaveLedger {
    /// Creates a ledger over the given store.
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Returns the leave record for `(employee_id, month, year)`, creating it
    /// with a zero count if it does not exist.
    ///
    /// Idempotent: a second call returns the same record with the count
    /// unchanged. Creation races between concurrent callers are resolved by
    /// the store's uniqueness constraint, so exactly one record results.
    ///
    /// # Errors
    ///
    /// `InvalidMonth` for a month outside `1..=12`, `EmployeeNotFound` if the
    /// employee does not exist.
    pub async fn ensure_record(
        &self,
        employee_id: Uuid,
        month: u32,
        year: u32,
    ) -> EngineResult<LeaveRecord> {
        validate_month(month)?;
        self.store.get_employee(employee_id).await?;
        self.store
            .get_or_create_leave_record(employee_id, month, year)
            .await
    }

    /// Atomically adds `delta` leave days to the record for `(employee_id,
    /// month, year)`, creating it first if needed.
    ///
    /// The increment is a single read-modify-write inside the store, never a
    /// read-then-write here, so concurrent increments are never lost.
    ///
    /// # Errors
    ///
    /// `InvalidMonth` for a month outside `1..=12`, `InvalidIncrement` for a
    /// zero delta, `EmployeeNotFound` if the employee does not exist.
    pub async fn increment(
        &self,
        employee_id: Uuid,
        month: u32,
        year: u32,
        delta: u32,
    ) -> EngineResult<LeaveRecord> {
        validate_month(month)?;
        if delta < 1 {
            return Err(EngineError::InvalidIncrement { delta });
        }
        self.store.get_employee(employee_id).await?;
        self.store
            .increment_leave_count(employee_id, month, year, delta)
            .await
    }
}

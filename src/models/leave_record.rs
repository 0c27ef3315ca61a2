//! Leave record model.
//!
//! This module defines the LeaveRecord struct storing the month-wise
//! leave count for an employee.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stores the leave count for an employee in a given month.
///
/// At most one record exists per `(employee_id, month, year)` — the store
/// enforces this triple as a uniqueness constraint. Records are created
/// lazily with a zero count the first time an operation references the key,
/// and the count only ever increases through exposed operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub employee_id: Uuid,
    /// The month of the record, in `1..=12`.
    pub month: u32,
    /// The year of the record.
    pub year: u32,
    /// Number of leave days taken in this month.
    pub leave_count: u32,
}

//! Employee model.
//!
//! This module defines the Employee struct representing workers subject
//! to payroll computation and high-earner ranking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an employee.
///
/// Every employee belongs to exactly one department. The base salary is a
/// non-negative exact decimal amount and is the only mutable field; it is
/// changed through the dedicated set-base-salary operation.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let employee = Employee {
///     id: Uuid::new_v4(),
///     name: "Asha Rao".to_string(),
///     department_id: Uuid::new_v4(),
///     base_salary: Decimal::new(50000, 2), // 500.00
/// };
/// assert!(employee.base_salary >= Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// The employee's display name.
    pub name: String,
    /// The department this employee belongs to.
    pub department_id: Uuid,
    /// Monthly base salary as an exact decimal amount.
    pub base_salary: Decimal,
}

//! Request types for the payroll engine API.
//!
//! This module defines the JSON request bodies accepted by the endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for `POST /departments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartmentRequest {
    /// The unique department name.
    pub name: String,
}

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// The employee's display name.
    pub name: String,
    /// The department the employee belongs to.
    pub department_id: Uuid,
    /// Monthly base salary as a decimal string (e.g. `"500.00"`).
    pub base_salary: Decimal,
}

/// Request body for `POST /employees/{id}/base-salary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseSalaryRequest {
    /// The new monthly base salary.
    pub base_salary: Decimal,
}

/// Request body for `PATCH /leaves/increase`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveIncreaseRequest {
    /// The employee taking leave.
    pub employee_id: Uuid,
    /// The month of the leave, in `1..=12`.
    pub month: u32,
    /// The year of the leave.
    pub year: u32,
    /// Number of leave days to add; must be at least 1.
    pub increment_by: u32,
}

/// Request body for `POST /payable-salary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayableSalaryRequest {
    /// The employee to compute the payable salary for.
    pub employee_id: Uuid,
    /// The month of the computation, in `1..=12`.
    pub month: u32,
    /// The year of the computation.
    pub year: u32,
}

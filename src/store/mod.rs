//! Storage seam for the payroll engine.
//!
//! This module defines the [`LedgerStore`] trait, the abstraction over durable
//! storage for departments, employees, and leave records. The engine's core
//! logic only talks to this trait; [`MemoryLedgerStore`] is the in-process
//! implementation used for tests and development.
//!
//! Two contracts matter beyond plain CRUD:
//!
//! - `(employee_id, month, year)` is a uniqueness constraint on leave records,
//!   and [`get_or_create_leave_record`](LedgerStore::get_or_create_leave_record)
//!   must resolve concurrent creation races to exactly one record that every
//!   caller observes.
//! - [`increment_leave_count`](LedgerStore::increment_leave_count) must be a
//!   single atomic read-modify-write inside the store, so concurrent increments
//!   for the same key are never lost. Application code never reads a count and
//!   writes it back.

mod memory;

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Department, Employee, LeaveRecord};

pub use memory::MemoryLedgerStore;

/// Abstract storage backend for payroll entities.
///
/// Implementations are expected to be thread-safe (`Send + Sync`) and to
/// uphold the atomicity contracts documented on the leave-record methods.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Creates a department with a unique name.
    ///
    /// Fails with `DepartmentExists` if a department with the same name
    /// already exists.
    async fn create_department(&self, name: &str) -> EngineResult<Department>;

    /// Retrieves a department by id, or `DepartmentNotFound`.
    async fn get_department(&self, id: Uuid) -> EngineResult<Department>;

    /// Creates an employee in an existing department.
    ///
    /// Fails with `DepartmentNotFound` if the department does not exist
    /// (an employee always belongs to exactly one department).
    async fn create_employee(
        &self,
        name: &str,
        department_id: Uuid,
        base_salary: Decimal,
    ) -> EngineResult<Employee>;

    /// Retrieves an employee by id, or `EmployeeNotFound`.
    async fn get_employee(&self, id: Uuid) -> EngineResult<Employee>;

    /// Lists employees, optionally restricted to one department.
    ///
    /// A department filter that matches no employees yields an empty list,
    /// including when the department id itself is unknown.
    async fn list_employees(&self, department_id: Option<Uuid>) -> EngineResult<Vec<Employee>>;

    /// Replaces an employee's base salary and returns the updated employee.
    async fn set_base_salary(&self, id: Uuid, base_salary: Decimal) -> EngineResult<Employee>;

    /// Returns the leave record for `(employee_id, month, year)`, creating it
    /// with a zero count if it does not exist.
    ///
    /// Atomic and race-safe: concurrent callers for a never-before-seen key
    /// resolve to exactly one record, and every caller observes that record.
    async fn get_or_create_leave_record(
        &self,
        employee_id: Uuid,
        month: u32,
        year: u32,
    ) -> EngineResult<LeaveRecord>;

    /// Atomically adds `delta` to the leave count for `(employee_id, month,
    /// year)`, creating the record first if needed, and returns the updated
    /// record.
    ///
    /// The read-modify-write happens entirely inside the store, so concurrent
    /// increments for the same key are never lost.
    async fn increment_leave_count(
        &self,
        employee_id: Uuid,
        month: u32,
        year: u32,
        delta: u32,
    ) -> EngineResult<LeaveRecord>;
}

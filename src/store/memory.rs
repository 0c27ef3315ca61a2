//! In-memory implementation of [`LedgerStore`].
//!
//! All tables live in `BTreeMap`s behind a single [`parking_lot::RwLock`].
//! Every mutation takes the write lock for its whole read-modify-write, which
//! linearizes creation races and increments and so satisfies the atomicity
//! contract of the trait. Returned records are snapshots taken under the lock.
//!
//! Data is not persisted; this backend is intended for tests and development.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Department, Employee, LeaveRecord};

use super::LedgerStore;

/// Key for the leave table: one record per employee-month-year.
type LeaveKey = (Uuid, u32, u32);

#[derive(Default)]
struct Tables {
    departments: BTreeMap<Uuid, Department>,
    employees: BTreeMap<Uuid, Employee>,
    leaves: BTreeMap<LeaveKey, LeaveRecord>,
}

/// In-memory storage backend using `BTreeMap` tables.
///
/// Cheaply cloneable via [`Arc`]; all clones share the same underlying data.
///
/// # Example
///
/// ```
/// use payroll_engine::store::{LedgerStore, MemoryLedgerStore};
/// use rust_decimal::Decimal;
///
/// # #[tokio::main]
/// # async fn main() -> payroll_engine::error::EngineResult<()> {
/// let store = MemoryLedgerStore::new();
/// let department = store.create_department("Engineering").await?;
/// let employee = store
///     .create_employee("Asha Rao", department.id, Decimal::new(50000, 2))
///     .await?;
///
/// let record = store.get_or_create_leave_record(employee.id, 3, 2024).await?;
/// assert_eq!(record.leave_count, 0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct MemoryLedgerStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryLedgerStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn create_department(&self, name: &str) -> EngineResult<Department> {
        let mut tables = self.tables.write();

        if tables.departments.values().any(|d| d.name == name) {
            return Err(EngineError::DepartmentExists {
                name: name.to_string(),
            });
        }

        let department = Department {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        tables.departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn get_department(&self, id: Uuid) -> EngineResult<Department> {
        self.tables
            .read()
            .departments
            .get(&id)
            .cloned()
            .ok_or(EngineError::DepartmentNotFound { id })
    }

    async fn create_employee(
        &self,
        name: &str,
        department_id: Uuid,
        base_salary: Decimal,
    ) -> EngineResult<Employee> {
        let mut tables = self.tables.write();

        if !tables.departments.contains_key(&department_id) {
            return Err(EngineError::DepartmentNotFound { id: department_id });
        }

        let employee = Employee {
            id: Uuid::new_v4(),
            name: name.to_string(),
            department_id,
            base_salary,
        };
        tables.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn get_employee(&self, id: Uuid) -> EngineResult<Employee> {
        self.tables
            .read()
            .employees
            .get(&id)
            .cloned()
            .ok_or(EngineError::EmployeeNotFound { id })
    }

    async fn list_employees(&self, department_id: Option<Uuid>) -> EngineResult<Vec<Employee>> {
        let tables = self.tables.read();
        let employees = tables
            .employees
            .values()
            .filter(|e| department_id.is_none_or(|id| e.department_id == id))
            .cloned()
            .collect();
        Ok(employees)
    }

    async fn set_base_salary(&self, id: Uuid, base_salary: Decimal) -> EngineResult<Employee> {
        let mut tables = self.tables.write();
        let employee = tables
            .employees
            .get_mut(&id)
            .ok_or(EngineError::EmployeeNotFound { id })?;
        employee.base_salary = base_salary;
        Ok(employee.clone())
    }

    async fn get_or_create_leave_record(
        &self,
        employee_id: Uuid,
        month: u32,
        year: u32,
    ) -> EngineResult<LeaveRecord> {
        let mut tables = self.tables.write();
        let record = tables
            .leaves
            .entry((employee_id, month, year))
            .or_insert_with(|| LeaveRecord {
                id: Uuid::new_v4(),
                employee_id,
                month,
                year,
                leave_count: 0,
            });
        Ok(record.clone())
    }

    async fn increment_leave_count(
        &self,
        employee_id: Uuid,
        month: u32,
        year: u32,
        delta: u32,
    ) -> EngineResult<LeaveRecord> {
        let mut tables = self.tables.write();
        let record = tables
            .leaves
            .entry((employee_id, month, year))
            .or_insert_with(|| LeaveRecord {
                id: Uuid::new_v4(),
                employee_id,
                month,
                year,
                leave_count: 0,
            });
        record.leave_count += delta;
        Ok(record.clone())
    }
}

//! Payroll query service.
//!
//! This module orchestrates the leave ledger, the payable-salary calculator,
//! and the ranking engine to answer the engine's four core operations:
//! increasing leave, computing one employee's payable salary, and the two
//! "high earner" queries (base salary per department, payable salary per
//! month). Each query works on a snapshot of the store taken at call time.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::ledger::{validate_month, LeaveLedger};
use crate::models::{Employee, LeaveRecord};
use crate::payroll::payable_salary;
use crate::ranking::top_by_distinct_value;
use crate::store::LedgerStore;

/// Payable-salary breakdown for one employee in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayableSalary {
    /// The employee the figures apply to.
    pub employee_id: Uuid,
    /// The month of the computation, in `1..=12`.
    pub month: u32,
    /// The year of the computation.
    pub year: u32,
    /// Leave days recorded for the month.
    pub leave_count: u32,
    /// The employee's monthly base salary.
    pub base_salary: Decimal,
    /// Base salary minus the leave deduction, floored at zero.
    pub payable_salary: Decimal,
}

/// Result of a department base-salary ranking query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentHighEarners {
    /// The department's display name.
    pub department: String,
    /// Employees in the top distinct base salaries, best first.
    pub high_earners: Vec<Employee>,
}

/// One entry in a monthly payable-salary ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyHighEarner {
    /// The ranked employee.
    pub employee: Employee,
    /// Leave days recorded for the month.
    pub leave_count: u32,
    /// The payable salary the employee ranked on.
    pub payable_salary: Decimal,
}

/// Result of a monthly payable-salary ranking query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyHighEarners {
    /// The month that was ranked, in `1..=12`.
    pub month: u32,
    /// The year that was ranked.
    pub year: u32,
    /// The department the query was scoped to, if any.
    pub department_filter: Option<Uuid>,
    /// Employees in the top distinct payable salaries, best first.
    pub high_earners: Vec<MonthlyHighEarner>,
}

/// Answers payroll and high-earner queries over a [`LedgerStore`].
#[derive(Clone)]
pub struct PayrollService {
    store: Arc<dyn LedgerStore>,
    ledger: LeaveLedger,
    config: PayrollConfig,
}

impl PayrollService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<dyn LedgerStore>, config: PayrollConfig) -> Self {
        let ledger = LeaveLedger::new(store.clone());
        Self {
            store,
            ledger,
            config,
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<dyn LedgerStore> {
        &self.store
    }

    /// Returns the leave ledger.
    pub fn ledger(&self) -> &LeaveLedger {
        &self.ledger
    }

    /// Adds `increment_by` leave days for an employee in a month, creating the
    /// record if it does not exist, and returns the updated record.
    ///
    /// # Errors
    ///
    /// `InvalidMonth`, `InvalidIncrement`, or `EmployeeNotFound`; validation
    /// happens before any store mutation.
    pub async fn increase_leave(
        &self,
        employee_id: Uuid,
        month: u32,
        year: u32,
        increment_by: u32,
    ) -> EngineResult<LeaveRecord> {
        self.ledger
            .increment(employee_id, month, year, increment_by)
            .await
    }

    /// Computes the payable salary for an employee in a month.
    ///
    /// Materializes a zero-count leave record if the employee has none for
    /// the month, so the computation always has a leave baseline.
    ///
    /// # Errors
    ///
    /// `InvalidMonth` or `EmployeeNotFound`.
    pub async fn calculate_payable_salary(
        &self,
        employee_id: Uuid,
        month: u32,
        year: u32,
    ) -> EngineResult<PayableSalary> {
        validate_month(month)?;
        let employee = self.store.get_employee(employee_id).await?;
        let record = self.ledger.ensure_record(employee_id, month, year).await?;

        Ok(PayableSalary {
            employee_id: employee.id,
            month,
            year,
            leave_count: record.leave_count,
            base_salary: employee.base_salary,
            payable_salary: payable_salary(employee.base_salary, record.leave_count),
        })
    }

    /// Ranks a department's employees by base salary.
    ///
    /// A high earner is an employee whose base salary is among the top
    /// distinct values within the department (dense ranking, depth from
    /// configuration). Output is ordered by salary descending, then employee
    /// id ascending.
    ///
    /// # Errors
    ///
    /// `DepartmentNotFound` if the department id is unknown.
    pub async fn department_high_earners(
        &self,
        department_id: Uuid,
    ) -> EngineResult<DepartmentHighEarners> {
        let department = self.store.get_department(department_id).await?;
        let employees = self.store.list_employees(Some(department_id)).await?;

        let items: Vec<(Employee, Decimal)> = employees
            .into_iter()
            .map(|employee| {
                let salary = employee.base_salary;
                (employee, salary)
            })
            .collect();
        let ranked = top_by_distinct_value(
            items,
            self.config.high_earner_ranks,
            true,
            |employee: &Employee| employee.id,
        );

        Ok(DepartmentHighEarners {
            department: department.name,
            high_earners: ranked.into_iter().map(|(employee, _)| employee).collect(),
        })
    }

    /// Ranks employees by payable salary for a month, company-wide or scoped
    /// to one department.
    ///
    /// Before ranking, a zero-count leave record is materialized for every
    /// resolved employee who has none for the month. This write side effect is
    /// deliberate: an employee with no recorded leave competes on full base
    /// salary rather than being absent from the ranking.
    ///
    /// A department filter that matches no employees yields an empty result.
    ///
    /// # Errors
    ///
    /// `InvalidMonth` for a month outside `1..=12`, rejected before any
    /// record is materialized.
    pub async fn monthly_high_earners(
        &self,
        month: u32,
        year: u32,
        department_id: Option<Uuid>,
    ) -> EngineResult<MonthlyHighEarners> {
        validate_month(month)?;

        let employees = self.store.list_employees(department_id).await?;

        let mut items: Vec<(MonthlyHighEarner, Decimal)> = Vec::with_capacity(employees.len());
        for employee in employees {
            let record = self
                .store
                .get_or_create_leave_record(employee.id, month, year)
                .await?;
            let payable = payable_salary(employee.base_salary, record.leave_count);
            items.push((
                MonthlyHighEarner {
                    employee,
                    leave_count: record.leave_count,
                    payable_salary: payable,
                },
                payable,
            ));
        }

        let ranked = top_by_distinct_value(
            items,
            self.config.high_earner_ranks,
            true,
            |entry: &MonthlyHighEarner| entry.employee.id,
        );

        Ok(MonthlyHighEarners {
            month,
            year,
            department_filter: department_id,
            high_earners: ranked.into_iter().map(|(entry, _)| entry).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::store::MemoryLedgerStore;
    use std::str::FromStr;

    fn decimal(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_service() -> PayrollService {
        PayrollService::new(Arc::new(MemoryLedgerStore::new()), PayrollConfig::default())
    }

    async fn create_employee(service: &PayrollService, department_id: Uuid, salary: &str) -> Employee {
        service
            .store()
            .create_employee("worker", department_id, decimal(salary))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_increase_then_payable() {
        let service = create_service();
        let department = service.store().create_department("Ops").await.unwrap();
        let employee = create_employee(&service, department.id, "500.00").await;

        service
            .increase_leave(employee.id, 3, 2024, 10)
            .await
            .unwrap();
        let result = service
            .calculate_payable_salary(employee.id, 3, 2024)
            .await
            .unwrap();

        assert_eq!(result.leave_count, 10);
        assert_eq!(result.base_salary, decimal("500.00"));
        assert_eq!(result.payable_salary, decimal("300.00"));
    }

    #[tokio::test]
    async fn test_payable_without_prior_leave_is_full_base() {
        let service = create_service();
        let department = service.store().create_department("Ops").await.unwrap();
        let employee = create_employee(&service, department.id, "750.00").await;

        let result = service
            .calculate_payable_salary(employee.id, 1, 2024)
            .await
            .unwrap();
        assert_eq!(result.leave_count, 0);
        assert_eq!(result.payable_salary, decimal("750.00"));
    }

    #[tokio::test]
    async fn test_payable_rejects_unknown_employee() {
        let service = create_service();
        let result = service
            .calculate_payable_salary(Uuid::new_v4(), 1, 2024)
            .await;
        assert!(matches!(result, Err(EngineError::EmployeeNotFound { .. })));
    }

    #[tokio::test]
    async fn test_payable_rejects_bad_month() {
        let service = create_service();
        let result = service
            .calculate_payable_salary(Uuid::new_v4(), 13, 2024)
            .await;
        assert!(matches!(result, Err(EngineError::InvalidMonth { month: 13 })));
    }

    #[tokio::test]
    async fn test_department_high_earners_dense_rank() {
        let service = create_service();
        let department = service.store().create_department("Ops").await.unwrap();

        create_employee(&service, department.id, "1000.00").await;
        create_employee(&service, department.id, "1000.00").await;
        create_employee(&service, department.id, "900.00").await;
        create_employee(&service, department.id, "800.00").await;
        create_employee(&service, department.id, "700.00").await;

        let result = service.department_high_earners(department.id).await.unwrap();
        assert_eq!(result.department, "Ops");
        // Distinct salaries 1000, 900, 800 rank; the 700 earner does not.
        assert_eq!(result.high_earners.len(), 4);
        assert!(result
            .high_earners
            .iter()
            .all(|e| e.base_salary >= decimal("800.00")));
    }

    #[tokio::test]
    async fn test_department_high_earners_unknown_department() {
        let service = create_service();
        let result = service.department_high_earners(Uuid::new_v4()).await;
        assert!(matches!(result, Err(EngineError::DepartmentNotFound { .. })));
    }

    #[tokio::test]
    async fn test_department_high_earners_empty_department() {
        let service = create_service();
        let department = service.store().create_department("Empty").await.unwrap();
        let result = service.department_high_earners(department.id).await.unwrap();
        assert!(result.high_earners.is_empty());
    }

    #[tokio::test]
    async fn test_monthly_high_earners_materializes_zero_leave_records() {
        let service = create_service();
        let department = service.store().create_department("Ops").await.unwrap();
        let employee = create_employee(&service, department.id, "600.00").await;

        let result = service.monthly_high_earners(3, 2024, None).await.unwrap();
        assert_eq!(result.high_earners.len(), 1);
        assert_eq!(result.high_earners[0].leave_count, 0);
        assert_eq!(result.high_earners[0].payable_salary, decimal("600.00"));

        // The query's side effect: a zero-count record now exists.
        let record = service
            .ledger()
            .ensure_record(employee.id, 3, 2024)
            .await
            .unwrap();
        assert_eq!(record.leave_count, 0);
    }

    #[tokio::test]
    async fn test_monthly_high_earners_ranks_on_payable() {
        let service = create_service();
        let department = service.store().create_department("Ops").await.unwrap();

        // Same base salary; leave separates them on payable.
        let on_leave = create_employee(&service, department.id, "500.00").await;
        create_employee(&service, department.id, "500.00").await;

        service.increase_leave(on_leave.id, 3, 2024, 10).await.unwrap();

        let result = service.monthly_high_earners(3, 2024, None).await.unwrap();
        assert_eq!(result.high_earners.len(), 2);
        assert_eq!(result.high_earners[0].payable_salary, decimal("500.00"));
        assert_eq!(result.high_earners[1].payable_salary, decimal("300.00"));
        assert_eq!(result.high_earners[1].employee.id, on_leave.id);
    }

    #[tokio::test]
    async fn test_monthly_high_earners_department_scope() {
        let service = create_service();
        let ops = service.store().create_department("Ops").await.unwrap();
        let finance = service.store().create_department("Finance").await.unwrap();
        create_employee(&service, ops.id, "500.00").await;
        create_employee(&service, finance.id, "900.00").await;

        let result = service
            .monthly_high_earners(3, 2024, Some(ops.id))
            .await
            .unwrap();
        assert_eq!(result.department_filter, Some(ops.id));
        assert_eq!(result.high_earners.len(), 1);
        assert_eq!(result.high_earners[0].payable_salary, decimal("500.00"));
    }

    #[tokio::test]
    async fn test_monthly_high_earners_empty_filter_is_not_an_error() {
        let service = create_service();
        let result = service
            .monthly_high_earners(3, 2024, Some(Uuid::new_v4()))
            .await
            .unwrap();
        assert!(result.high_earners.is_empty());
    }

    #[tokio::test]
    async fn test_monthly_high_earners_rejects_bad_month() {
        let service = create_service();
        let result = service.monthly_high_earners(0, 2024, None).await;
        assert!(matches!(result, Err(EngineError::InvalidMonth { month: 0 })));
    }
}

//! Payable salary calculation.
//!
//! This module provides the pure functions converting a base salary and a
//! monthly leave count into the payable salary for that month. The functions
//! are referentially transparent: identical inputs always yield identical
//! decimal outputs, with no hidden state and no binary floating point.

use rust_decimal::Decimal;

/// Number of working days a monthly base salary is spread over.
///
/// The daily rate used for leave deductions is `base_salary / 25`.
pub const WORKING_DAYS_PER_MONTH: u32 = 25;

/// Returns the daily rate for a given monthly base salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::payroll::daily_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(daily_rate(Decimal::new(10000, 2)), Decimal::new(400, 2)); // 100.00 -> 4.00
/// ```
pub fn daily_rate(base_salary: Decimal) -> Decimal {
    base_salary / Decimal::from(WORKING_DAYS_PER_MONTH)
}

/// Computes the payable salary for a month.
///
/// The deduction is one daily rate per day of leave:
/// `payable = base_salary - leave_count * (base_salary / 25)`,
/// floored at zero so the result is never negative.
///
/// A negative `base_salary` is a precondition violation — upstream validation
/// guarantees non-negative amounts — but the floor still applies, so the
/// function never returns a negative amount.
///
/// # Examples
///
/// ```
/// use payroll_engine::payroll::payable_salary;
/// use rust_decimal::Decimal;
///
/// let base = Decimal::new(10000, 2); // 100.00
/// assert_eq!(payable_salary(base, 0), base);
/// assert_eq!(payable_salary(base, 5), Decimal::new(8000, 2)); // 80.00
/// assert_eq!(payable_salary(base, 30), Decimal::ZERO);
/// ```
pub fn payable_salary(base_salary: Decimal, leave_count: u32) -> Decimal {
    debug_assert!(base_salary >= Decimal::ZERO, "base salary must be non-negative");

    let deduction = Decimal::from(leave_count) * daily_rate(base_salary);
    let payable = base_salary - deduction;
    payable.max(Decimal::ZERO)
}

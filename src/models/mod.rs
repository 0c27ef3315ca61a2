//! Core data models for the payroll engine.
//!
//! This module contains all the domain entities used throughout the engine.

mod department;
mod employee;
mod leave_record;

pub use department::Department;
pub use employee::Employee;
pub use leave_record::LeaveRecord;

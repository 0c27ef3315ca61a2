//! Payroll and leave engine.
//!
//! This crate tracks employees, their departments, and month-wise leave counts,
//! computes payable salary with leave-based deductions, and answers "high earner"
//! ranking queries over base and payable salaries using dense-rank top-k semantics.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod payroll;
pub mod ranking;
pub mod service;
pub mod store;

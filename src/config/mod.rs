//! Configuration for the payroll engine.

mod loader;

pub use loader::PayrollConfig;

//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the engine.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth { month: 13 };
/// assert_eq!(error.to_string(), "Invalid month 13: must be between 1 and 12");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: Uuid,
    },

    /// No department exists with the given id.
    #[error("Department not found: {id}")]
    DepartmentNotFound {
        /// The department id that was not found.
        id: Uuid,
    },

    /// A department with the given name already exists.
    #[error("Department already exists: {name}")]
    DepartmentExists {
        /// The conflicting department name.
        name: String,
    },

    /// A month outside the 1..=12 range was supplied.
    #[error("Invalid month {month}: must be between 1 and 12")]
    InvalidMonth {
        /// The rejected month value.
        month: u32,
    },

    /// A leave increment below 1 was supplied.
    #[error("Invalid leave increment {delta}: must be at least 1")]
    InvalidIncrement {
        /// The rejected increment value.
        delta: u32,
    },

    /// A negative base salary was supplied.
    #[error("Invalid base salary {amount}: must not be negative")]
    InvalidSalary {
        /// The rejected salary amount.
        amount: Decimal,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

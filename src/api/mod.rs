//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for managing departments,
//! employees, and leave, and for the payable-salary and high-earner queries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BaseSalaryRequest, CreateDepartmentRequest, CreateEmployeeRequest, LeaveIncreaseRequest,
    PayableSalaryRequest,
};
pub use response::ApiError;
pub use state::AppState;

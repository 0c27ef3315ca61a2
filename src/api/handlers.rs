//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all endpoints. Validation
//! failures are rejected before any store mutation, and every core error is
//! returned as a structured JSON body with a stable error code.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::request::{
    BaseSalaryRequest, CreateDepartmentRequest, CreateEmployeeRequest, LeaveIncreaseRequest,
    PayableSalaryRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/departments", post(create_department_handler))
        .route("/employees", post(create_employee_handler))
        .route("/employees/:id/base-salary", post(set_base_salary_handler))
        .route("/leaves/increase", patch(increase_leave_handler))
        .route("/payable-salary", post(payable_salary_handler))
        .route(
            "/departments/:id/high-earners",
            get(department_high_earners_handler),
        )
        .route("/high-earners", get(monthly_high_earners_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Converts a core error into its transport-level response.
fn engine_error_response(correlation_id: Uuid, error: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    ApiErrorResponse::from(error).into_response()
}

/// Rejects negative salary amounts before they reach the store.
fn validate_salary(amount: Decimal) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(EngineError::InvalidSalary { amount });
    }
    Ok(())
}

/// Handler for `POST /departments`.
async fn create_department_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateDepartmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(correlation_id = %correlation_id, name = %request.name, "Creating department");
    match state.service().store().create_department(&request.name).await {
        Ok(department) => (StatusCode::CREATED, Json(department)).into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for `POST /employees`.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = validate_salary(request.base_salary) {
        return engine_error_response(correlation_id, err);
    }

    info!(
        correlation_id = %correlation_id,
        name = %request.name,
        department_id = %request.department_id,
        "Creating employee"
    );
    let result = state
        .service()
        .store()
        .create_employee(&request.name, request.department_id, request.base_salary)
        .await;
    match result {
        Ok(employee) => (StatusCode::CREATED, Json(employee)).into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for `POST /employees/{id}/base-salary`.
async fn set_base_salary_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    payload: Result<Json<BaseSalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = validate_salary(request.base_salary) {
        return engine_error_response(correlation_id, err);
    }

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        base_salary = %request.base_salary,
        "Setting base salary"
    );
    let result = state
        .service()
        .store()
        .set_base_salary(employee_id, request.base_salary)
        .await;
    match result {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for `PATCH /leaves/increase`.
async fn increase_leave_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveIncreaseRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        month = request.month,
        year = request.year,
        increment_by = request.increment_by,
        "Increasing leave"
    );
    let result = state
        .service()
        .increase_leave(
            request.employee_id,
            request.month,
            request.year,
            request.increment_by,
        )
        .await;
    match result {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for `POST /payable-salary`.
async fn payable_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayableSalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        month = request.month,
        year = request.year,
        "Calculating payable salary"
    );
    let result = state
        .service()
        .calculate_payable_salary(request.employee_id, request.month, request.year)
        .await;
    match result {
        Ok(payable) => (StatusCode::OK, Json(payable)).into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for `GET /departments/{id}/high-earners`.
async fn department_high_earners_handler(
    State(state): State<AppState>,
    Path(department_id): Path<Uuid>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        department_id = %department_id,
        "Ranking department high earners"
    );
    match state.service().department_high_earners(department_id).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Query parameters for `GET /high-earners`.
///
/// Month and year arrive as strings so that missing or non-numeric values can
/// be rejected with a structured validation error instead of a bare 400.
#[derive(Debug, Deserialize)]
struct MonthlyHighEarnersParams {
    month: Option<String>,
    year: Option<String>,
    department_id: Option<String>,
}

/// Handler for `GET /high-earners?month=&year=[&department_id=]`.
async fn monthly_high_earners_handler(
    State(state): State<AppState>,
    Query(params): Query<MonthlyHighEarnersParams>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let parsed = params
        .month
        .as_deref()
        .and_then(|m| m.parse::<u32>().ok())
        .zip(params.year.as_deref().and_then(|y| y.parse::<u32>().ok()));
    let Some((month, year)) = parsed else {
        warn!(correlation_id = %correlation_id, "Non-numeric month or year");
        let error = ApiError::validation_error("provide numeric month & year");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    };

    let department_id = match params.department_id.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<Uuid>() {
            Ok(id) => Some(id),
            Err(_) => {
                let error = ApiError::validation_error("department_id must be a UUID");
                return (StatusCode::BAD_REQUEST, Json(error)).into_response();
            }
        },
    };

    info!(
        correlation_id = %correlation_id,
        month,
        year,
        department_filter = ?department_id,
        "Ranking monthly high earners"
    );
    match state
        .service()
        .monthly_high_earners(month, year, department_id)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

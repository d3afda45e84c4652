//! HTTP request handlers for the payroll registry API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! handler follows the same shape: parse the request, take the registry
//! lock for exactly one operation, and render the outcome.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::WorkType;

use super::request::{
    AddEmployeeRequest, AddWorkTypeRequest, RecordWorkRequest, SetStrategyRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, EmployeeListResponse, EmployeePayResponse, EmployeeSummary,
    PayrollSummaryResponse, WorkTypeListResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            post(add_employee_handler).get(list_employees_handler),
        )
        .route("/employees/:surname", delete(delete_employee_handler))
        .route("/employees/:surname/work", post(record_work_handler))
        .route("/employees/:surname/strategy", put(set_strategy_handler))
        .route("/employees/:surname/pay", get(employee_pay_handler))
        .route(
            "/work-types",
            post(add_work_type_handler).get(list_work_types_handler),
        )
        .route("/payroll/total", get(total_payroll_handler))
        .route("/payroll/average", get(average_pay_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into an error response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
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

/// Renders a registry failure, logging it against the correlation id.
fn registry_error_response(
    correlation_id: Uuid,
    error: crate::error::RegistryError,
) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Registry operation failed");
    ApiErrorResponse::from(error).into_response()
}

/// Handler for POST /employees.
async fn add_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.registry().add_employee(&request.surname) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                surname = %request.surname,
                "Employee registered"
            );
            StatusCode::CREATED.into_response()
        }
        Err(err) => registry_error_response(correlation_id, err),
    }
}

/// Handler for DELETE /employees/{surname}.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(surname): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.registry().delete_employee(&surname) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, surname = %surname, "Employee deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => registry_error_response(correlation_id, err),
    }
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let registry = state.registry();
    let employees: Vec<EmployeeSummary> =
        registry.employees().iter().map(EmployeeSummary::from).collect();
    Json(EmployeeListResponse { employees }).into_response()
}

/// Handler for POST /work-types.
async fn add_work_type_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddWorkTypeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.registry().add_work_type(&request.name, request.pay) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                name = %request.name,
                pay = %request.pay,
                "Work type added"
            );
            StatusCode::CREATED.into_response()
        }
        Err(err) => registry_error_response(correlation_id, err),
    }
}

/// Handler for GET /work-types.
async fn list_work_types_handler(State(state): State<AppState>) -> Response {
    let registry = state.registry();
    let work_types: Vec<WorkType> = registry.work_types().to_vec();
    Json(WorkTypeListResponse { work_types }).into_response()
}

/// Handler for POST /employees/{surname}/work.
async fn record_work_handler(
    State(state): State<AppState>,
    Path(surname): Path<String>,
    payload: Result<Json<RecordWorkRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.registry().record_work(&surname, &request.work_type) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                surname = %surname,
                work_type = %request.work_type,
                "Work recorded"
            );
            StatusCode::CREATED.into_response()
        }
        Err(err) => registry_error_response(correlation_id, err),
    }
}

/// Handler for PUT /employees/{surname}/strategy.
async fn set_strategy_handler(
    State(state): State<AppState>,
    Path(surname): Path<String>,
    payload: Result<Json<SetStrategyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state
        .registry()
        .set_employee_strategy(&surname, request.selector)
    {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                surname = %surname,
                selector = request.selector,
                "Strategy changed"
            );
            StatusCode::OK.into_response()
        }
        Err(err) => registry_error_response(correlation_id, err),
    }
}

/// Handler for GET /employees/{surname}/pay.
async fn employee_pay_handler(
    State(state): State<AppState>,
    Path(surname): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.registry().compute_employee_pay(&surname) {
        Ok(pay) => {
            info!(
                correlation_id = %correlation_id,
                surname = %surname,
                amount = %pay.amount,
                strategy = pay.strategy_name,
                "Pay computed"
            );
            Json(EmployeePayResponse {
                surname,
                amount: pay.amount,
                strategy: pay.strategy_name.to_string(),
            })
            .into_response()
        }
        Err(err) => registry_error_response(correlation_id, err),
    }
}

/// Handler for GET /payroll/total.
async fn total_payroll_handler(State(state): State<AppState>) -> Response {
    let registry = state.registry();
    Json(PayrollSummaryResponse {
        amount: registry.total_payroll(),
        employees: registry.employees().len(),
    })
    .into_response()
}

/// Handler for GET /payroll/average.
async fn average_pay_handler(State(state): State<AppState>) -> Response {
    let registry = state.registry();
    Json(PayrollSummaryResponse {
        amount: registry.average_pay(),
        employees: registry.employees().len(),
    })
    .into_response()
}

//! Response types for the payroll registry API.
//!
//! This module defines the success payloads, the error envelope, and the
//! mapping from [`RegistryError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::models::{Employee, WorkType};

/// One employee entry in the `GET /employees` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee's surname as registered.
    pub surname: String,
    /// Display name of the employee's current strategy.
    pub strategy: String,
    /// How many work records the employee has accumulated.
    pub works_recorded: usize,
}

impl From<&Employee> for EmployeeSummary {
    fn from(employee: &Employee) -> Self {
        Self {
            surname: employee.surname.clone(),
            strategy: employee.strategy.display_name().to_string(),
            works_recorded: employee.works.len(),
        }
    }
}

/// Response body for `GET /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    /// All registered employees in registration order.
    pub employees: Vec<EmployeeSummary>,
}

/// Response body for `GET /work-types`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkTypeListResponse {
    /// The work type catalog in insertion order.
    pub work_types: Vec<WorkType>,
}

/// Response body for `GET /employees/{surname}/pay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePayResponse {
    /// The surname the pay was computed for.
    pub surname: String,
    /// The computed total pay.
    pub amount: Decimal,
    /// Display name of the strategy that produced the amount.
    pub strategy: String,
}

/// Response body for `GET /payroll/total` and `GET /payroll/average`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollSummaryResponse {
    /// The aggregate figure (total or average, per endpoint).
    pub amount: Decimal,
    /// The number of employees the figure covers.
    pub employees: usize,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RegistryError> for ApiErrorResponse {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::EmptyName { field } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "EMPTY_NAME",
                    format!("{} must not be empty", field),
                    "Surnames and work type names must contain at least one non-blank character",
                ),
            },
            RegistryError::DuplicateEmployee { surname } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DUPLICATE_EMPLOYEE",
                    format!("An employee with surname '{}' already exists", surname),
                    "Surnames are unique ignoring case",
                ),
            },
            RegistryError::DuplicateWorkType { name } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DUPLICATE_WORK_TYPE",
                    format!("A work type named '{}' already exists", name),
                    "Work type names are unique ignoring case",
                ),
            },
            RegistryError::EmployeeNotFound { surname } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee not found: {}", surname),
                ),
            },
            RegistryError::WorkTypeNotFound { name } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "WORK_TYPE_NOT_FOUND",
                    format!("Work type not found: {}", name),
                ),
            },
            RegistryError::NegativePay { pay } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NEGATIVE_PAY",
                    format!("Pay must not be negative, got {}", pay),
                    "Work type pay amounts must be zero or positive",
                ),
            },
            RegistryError::InvalidStrategySelector { selector } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_STRATEGY_SELECTOR",
                    format!("Invalid strategy selector: {}", selector),
                    "Valid selectors are 1 (standard), 2 (premium), 3 (fixed bonus)",
                ),
            },
        }
    }
}

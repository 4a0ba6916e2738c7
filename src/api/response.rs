//! Response types for the shift book API.
//!
//! This module defines the shift view returned to clients and the error
//! response structures for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Employee, Shift, format_time_of_day};

/// A shift as presented to clients, joined with its employee's wage level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftView {
    /// System-assigned id.
    pub id: u64,
    /// Employee name.
    pub name: String,
    /// The employee's wage level.
    pub wage_level: u32,
    /// The date of the shift.
    pub date: NaiveDate,
    /// Start time as `HH:MM`.
    pub start_time: String,
    /// End time as `HH:MM`.
    pub end_time: String,
}

impl ShiftView {
    /// Joins a shift with its employee.
    pub fn new(shift: &Shift, employee: &Employee) -> Self {
        Self {
            id: shift.id,
            name: shift.employee_name.clone(),
            wage_level: employee.wage_level,
            date: shift.date,
            start_time: format_time_of_day(shift.start_time),
            end_time: format_time_of_day(shift.end_time),
        }
    }
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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::ConfigParseError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    message,
                ),
            },
            EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
            EngineError::InvalidShiftInterval { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_SHIFT",
                    message,
                    "A shift must start and end on the same day, start first",
                ))
            }
            EngineError::InvalidEmployee { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_EMPLOYEE", message))
            }
            EngineError::InvalidTime { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_TIME", message))
            }
            EngineError::InvalidMonth { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_MONTH", message))
            }
            EngineError::ShiftNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("SHIFT_NOT_FOUND", message),
            },
            EngineError::EmployeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_shift_not_found_is_404() {
        let api_error: ApiErrorResponse = EngineError::ShiftNotFound { id: 9 }.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "SHIFT_NOT_FOUND");
        assert_eq!(api_error.error.message, "Shift not found: 9");
    }

    #[test]
    fn test_invalid_interval_is_400() {
        let api_error: ApiErrorResponse = EngineError::InvalidShiftInterval {
            start: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_SHIFT");
        assert!(api_error.error.message.contains("must be earlier"));
    }

    #[test]
    fn test_config_errors_are_500() {
        let api_error: ApiErrorResponse = EngineError::InvalidConfig {
            message: "rate must be positive".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_shift_view_formats_times() {
        let shift = Shift {
            id: 4,
            employee_name: "Alice".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
        };
        let employee = Employee::new("Alice", 2).unwrap();

        let view = ShiftView::new(&shift, &employee);
        assert_eq!(view.start_time, "08:00");
        assert_eq!(view.end_time, "17:30");
        assert_eq!(view.wage_level, 2);
    }
}

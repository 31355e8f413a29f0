//! Response types for the report API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::ReportKind;

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

    /// Creates an unknown report kind error response.
    pub fn unknown_report(kind: &str) -> Self {
        let supported: Vec<&str> = ReportKind::ALL.iter().map(|k| k.slug()).collect();
        Self::with_details(
            "UNKNOWN_REPORT",
            format!("Unknown report kind: {}", kind),
            format!("Supported report kinds: {}", supported.join(", ")),
        )
    }

    /// Creates an unsupported format error response.
    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::with_details(
            "UNSUPPORTED_FORMAT",
            message,
            "Supported formats: layout (all reports), csv (payroll-sheet only)",
        )
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
    /// A 400 response with the given body.
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
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidCategory { title, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid category configuration",
                    format!("Category '{}': {}", title, message),
                ),
            },
            EngineError::MissingDisplayField {
                field,
                record_index,
            } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "MISSING_DISPLAY_FIELD",
                    format!(
                        "Record {} is missing required display field '{}'",
                        record_index, field
                    ),
                    "Every record must carry a non-empty employee name",
                ),
            },
            EngineError::AmountOutOfRange { amount } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "AMOUNT_OUT_OF_RANGE",
                    format!("Amount {} cannot be converted to words", amount),
                    "Amounts in words support 0 up to 999,999,999.99",
                ),
            },
            EngineError::RenderError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("RENDER_ERROR", "Rendering failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_unknown_report_lists_supported_kinds() {
        let error = ApiError::unknown_report("timesheet");
        assert_eq!(error.code, "UNKNOWN_REPORT");
        assert!(error.message.contains("timesheet"));
        assert!(error.details.unwrap().contains("deduction-schedule"));
    }

    #[test]
    fn test_missing_display_field_is_unprocessable() {
        let api_error: ApiErrorResponse = EngineError::MissingDisplayField {
            field: "employee_name".to_string(),
            record_index: 2,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "MISSING_DISPLAY_FIELD");
        assert!(api_error.error.message.contains("Record 2"));
    }

    #[test]
    fn test_amount_out_of_range_is_unprocessable() {
        let api_error: ApiErrorResponse = EngineError::AmountOutOfRange {
            amount: Decimal::new(1_000_000_000, 0),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "AMOUNT_OUT_OF_RANGE");
    }

    #[test]
    fn test_render_error_is_server_error() {
        let api_error: ApiErrorResponse = EngineError::RenderError {
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.details.as_deref(), Some("boom"));
    }
}

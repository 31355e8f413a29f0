//! HTTP request handlers for the report API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{ReportKind, ReportRequest};
use crate::render::{ReportFile, generate_report, payroll_workbook};

use super::request::{OutputFormat, ReportQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/reports/:kind", post(report_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> &'static str {
    "ok"
}

/// Handler for POST /reports/:kind.
///
/// Validates the report kind and format before the body, then returns the
/// generated file as an attachment.
async fn report_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    query: Result<Query<ReportQuery>, QueryRejection>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, kind = %kind, "Processing report request");

    let kind: ReportKind = match kind.parse() {
        Ok(kind) => kind,
        Err(_) => {
            warn!(correlation_id = %correlation_id, kind = %kind, "Unknown report kind");
            return ApiErrorResponse::bad_request(ApiError::unknown_report(&kind)).into_response();
        }
    };

    let format = match query
        .map_err(|rejection| rejection.body_text())
        .and_then(|Query(query)| query.output_format())
    {
        Ok(format) if format.supports(kind) => format,
        Ok(format) => {
            warn!(correlation_id = %correlation_id, %kind, %format, "Format not available");
            return ApiErrorResponse::bad_request(ApiError::unsupported_format(format!(
                "Format '{}' is not available for {}",
                format, kind
            )))
            .into_response();
        }
        Err(message) => {
            warn!(correlation_id = %correlation_id, error = %message, "Unsupported format");
            return ApiErrorResponse::bad_request(ApiError::unsupported_format(message))
                .into_response();
        }
    };

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = json_rejection_error(rejection);
            warn!(
                correlation_id = %correlation_id,
                code = %error.code,
                error = %error.message,
                "Rejected request body"
            );
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let start_time = Instant::now();
    let result = match format {
        OutputFormat::Layout => generate_report(kind, &request, state.config(), state.renderer()),
        OutputFormat::Csv => payroll_workbook(&request),
    };

    match result {
        Ok(file) => {
            info!(
                correlation_id = %correlation_id,
                %kind,
                %format,
                records = request.records.len(),
                filename = %file.filename,
                bytes = file.bytes.len(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Report request completed"
            );
            file_response(file)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                %kind,
                error = %err,
                "Report generation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn json_rejection_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn file_response(file: ReportFile) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", file.filename);
    let disposition = HeaderValue::from_str(&disposition)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
    let content_type = HeaderValue::from_str(&file.media_type)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response()
}

//! HTTP API module for payroll report generation.
//!
//! This module exposes one endpoint per report kind that accepts a
//! [`ReportRequest`](crate::models::ReportRequest) body and streams back the
//! generated file.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{OutputFormat, ReportQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

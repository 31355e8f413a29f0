//! Error types for payroll report generation.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can surface while building a report. Missing or
//! non-numeric amounts are never errors; they are read as zero.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for report generation.
///
/// # Example
///
/// ```
/// use payroll_reports::error::EngineError;
///
/// let error = EngineError::MissingDisplayField {
///     field: "employee_name".to_string(),
///     record_index: 3,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Record 3 is missing required display field 'employee_name'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A category definition failed validation at construction.
    #[error("Invalid category '{title}': {message}")]
    InvalidCategory {
        /// The category title (may be empty when the title itself is the problem).
        title: String,
        /// What made the category invalid.
        message: String,
    },

    /// A record lacks a field that must be printed on the document.
    #[error("Record {record_index} is missing required display field '{field}'")]
    MissingDisplayField {
        /// The missing field.
        field: String,
        /// Zero-based position of the record in the request.
        record_index: usize,
    },

    /// An amount cannot be spelled out in words.
    #[error("Amount {amount} cannot be converted to words")]
    AmountOutOfRange {
        /// The offending amount.
        amount: Decimal,
    },

    /// The document could not be serialized by the renderer.
    #[error("Render error: {message}")]
    RenderError {
        /// A description of the render failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

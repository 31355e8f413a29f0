//! Request types for the report API.
//!
//! The request body is a [`ReportRequest`](crate::models::ReportRequest)
//! as-is; this module only covers the query string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::ReportKind;

/// Output format selected with `?format=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The document, rendered by the state's
    /// [`DocumentRenderer`](crate::render::DocumentRenderer).
    #[default]
    Layout,
    /// CSV workbook (payroll sheet only).
    Csv,
}

impl OutputFormat {
    /// Returns true if `kind` can be produced in this format.
    pub fn supports(self, kind: ReportKind) -> bool {
        match self {
            OutputFormat::Layout => true,
            OutputFormat::Csv => kind == ReportKind::PayrollSheet,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Layout => f.write_str("layout"),
            OutputFormat::Csv => f.write_str("csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "layout" => Ok(OutputFormat::Layout),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unsupported format: {}", other)),
        }
    }
}

/// Query string of `POST /reports/:kind`.
///
/// The format stays a raw string so that an unknown value reaches the handler
/// and is reported as `UNSUPPORTED_FORMAT` rather than a generic query error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Requested output format; defaults to `layout`.
    #[serde(default)]
    pub format: Option<String>,
}

impl ReportQuery {
    /// Parses the requested format.
    pub fn output_format(&self) -> Result<OutputFormat, String> {
        self.format
            .as_deref()
            .map(OutputFormat::from_str)
            .unwrap_or(Ok(OutputFormat::Layout))
    }
}

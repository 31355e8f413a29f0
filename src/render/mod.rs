//! Report rendering.
//!
//! Each report kind has an adapter that turns a [`ReportRequest`] into a paged
//! [`Document`]; a [`DocumentRenderer`] then produces the file bytes. The
//! payroll sheet can also be exported as a CSV workbook.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use payroll_reports::config::ReportConfig;
//! use payroll_reports::models::{PayrollRecord, ReportKind, ReportRequest};
//! use payroll_reports::render::{JsonLayoutRenderer, generate_report};
//!
//! let request = ReportRequest {
//!     pay_period: "January 1-15, 2024".to_string(),
//!     pay_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
//!     coverage_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     coverage_to: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!     records: vec![PayrollRecord {
//!         employee_name: "Dela Cruz, Juan".to_string(),
//!         ..Default::default()
//!     }],
//! };
//!
//! let file = generate_report(
//!     ReportKind::Payslip,
//!     &request,
//!     &ReportConfig::default(),
//!     &JsonLayoutRenderer,
//! )
//! .unwrap();
//! assert_eq!(file.filename, "Payslip_2024-01-20.json");
//! ```

mod common;
mod contributions;
mod deduction_schedule;
pub mod layout;
mod payroll_sheet;
mod payslip;
mod renderer;
mod workbook;

use std::time::Instant;

use serde::Serialize;

use crate::config::ReportConfig;
use crate::error::EngineResult;
use crate::models::{ReportKind, ReportRequest};

pub use contributions::contributions_document;
pub use deduction_schedule::deduction_schedule_document;
pub use layout::Document;
pub use payroll_sheet::payroll_sheet_document;
pub use payslip::payslip_document;
pub use renderer::{DocumentRenderer, JsonLayoutRenderer};
pub use workbook::{CSV_MEDIA_TYPE, payroll_workbook};

/// A generated report ready to be saved or sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportFile {
    /// `<Kind>_<PayDate>.<ext>`.
    pub filename: String,
    /// MIME type of `bytes`.
    pub media_type: String,
    /// File content.
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// Lays out the document for a report kind.
pub fn build_document(
    kind: ReportKind,
    request: &ReportRequest,
    config: &ReportConfig,
) -> EngineResult<Document> {
    match kind {
        ReportKind::Payslip => payslip_document(request, config),
        ReportKind::PayrollSheet => payroll_sheet_document(request, config),
        ReportKind::DeductionSchedule => deduction_schedule_document(request, config),
        ReportKind::Contributions => contributions_document(request, config),
    }
}

/// Generates one report.
///
/// The call is all-or-nothing: any missing display field or unconvertible
/// amount fails the whole report and no partial file is produced.
pub fn generate_report(
    kind: ReportKind,
    request: &ReportRequest,
    config: &ReportConfig,
    renderer: &dyn DocumentRenderer,
) -> EngineResult<ReportFile> {
    let start_time = Instant::now();
    tracing::info!(
        kind = %kind,
        records = request.records.len(),
        "Generating report"
    );

    let document = build_document(kind, request, config)?;
    let bytes = renderer.render(&document)?;
    let file = ReportFile {
        filename: kind.filename(request.pay_date, renderer.extension()),
        media_type: renderer.media_type().to_string(),
        bytes,
    };

    tracing::info!(
        kind = %kind,
        filename = %file.filename,
        pages = document.pages.len(),
        bytes = file.bytes.len(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Report generated"
    );

    Ok(file)
}

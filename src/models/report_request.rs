//! Report request and report kind.
//!
//! A [`ReportRequest`] carries the period metadata printed on every document
//! together with the records to render.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::payroll_record::PayrollRecord;

/// Input for one report-generation call.
///
/// # Example
///
/// ```
/// use payroll_reports::models::ReportRequest;
/// use chrono::NaiveDate;
///
/// let request = ReportRequest {
///     pay_period: "January 1-15, 2024".to_string(),
///     pay_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
///     coverage_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     coverage_to: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     records: vec![],
/// };
/// assert!(request.records.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Pay period label as printed (e.g., "January 1-15, 2024").
    pub pay_period: String,
    /// Date the payroll is released.
    pub pay_date: NaiveDate,
    /// First day covered (inclusive).
    pub coverage_from: NaiveDate,
    /// Last day covered (inclusive).
    pub coverage_to: NaiveDate,
    /// Records in print order.
    #[serde(default)]
    pub records: Vec<PayrollRecord>,
}

/// The four documents this crate produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    /// One payslip per employee.
    Payslip,
    /// The payroll register, one row per employee.
    PayrollSheet,
    /// Loans and other single-value deductions grouped by kind.
    DeductionSchedule,
    /// SSS, PhilHealth and Pag-IBIG remittance.
    Contributions,
}

impl ReportKind {
    /// All kinds, in menu order.
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Payslip,
        ReportKind::PayrollSheet,
        ReportKind::DeductionSchedule,
        ReportKind::Contributions,
    ];

    /// Path segment / wire name.
    pub fn slug(self) -> &'static str {
        match self {
            ReportKind::Payslip => "payslip",
            ReportKind::PayrollSheet => "payroll-sheet",
            ReportKind::DeductionSchedule => "deduction-schedule",
            ReportKind::Contributions => "contributions",
        }
    }

    /// Stem used in output filenames.
    pub fn file_stem(self) -> &'static str {
        match self {
            ReportKind::Payslip => "Payslip",
            ReportKind::PayrollSheet => "PayrollSheet",
            ReportKind::DeductionSchedule => "DeductionSchedule",
            ReportKind::Contributions => "Contributions",
        }
    }

    /// Title printed at the top of the document.
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Payslip => "PAYSLIP",
            ReportKind::PayrollSheet => "PAYROLL SHEET",
            ReportKind::DeductionSchedule => "SCHEDULE OF DEDUCTIONS",
            ReportKind::Contributions => "GOVERNMENT CONTRIBUTIONS REMITTANCE",
        }
    }

    /// Builds the deterministic output filename `<Kind>_<PayDate>.<ext>`.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_reports::models::ReportKind;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
    /// assert_eq!(
    ///     ReportKind::PayrollSheet.filename(date, "csv"),
    ///     "PayrollSheet_2024-01-20.csv"
    /// );
    /// ```
    pub fn filename(self, pay_date: NaiveDate, extension: &str) -> String {
        format!(
            "{}_{}.{}",
            self.file_stem(),
            pay_date.format("%Y-%m-%d"),
            extension
        )
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| format!("Unknown report kind: {}", s))
    }
}

//! Core data models for payroll report generation.
//!
//! This module contains the record schema, category tables and request types
//! shared by the aggregators and the report adapters.

mod category;
mod payroll_record;
mod report_request;

pub use category::{CategoryDefinition, contribution_categories, deduction_categories};
pub use payroll_record::{
    AmountField, LOAN_FIELDS, NIGHT_DIFF_HOUR_FIELDS, OTHER_DEDUCTION_FIELDS,
    OVERTIME_HOUR_FIELDS, PayrollRecord,
};
pub use report_request::{ReportKind, ReportRequest};

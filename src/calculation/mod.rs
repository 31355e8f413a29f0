//! Aggregation and formatting for payroll reports.
//!
//! This module contains the pure computations behind every document: the
//! amount-in-words converter, per-category filtering and totals for the
//! contributions report, the deduction schedule, payroll sheet rows with
//! their rate/attendance display, and the money/date formatters.

mod amount_words;
mod category;
mod deduction_schedule;
mod formatting;
mod payroll_sheet;

pub use amount_words::{WORDS_LIMIT, amount_to_words};
pub use category::{
    CategoryReport, CategoryRow, CategorySummary, CategoryTotals, aggregate_categories,
    aggregate_category,
};
pub use deduction_schedule::{DeductionSchedule, deduction_schedule};
pub use formatting::{
    format_coverage, format_hours, format_long_date, format_money, format_plain,
};
pub use payroll_sheet::{
    PayrollFigures, PayrollSheet, PayrollSheetRow, RateBasis, RateDisplay, payroll_sheet,
    payroll_sheet_row, rate_display,
};

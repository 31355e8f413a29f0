//! Deduction schedule aggregation.
//!
//! Groups the single-value deductions (loans, premiums, uniform, processing
//! fee, others) into sections, one per deduction kind with at least one
//! positive amount.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CategoryDefinition, PayrollRecord};

use super::category::{CategorySummary, aggregate_categories};

/// The sections of a deduction schedule and its grand total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeductionSchedule<'a> {
    /// Non-empty deduction sections, in definition order.
    pub sections: Vec<CategorySummary<'a>>,
    /// Sum of the section totals.
    pub grand_total: Decimal,
}

impl DeductionSchedule<'_> {
    /// Number of deduction lines across all sections.
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|section| section.rows.len()).sum()
    }
}

/// Builds a deduction schedule.
///
/// Deduction categories have no employer share, so each section total is the
/// sum of its deduction amounts and the grand total is the sum of section
/// totals.
///
/// # Examples
///
/// ```
/// use payroll_reports::calculation::deduction_schedule;
/// use payroll_reports::models::{PayrollRecord, deduction_categories};
/// use rust_decimal::Decimal;
///
/// let records = vec![PayrollRecord {
///     employee_name: "Dela Cruz, Juan".to_string(),
///     sss_loan: Decimal::new(100, 0),
///     uniform: Decimal::new(50, 0),
///     ..Default::default()
/// }];
/// let categories = deduction_categories();
/// let schedule = deduction_schedule(&records, &categories);
///
/// assert_eq!(schedule.sections.len(), 2);
/// assert_eq!(schedule.grand_total, Decimal::new(150, 0));
/// ```
pub fn deduction_schedule<'a>(
    records: &'a [PayrollRecord],
    definitions: &'a [CategoryDefinition],
) -> DeductionSchedule<'a> {
    let report = aggregate_categories(records, definitions);
    let grand_total = report
        .categories
        .iter()
        .fold(Decimal::ZERO, |running, section| {
            running + section.totals.employee_share
        });

    DeductionSchedule {
        sections: report.categories,
        grand_total,
    }
}

//! Per-category filtering and totals.
//!
//! This module provides the aggregator behind the contributions report and
//! the deduction schedule: for each [`CategoryDefinition`] it keeps the records
//! with a positive employee amount, derives the row shares and folds them into
//! immutable [`CategoryTotals`].

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CategoryDefinition, PayrollRecord};

/// Employees' Compensation share. Always zero until a policy is defined.
const ADDITIONAL_EMPLOYER_SHARE: Decimal = Decimal::ZERO;

/// Derived values for one record within one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow<'a> {
    /// The record the row was derived from.
    #[serde(skip)]
    pub record: &'a PayrollRecord,
    /// Position of the record in the request.
    pub record_index: usize,
    /// Employee share, or the deduction amount.
    pub employee_share: Decimal,
    /// Employer share; zero for categories without one.
    pub employer_share: Decimal,
    /// Extra employer-paid component (EC for SSS).
    pub additional_employer_share: Decimal,
    /// Employee + employer + additional.
    pub total: Decimal,
}

/// Sums over the rows of a category, or over several categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    /// Sum of employee shares.
    pub employee_share: Decimal,
    /// Sum of employer shares.
    pub employer_share: Decimal,
    /// Sum of additional employer shares.
    pub additional_employer_share: Decimal,
    /// Sum of row totals.
    pub total: Decimal,
}

impl Add for CategoryTotals {
    type Output = CategoryTotals;

    fn add(self, rhs: CategoryTotals) -> CategoryTotals {
        CategoryTotals {
            employee_share: self.employee_share + rhs.employee_share,
            employer_share: self.employer_share + rhs.employer_share,
            additional_employer_share: self.additional_employer_share
                + rhs.additional_employer_share,
            total: self.total + rhs.total,
        }
    }
}

impl Sum for CategoryTotals {
    fn sum<I: Iterator<Item = CategoryTotals>>(iter: I) -> Self {
        iter.fold(CategoryTotals::default(), Add::add)
    }
}

impl<'a, 'b> Sum<&'b CategoryRow<'a>> for CategoryTotals {
    fn sum<I: Iterator<Item = &'b CategoryRow<'a>>>(iter: I) -> Self {
        iter.map(CategoryRow::totals).sum()
    }
}

impl CategoryRow<'_> {
    /// This row as a one-row total.
    pub fn totals(&self) -> CategoryTotals {
        CategoryTotals {
            employee_share: self.employee_share,
            employer_share: self.employer_share,
            additional_employer_share: self.additional_employer_share,
            total: self.total,
        }
    }
}

/// The filtered rows and totals of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary<'a> {
    /// The category these rows belong to.
    pub definition: &'a CategoryDefinition,
    /// Rows in record order.
    pub rows: Vec<CategoryRow<'a>>,
    /// Totals over `rows`.
    pub totals: CategoryTotals,
}

impl CategorySummary<'_> {
    /// Returns true if no record has a positive amount for this category.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Every non-empty category plus grand totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReport<'a> {
    /// Categories with at least one row, in definition order.
    pub categories: Vec<CategorySummary<'a>>,
    /// Sum of the category totals.
    pub grand_totals: CategoryTotals,
}

/// Aggregates one category over a record slice.
///
/// Records whose employee field is not strictly positive are skipped. Row order
/// follows record order.
///
/// # Examples
///
/// ```
/// use payroll_reports::calculation::aggregate_category;
/// use payroll_reports::models::{PayrollRecord, contribution_categories};
/// use rust_decimal::Decimal;
///
/// let records = vec![
///     PayrollRecord {
///         employee_name: "Dela Cruz, Juan".to_string(),
///         pagibig_contribution: Decimal::new(200, 0),
///         pagibig_employer: Decimal::new(200, 0),
///         ..Default::default()
///     },
///     PayrollRecord {
///         employee_name: "Santos, Ana".to_string(),
///         ..Default::default()
///     },
/// ];
/// let categories = contribution_categories();
/// let summary = aggregate_category(&records, &categories[2]);
///
/// assert_eq!(summary.rows.len(), 1);
/// assert_eq!(summary.totals.total, Decimal::new(400, 0));
/// ```
pub fn aggregate_category<'a>(
    records: &'a [PayrollRecord],
    definition: &'a CategoryDefinition,
) -> CategorySummary<'a> {
    let rows: Vec<CategoryRow<'a>> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.amount(definition.employee_field) > Decimal::ZERO)
        .map(|(record_index, record)| derive_row(record_index, record, definition))
        .collect();

    let totals: CategoryTotals = rows.iter().sum();

    CategorySummary {
        definition,
        rows,
        totals,
    }
}

/// Aggregates every category, dropping the empty ones.
///
/// Grand totals are the sum of the retained category totals, so they always
/// agree with the printed section totals even when two categories read the
/// same column.
pub fn aggregate_categories<'a>(
    records: &'a [PayrollRecord],
    definitions: &'a [CategoryDefinition],
) -> CategoryReport<'a> {
    let categories: Vec<CategorySummary<'a>> = definitions
        .iter()
        .map(|definition| aggregate_category(records, definition))
        .filter(|summary| {
            if summary.is_empty() {
                tracing::debug!(category = %summary.definition.title, "Omitting empty category");
            }
            !summary.is_empty()
        })
        .collect();

    let grand_totals: CategoryTotals = categories.iter().map(|summary| summary.totals).sum();

    CategoryReport {
        categories,
        grand_totals,
    }
}

fn derive_row<'a>(
    record_index: usize,
    record: &'a PayrollRecord,
    definition: &CategoryDefinition,
) -> CategoryRow<'a> {
    let employee_share = record.amount(definition.employee_field);
    let employer_share = definition
        .employer_field
        .map(|field| record.amount(field))
        .unwrap_or(Decimal::ZERO);
    let additional_employer_share = if definition.has_additional_employer_share {
        ADDITIONAL_EMPLOYER_SHARE
    } else {
        Decimal::ZERO
    };

    CategoryRow {
        record,
        record_index,
        employee_share,
        employer_share,
        additional_employer_share,
        total: employee_share + employer_share + additional_employer_share,
    }
}

//! Payroll sheet rows.
//!
//! This module derives the payroll register: one row per record with the
//! rate/attendance display, summed overtime and night-differential hours,
//! grouped loans and a grand-total row over every numeric column.

use std::ops::Add;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{
    LOAN_FIELDS, NIGHT_DIFF_HOUR_FIELDS, OTHER_DEDUCTION_FIELDS, OVERTIME_HOUR_FIELDS,
    PayrollRecord,
};

/// How the employee's attendance is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RateBasis {
    /// Paid per day.
    Daily,
    /// Paid per hour.
    Hourly,
}

impl RateBasis {
    /// The one-letter code printed beside the attendance figure.
    pub fn code(self) -> &'static str {
        match self {
            RateBasis::Daily => "D",
            RateBasis::Hourly => "H",
        }
    }
}

/// The rate and attendance shown for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateDisplay {
    /// Daily or hourly rate.
    pub rate: Decimal,
    /// Days or hours worked.
    pub attendance: Decimal,
    /// Which of the two the figures are.
    pub basis: RateBasis,
}

/// Chooses the rate and attendance to display.
///
/// Days worked take precedence; hours worked are used only when no days were
/// recorded. With neither, the daily rate is shown against zero attendance.
///
/// # Examples
///
/// ```
/// use payroll_reports::calculation::{RateBasis, rate_display};
/// use payroll_reports::models::PayrollRecord;
/// use rust_decimal::Decimal;
///
/// let record = PayrollRecord {
///     hourly_rate: Decimal::new(75, 0),
///     hours_worked: Decimal::new(40, 0),
///     ..Default::default()
/// };
/// let display = rate_display(&record);
/// assert_eq!(display.rate, Decimal::new(75, 0));
/// assert_eq!(display.basis, RateBasis::Hourly);
/// ```
pub fn rate_display(record: &PayrollRecord) -> RateDisplay {
    if record.days_worked > Decimal::ZERO {
        RateDisplay {
            rate: record.daily_rate,
            attendance: record.days_worked,
            basis: RateBasis::Daily,
        }
    } else if record.hours_worked > Decimal::ZERO {
        RateDisplay {
            rate: record.hourly_rate,
            attendance: record.hours_worked,
            basis: RateBasis::Hourly,
        }
    } else {
        RateDisplay {
            rate: record.daily_rate,
            attendance: Decimal::ZERO,
            basis: RateBasis::Daily,
        }
    }
}

/// The numeric columns of a payroll-sheet row.
///
/// Also used for the grand-total row, which is the column-wise sum of every
/// record's figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PayrollFigures {
    /// Daily or hourly rate.
    pub rate: Decimal,
    /// Days or hours worked.
    pub attendance: Decimal,
    /// Basic salary.
    pub basic_salary: Decimal,
    /// Sum of the five overtime hour columns.
    pub overtime_hours: Decimal,
    /// Overtime pay.
    pub overtime_pay: Decimal,
    /// Sum of the three night-differential hour columns.
    pub night_diff_hours: Decimal,
    /// Night differential pay.
    pub night_diff_pay: Decimal,
    /// Holiday pay.
    pub holiday_pay: Decimal,
    /// ECOLA.
    pub ecola: Decimal,
    /// Other allowances.
    pub allowance: Decimal,
    /// Gross pay.
    pub gross_pay: Decimal,
    /// SSS employee share.
    pub sss: Decimal,
    /// PhilHealth employee share.
    pub philhealth: Decimal,
    /// Pag-IBIG employee share.
    pub pagibig: Decimal,
    /// Withholding tax.
    pub withholding_tax: Decimal,
    /// SSS and Pag-IBIG loans, regular and calamity.
    pub loans: Decimal,
    /// Remaining single-value deductions.
    pub other_deductions: Decimal,
    /// Total deductions.
    pub total_deductions: Decimal,
    /// Net pay.
    pub net_pay: Decimal,
}

impl Add for PayrollFigures {
    type Output = PayrollFigures;

    fn add(self, rhs: PayrollFigures) -> PayrollFigures {
        PayrollFigures {
            rate: self.rate + rhs.rate,
            attendance: self.attendance + rhs.attendance,
            basic_salary: self.basic_salary + rhs.basic_salary,
            overtime_hours: self.overtime_hours + rhs.overtime_hours,
            overtime_pay: self.overtime_pay + rhs.overtime_pay,
            night_diff_hours: self.night_diff_hours + rhs.night_diff_hours,
            night_diff_pay: self.night_diff_pay + rhs.night_diff_pay,
            holiday_pay: self.holiday_pay + rhs.holiday_pay,
            ecola: self.ecola + rhs.ecola,
            allowance: self.allowance + rhs.allowance,
            gross_pay: self.gross_pay + rhs.gross_pay,
            sss: self.sss + rhs.sss,
            philhealth: self.philhealth + rhs.philhealth,
            pagibig: self.pagibig + rhs.pagibig,
            withholding_tax: self.withholding_tax + rhs.withholding_tax,
            loans: self.loans + rhs.loans,
            other_deductions: self.other_deductions + rhs.other_deductions,
            total_deductions: self.total_deductions + rhs.total_deductions,
            net_pay: self.net_pay + rhs.net_pay,
        }
    }
}

/// One payroll-sheet line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollSheetRow<'a> {
    /// The record the row was derived from.
    #[serde(skip)]
    pub record: &'a PayrollRecord,
    /// Whether the attendance figure is days or hours.
    pub basis: RateBasis,
    /// Numeric columns.
    pub figures: PayrollFigures,
}

/// All payroll-sheet lines and the grand-total row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollSheet<'a> {
    /// One row per record, in record order.
    pub rows: Vec<PayrollSheetRow<'a>>,
    /// Column-wise sum of every row.
    pub totals: PayrollFigures,
}

/// Builds the row for a single record.
pub fn payroll_sheet_row(record: &PayrollRecord) -> PayrollSheetRow<'_> {
    let display = rate_display(record);

    PayrollSheetRow {
        record,
        basis: display.basis,
        figures: PayrollFigures {
            rate: display.rate,
            attendance: display.attendance,
            basic_salary: record.basic_salary,
            overtime_hours: record.sum_of(&OVERTIME_HOUR_FIELDS),
            overtime_pay: record.overtime_pay,
            night_diff_hours: record.sum_of(&NIGHT_DIFF_HOUR_FIELDS),
            night_diff_pay: record.night_diff_pay,
            holiday_pay: record.holiday_pay,
            ecola: record.ecola,
            allowance: record.allowance,
            gross_pay: record.gross_pay,
            sss: record.sss_contribution,
            philhealth: record.philhealth_contribution,
            pagibig: record.pagibig_contribution,
            withholding_tax: record.withholding_tax,
            loans: record.sum_of(&LOAN_FIELDS),
            other_deductions: record.sum_of(&OTHER_DEDUCTION_FIELDS),
            total_deductions: record.total_deductions,
            net_pay: record.net_pay,
        },
    }
}

/// Builds the payroll sheet for a record slice.
///
/// No record is filtered out. The totals row sums every numeric column.
pub fn payroll_sheet(records: &[PayrollRecord]) -> PayrollSheet<'_> {
    let rows: Vec<PayrollSheetRow<'_>> = records.iter().map(payroll_sheet_row).collect();
    let totals = rows
        .iter()
        .map(|row| row.figures)
        .fold(PayrollFigures::default(), Add::add);

    PayrollSheet { rows, totals }
}

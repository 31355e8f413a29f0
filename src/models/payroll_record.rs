//! Payroll record model and the amount-field mapping table.
//!
//! A [`PayrollRecord`] is one employee's pay for one period. Every numeric
//! column is reachable through an [`AmountField`], which is how category
//! tables refer to record columns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lenient amount parsing: anything that is not a number reads as zero.
mod lenient {
    use rust_decimal::Decimal;
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Number(Decimal),
        Other(IgnoredAny),
    }

    pub fn amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Loose>::deserialize(deserializer)? {
            Some(Loose::Number(value)) => value,
            Some(Loose::Other(_)) | None => Decimal::ZERO,
        })
    }
}

/// One employee's computed pay for one pay period.
///
/// Amounts are trusted as supplied; `gross_pay - total_deductions == net_pay`
/// is not checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Employee display name. Required on every printed document.
    #[serde(default)]
    pub employee_name: String,
    /// Employee identification number.
    #[serde(default)]
    pub id_number: String,
    /// Job title.
    #[serde(default)]
    pub position: String,
    /// Department or assignment.
    #[serde(default)]
    pub department: String,

    /// Rate per day worked.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub daily_rate: Decimal,
    /// Rate per hour worked.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub hourly_rate: Decimal,
    /// Days worked in the period.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub days_worked: Decimal,
    /// Hours worked in the period, for hourly-paid employees.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub hours_worked: Decimal,

    /// Basic salary for the period.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub basic_salary: Decimal,
    /// Emergency cost-of-living allowance.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub ecola: Decimal,
    /// Holiday premium pay.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub holiday_pay: Decimal,
    /// Overtime pay.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub overtime_pay: Decimal,
    /// Night differential pay.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub night_diff_pay: Decimal,
    /// Other allowances.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub allowance: Decimal,

    /// Overtime hours on ordinary days.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub ot_regular_hours: Decimal,
    /// Overtime hours on rest days.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub ot_rest_day_hours: Decimal,
    /// Overtime hours on special non-working holidays.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub ot_special_holiday_hours: Decimal,
    /// Overtime hours on regular holidays.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub ot_regular_holiday_hours: Decimal,
    /// Overtime hours falling in the night shift.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub ot_night_hours: Decimal,

    /// Night differential hours on ordinary days.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub nd_regular_hours: Decimal,
    /// Night differential hours on rest days.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub nd_rest_day_hours: Decimal,
    /// Night differential hours on holidays.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub nd_holiday_hours: Decimal,

    /// SSS employee share.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub sss_contribution: Decimal,
    /// SSS employer share.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub sss_employer: Decimal,
    /// PhilHealth employee share.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub philhealth_contribution: Decimal,
    /// PhilHealth employer share.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub philhealth_employer: Decimal,
    /// Pag-IBIG employee share.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub pagibig_contribution: Decimal,
    /// Pag-IBIG employer share.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub pagibig_employer: Decimal,
    /// Withholding tax.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub withholding_tax: Decimal,

    /// SSS salary loan amortization.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub sss_loan: Decimal,
    /// SSS calamity loan amortization.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub sss_calamity_loan: Decimal,
    /// Pag-IBIG multi-purpose loan amortization.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub pagibig_loan: Decimal,
    /// Pag-IBIG calamity loan amortization.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub pagibig_calamity_loan: Decimal,
    /// Company loan amortization.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub company_loan: Decimal,
    /// Cash advance repayment.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub cash_advance: Decimal,
    /// HMO premium.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub hmo_premium: Decimal,
    /// Insurance premium.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub insurance_premium: Decimal,
    /// Uniform deduction.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub uniform: Decimal,
    /// Processing fee.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub processing_fee: Decimal,
    /// Any other deduction.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub other_deductions: Decimal,

    /// Gross pay.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub gross_pay: Decimal,
    /// Total deductions.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub total_deductions: Decimal,
    /// Net pay.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub net_pay: Decimal,
}

/// A numeric column of [`PayrollRecord`].
///
/// Category tables name columns with this enum instead of string keys, so an
/// unknown column is rejected when the table is loaded rather than read as
/// zero at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum AmountField {
    DailyRate,
    HourlyRate,
    DaysWorked,
    HoursWorked,
    BasicSalary,
    Ecola,
    HolidayPay,
    OvertimePay,
    NightDiffPay,
    Allowance,
    OtRegularHours,
    OtRestDayHours,
    OtSpecialHolidayHours,
    OtRegularHolidayHours,
    OtNightHours,
    NdRegularHours,
    NdRestDayHours,
    NdHolidayHours,
    SssContribution,
    SssEmployer,
    PhilhealthContribution,
    PhilhealthEmployer,
    PagibigContribution,
    PagibigEmployer,
    WithholdingTax,
    SssLoan,
    SssCalamityLoan,
    PagibigLoan,
    PagibigCalamityLoan,
    CompanyLoan,
    CashAdvance,
    HmoPremium,
    InsurancePremium,
    Uniform,
    ProcessingFee,
    OtherDeductions,
    GrossPay,
    TotalDeductions,
    NetPay,
}

/// The five overtime hour columns summed into a payroll-sheet OT figure.
pub const OVERTIME_HOUR_FIELDS: [AmountField; 5] = [
    AmountField::OtRegularHours,
    AmountField::OtRestDayHours,
    AmountField::OtSpecialHolidayHours,
    AmountField::OtRegularHolidayHours,
    AmountField::OtNightHours,
];

/// The three night-differential hour columns.
pub const NIGHT_DIFF_HOUR_FIELDS: [AmountField; 3] = [
    AmountField::NdRegularHours,
    AmountField::NdRestDayHours,
    AmountField::NdHolidayHours,
];

/// The four government loan columns shown as "Loans" on the payroll sheet.
pub const LOAN_FIELDS: [AmountField; 4] = [
    AmountField::SssLoan,
    AmountField::PagibigLoan,
    AmountField::SssCalamityLoan,
    AmountField::PagibigCalamityLoan,
];

/// Single-value deductions that are not loans.
pub const OTHER_DEDUCTION_FIELDS: [AmountField; 7] = [
    AmountField::CompanyLoan,
    AmountField::CashAdvance,
    AmountField::HmoPremium,
    AmountField::InsurancePremium,
    AmountField::Uniform,
    AmountField::ProcessingFee,
    AmountField::OtherDeductions,
];

impl PayrollRecord {
    /// Reads a numeric column.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_reports::models::{AmountField, PayrollRecord};
    /// use rust_decimal::Decimal;
    ///
    /// let record = PayrollRecord {
    ///     sss_loan: Decimal::new(10000, 2),
    ///     ..Default::default()
    /// };
    /// assert_eq!(record.amount(AmountField::SssLoan), Decimal::new(10000, 2));
    /// assert_eq!(record.amount(AmountField::PagibigLoan), Decimal::ZERO);
    /// ```
    pub fn amount(&self, field: AmountField) -> Decimal {
        match field {
            AmountField::DailyRate => self.daily_rate,
            AmountField::HourlyRate => self.hourly_rate,
            AmountField::DaysWorked => self.days_worked,
            AmountField::HoursWorked => self.hours_worked,
            AmountField::BasicSalary => self.basic_salary,
            AmountField::Ecola => self.ecola,
            AmountField::HolidayPay => self.holiday_pay,
            AmountField::OvertimePay => self.overtime_pay,
            AmountField::NightDiffPay => self.night_diff_pay,
            AmountField::Allowance => self.allowance,
            AmountField::OtRegularHours => self.ot_regular_hours,
            AmountField::OtRestDayHours => self.ot_rest_day_hours,
            AmountField::OtSpecialHolidayHours => self.ot_special_holiday_hours,
            AmountField::OtRegularHolidayHours => self.ot_regular_holiday_hours,
            AmountField::OtNightHours => self.ot_night_hours,
            AmountField::NdRegularHours => self.nd_regular_hours,
            AmountField::NdRestDayHours => self.nd_rest_day_hours,
            AmountField::NdHolidayHours => self.nd_holiday_hours,
            AmountField::SssContribution => self.sss_contribution,
            AmountField::SssEmployer => self.sss_employer,
            AmountField::PhilhealthContribution => self.philhealth_contribution,
            AmountField::PhilhealthEmployer => self.philhealth_employer,
            AmountField::PagibigContribution => self.pagibig_contribution,
            AmountField::PagibigEmployer => self.pagibig_employer,
            AmountField::WithholdingTax => self.withholding_tax,
            AmountField::SssLoan => self.sss_loan,
            AmountField::SssCalamityLoan => self.sss_calamity_loan,
            AmountField::PagibigLoan => self.pagibig_loan,
            AmountField::PagibigCalamityLoan => self.pagibig_calamity_loan,
            AmountField::CompanyLoan => self.company_loan,
            AmountField::CashAdvance => self.cash_advance,
            AmountField::HmoPremium => self.hmo_premium,
            AmountField::InsurancePremium => self.insurance_premium,
            AmountField::Uniform => self.uniform,
            AmountField::ProcessingFee => self.processing_fee,
            AmountField::OtherDeductions => self.other_deductions,
            AmountField::GrossPay => self.gross_pay,
            AmountField::TotalDeductions => self.total_deductions,
            AmountField::NetPay => self.net_pay,
        }
    }

    /// Sums a set of numeric columns.
    pub fn sum_of(&self, fields: &[AmountField]) -> Decimal {
        fields.iter().map(|field| self.amount(*field)).sum()
    }

    /// Returns true if the record has a printable employee name.
    pub fn has_display_name(&self) -> bool {
        !self.employee_name.trim().is_empty()
    }
}

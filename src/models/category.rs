//! Category definitions for the contributions report and deduction schedule.
//!
//! A category pairs a record column with the title printed above its section
//! and, for statutory contributions, the column holding the employer share.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::payroll_record::AmountField;

/// Static metadata for one report section.
///
/// Construct through [`CategoryDefinition::contribution`] or
/// [`CategoryDefinition::deduction`]; definitions loaded from YAML go through
/// [`CategoryDefinition::validate`] once at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    /// Section title (e.g., "SSS", "Pag-IBIG Calamity Loan").
    pub title: String,
    /// Column holding the employee share or the deduction amount.
    pub employee_field: AmountField,
    /// Column holding the employer share, for contribution categories.
    #[serde(default)]
    pub employer_field: Option<AmountField>,
    /// Whether the category carries an extra employer-paid component
    /// (Employees' Compensation for SSS).
    #[serde(default)]
    pub has_additional_employer_share: bool,
}

impl CategoryDefinition {
    /// Creates a contribution category with an employer share.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_reports::models::{AmountField, CategoryDefinition};
    ///
    /// let sss = CategoryDefinition::contribution(
    ///     "SSS",
    ///     AmountField::SssContribution,
    ///     AmountField::SssEmployer,
    ///     true,
    /// )
    /// .unwrap();
    /// assert_eq!(sss.employer_field, Some(AmountField::SssEmployer));
    /// ```
    pub fn contribution(
        title: impl Into<String>,
        employee_field: AmountField,
        employer_field: AmountField,
        has_additional_employer_share: bool,
    ) -> EngineResult<Self> {
        let definition = Self {
            title: title.into(),
            employee_field,
            employer_field: Some(employer_field),
            has_additional_employer_share,
        };
        definition.validate()?;
        Ok(definition)
    }

    /// Creates a single-value deduction category.
    pub fn deduction(title: impl Into<String>, field: AmountField) -> EngineResult<Self> {
        let definition = Self {
            title: title.into(),
            employee_field: field,
            employer_field: None,
            has_additional_employer_share: false,
        };
        definition.validate()?;
        Ok(definition)
    }

    /// Checks the definition is printable and internally consistent.
    pub fn validate(&self) -> EngineResult<()> {
        if self.title.trim().is_empty() {
            return Err(EngineError::InvalidCategory {
                title: self.title.clone(),
                message: "title must not be empty".to_string(),
            });
        }
        if self.has_additional_employer_share && self.employer_field.is_none() {
            return Err(EngineError::InvalidCategory {
                title: self.title.clone(),
                message: "additional employer share requires an employer field".to_string(),
            });
        }
        if self.employer_field == Some(self.employee_field) {
            return Err(EngineError::InvalidCategory {
                title: self.title.clone(),
                message: "employee and employer shares must use different fields".to_string(),
            });
        }
        Ok(())
    }
}

/// The three statutory contribution categories, in report order.
pub fn contribution_categories() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition {
            title: "SSS".to_string(),
            employee_field: AmountField::SssContribution,
            employer_field: Some(AmountField::SssEmployer),
            has_additional_employer_share: true,
        },
        CategoryDefinition {
            title: "PhilHealth".to_string(),
            employee_field: AmountField::PhilhealthContribution,
            employer_field: Some(AmountField::PhilhealthEmployer),
            has_additional_employer_share: false,
        },
        CategoryDefinition {
            title: "Pag-IBIG".to_string(),
            employee_field: AmountField::PagibigContribution,
            employer_field: Some(AmountField::PagibigEmployer),
            has_additional_employer_share: false,
        },
    ]
}

/// The eleven single-value deduction categories, in schedule order.
pub fn deduction_categories() -> Vec<CategoryDefinition> {
    [
        ("SSS Salary Loan", AmountField::SssLoan),
        ("SSS Calamity Loan", AmountField::SssCalamityLoan),
        ("Pag-IBIG Multi-Purpose Loan", AmountField::PagibigLoan),
        ("Pag-IBIG Calamity Loan", AmountField::PagibigCalamityLoan),
        ("Company Loan", AmountField::CompanyLoan),
        ("Cash Advance", AmountField::CashAdvance),
        ("HMO Premium", AmountField::HmoPremium),
        ("Insurance Premium", AmountField::InsurancePremium),
        ("Uniform", AmountField::Uniform),
        ("Processing Fee", AmountField::ProcessingFee),
        ("Other Deductions", AmountField::OtherDeductions),
    ]
    .into_iter()
    .map(|(title, field)| CategoryDefinition {
        title: title.to_string(),
        employee_field: field,
        employer_field: None,
        has_additional_employer_share: false,
    })
    .collect()
}

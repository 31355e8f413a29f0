//! Configuration types for report generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{CategoryDefinition, contribution_categories, deduction_categories};

/// People who sign the printed reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signatories {
    /// Name printed under "Prepared by".
    #[serde(default)]
    pub prepared_by: String,
    /// Name printed under "Checked by".
    #[serde(default)]
    pub checked_by: String,
    /// Name printed under "Approved by".
    #[serde(default)]
    pub approved_by: String,
}

/// The organization printed in every report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Registered name.
    pub name: String,
    /// Address line under the name.
    #[serde(default)]
    pub address: Option<String>,
    /// Employer SSS number, printed on the remittance report.
    #[serde(default)]
    pub sss_employer_number: Option<String>,
    /// Report signatories.
    #[serde(default)]
    pub signatories: Signatories,
}

impl Default for Organization {
    fn default() -> Self {
        Self {
            name: "PAYROLL DEPARTMENT".to_string(),
            address: None,
            sss_employer_number: None,
            signatories: Signatories::default(),
        }
    }
}

fn default_payslips_per_page() -> usize {
    2
}

fn default_rows_per_page() -> usize {
    20
}

fn default_currency_label() -> String {
    "PHP".to_string()
}

/// Page layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Payslips stacked on one page.
    #[serde(default = "default_payslips_per_page")]
    pub payslips_per_page: usize,
    /// Table rows per page before a table continues on the next page.
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
    /// Currency label printed beside amounts in words.
    #[serde(default = "default_currency_label")]
    pub currency_label: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            payslips_per_page: default_payslips_per_page(),
            rows_per_page: default_rows_per_page(),
            currency_label: default_currency_label(),
        }
    }
}

impl LayoutConfig {
    /// Rejects layouts that cannot place anything on a page.
    pub fn validate(&self, path: &str) -> EngineResult<()> {
        if self.payslips_per_page == 0 || self.rows_per_page == 0 {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: "payslips_per_page and rows_per_page must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Optional overrides of the built-in category tables (categories.yaml).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoriesConfig {
    /// Replacement contribution categories.
    #[serde(default)]
    pub contributions: Option<Vec<CategoryDefinition>>,
    /// Replacement deduction categories.
    #[serde(default)]
    pub deductions: Option<Vec<CategoryDefinition>>,
}

/// The complete report configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Header organization.
    pub organization: Organization,
    /// Page layout.
    pub layout: LayoutConfig,
    /// Sections of the contributions report.
    pub contribution_categories: Vec<CategoryDefinition>,
    /// Sections of the deduction schedule.
    pub deduction_categories: Vec<CategoryDefinition>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            organization: Organization::default(),
            layout: LayoutConfig::default(),
            contribution_categories: contribution_categories(),
            deduction_categories: deduction_categories(),
        }
    }
}

impl ReportConfig {
    /// Creates a configuration with built-in categories for the given organization.
    pub fn for_organization(organization: Organization) -> Self {
        Self {
            organization,
            ..Self::default()
        }
    }
}

//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading report
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::CategoryDefinition;

use super::types::{CategoriesConfig, LayoutConfig, Organization, ReportConfig};

/// Loads and provides access to report configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── organization.yaml   # Header name, address, signatories (required)
/// ├── layout.yaml         # Payslips per page, rows per page (optional)
/// └── categories.yaml     # Contribution/deduction table overrides (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_reports::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Reports for: {}", loader.config().organization.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ReportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `organization.yaml` is missing, if any present file
    /// contains invalid YAML or an unknown category column, or if a category
    /// or layout fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let organization = Self::load_yaml::<Organization>(&path.join("organization.yaml"))?;

        let layout_path = path.join("layout.yaml");
        let layout = Self::load_optional_yaml::<LayoutConfig>(&layout_path)?.unwrap_or_default();
        layout.validate(&layout_path.display().to_string())?;

        let categories_path = path.join("categories.yaml");
        let categories =
            Self::load_optional_yaml::<CategoriesConfig>(&categories_path)?.unwrap_or_default();

        let mut config = ReportConfig {
            organization,
            layout,
            ..ReportConfig::default()
        };
        if let Some(contributions) = categories.contributions {
            config.contribution_categories = Self::validated(contributions)?;
        }
        if let Some(deductions) = categories.deductions {
            config.deduction_categories = Self::validated(deductions)?;
        }

        tracing::info!(
            path = %path.display(),
            organization = %config.organization.name,
            contribution_categories = config.contribution_categories.len(),
            deduction_categories = config.deduction_categories.len(),
            "Loaded report configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Like [`Self::load_yaml`], but a missing file is `None`.
    fn load_optional_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_yaml(path).map(Some)
    }

    fn validated(definitions: Vec<CategoryDefinition>) -> EngineResult<Vec<CategoryDefinition>> {
        for definition in &definitions {
            definition.validate()?;
        }
        Ok(definitions)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ReportConfig {
        self.config
    }
}

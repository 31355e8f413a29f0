//! Configuration loading and management for report generation.
//!
//! This module loads the organization header, page layout and optional
//! category table overrides from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_reports::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Organization: {}", config.config().organization.name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CategoriesConfig, LayoutConfig, Organization, ReportConfig, Signatories};

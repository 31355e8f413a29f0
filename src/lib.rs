//! Payroll report generation.
//!
//! This crate turns already-computed payroll records into printable documents:
//! payslips, a payroll sheet, a deduction schedule and a government
//! contributions remittance report (SSS, PhilHealth, Pag-IBIG).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod render;

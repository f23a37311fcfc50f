//! Labor Cost Engine for Colombian employer payroll contributions
//!
//! This crate computes the total monthly cost of an employee salary to the
//! employer: transport allowance, social security, social-benefit accruals
//! and payroll taxes, driven by a statutory rate table for one legal year.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;

//! Core data models for the Labor Cost Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod cost_breakdown;
mod cost_request;
mod period;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use cost_breakdown::{CostBreakdown, CostCalculation, CostCategory, CostGroup, CostLine};
pub use cost_request::{CostRequest, DEFAULT_RISK_LEVEL};
pub use period::Period;

//! Request types for the Labor Cost Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DEFAULT_RISK_LEVEL, Period};

/// Request body for the `/calculate` endpoint.
///
/// Every field is optional. A missing or non-positive `base_salary` is
/// replaced by the minimum wage of the active rate table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Monthly base salary.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    /// Occupational-risk level, 1 through 5.
    ///
    /// Accepted as any integer so that out-of-range levels are reported as
    /// invalid risk levels rather than malformed input.
    #[serde(default = "default_risk_level")]
    pub risk_level: i64,
    /// Whether the employer pays the health contribution.
    #[serde(default)]
    pub include_health_contribution: bool,
    /// Whether the transport allowance is paid when the salary qualifies.
    #[serde(default = "default_true")]
    pub include_transport_allowance: bool,
    /// The period amounts are reported for.
    #[serde(default)]
    pub period: Period,
}

fn default_risk_level() -> i64 {
    DEFAULT_RISK_LEVEL.into()
}

fn default_true() -> bool {
    true
}

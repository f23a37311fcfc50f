//! Cost request model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The risk level used when none is given.
pub const DEFAULT_RISK_LEVEL: u8 = 1;

/// All inputs of one employer cost calculation.
///
/// Every parameter is passed explicitly; the calculator reads nothing else
/// besides the [`crate::config::RateTable`].
///
/// # Example
///
/// ```
/// use labor_cost_engine::models::CostRequest;
/// use rust_decimal::Decimal;
///
/// let request = CostRequest::new(Decimal::from(2_500_000))
///     .with_risk_level(3)
///     .with_health_contribution(true);
///
/// assert_eq!(request.risk_level, 3);
/// assert!(request.include_transport_allowance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRequest {
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Occupational-risk level, 1 through 5.
    pub risk_level: u8,
    /// Whether the employer pays the health-insurance contribution.
    pub include_health_contribution: bool,
    /// Whether the transport allowance is paid when the salary qualifies.
    pub include_transport_allowance: bool,
}

impl CostRequest {
    /// Creates a request with the default flags: risk level 1, health
    /// contribution waived, transport allowance included.
    pub fn new(base_salary: Decimal) -> Self {
        Self {
            base_salary,
            risk_level: DEFAULT_RISK_LEVEL,
            include_health_contribution: false,
            include_transport_allowance: true,
        }
    }

    /// Sets the occupational-risk level.
    pub fn with_risk_level(mut self, risk_level: u8) -> Self {
        self.risk_level = risk_level;
        self
    }

    /// Sets whether the employer health contribution is paid.
    pub fn with_health_contribution(mut self, include: bool) -> Self {
        self.include_health_contribution = include;
        self
    }

    /// Sets whether the transport allowance is paid when eligible.
    pub fn with_transport_allowance(mut self, include: bool) -> Self {
        self.include_transport_allowance = include;
        self
    }
}

//! Reporting period for presenting a cost breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The period a breakdown is presented for.
///
/// Calculations are always monthly; an annual view multiplies every monetary
/// amount by twelve.
///
/// # Example
///
/// ```
/// use labor_cost_engine::models::Period;
/// use rust_decimal::Decimal;
///
/// assert_eq!(Period::Annual.multiplier(), Decimal::from(12));
/// assert_eq!(Period::default(), Period::Monthly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// One month, the unit every rate is expressed in.
    #[default]
    Monthly,
    /// Twelve months.
    Annual,
}

impl Period {
    /// Returns how many months the period covers.
    pub fn multiplier(self) -> Decimal {
        match self {
            Period::Monthly => Decimal::ONE,
            Period::Annual => Decimal::from(12),
        }
    }
}

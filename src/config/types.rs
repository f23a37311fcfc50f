//! Rate table types for employer cost calculation.
//!
//! This module contains the strongly-typed rate structures. The `*Rates`
//! sections mirror the YAML rate files one to one; [`RateTable`] is the
//! validated, immutable form the calculator reads.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Multiple of the minimum wage up to which the transport allowance is paid.
pub const TRANSPORT_ALLOWANCE_WAGE_MULTIPLE: u32 = 2;

/// Multiple of the minimum wage below which payroll taxes are exempted.
pub const PAYROLL_TAX_EXEMPTION_WAGE_MULTIPLE: u32 = 10;

/// The risk levels every rate table must configure.
pub const RISK_LEVELS: [u8; 5] = [1, 2, 3, 4, 5];

/// Identifying information about a rate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTableMetadata {
    /// The legal year the rates belong to (e.g., 2026).
    pub year: i32,
    /// The jurisdiction the rates apply in (e.g., "CO").
    pub jurisdiction: String,
    /// The date from which the rates apply.
    pub effective_date: NaiveDate,
}

/// Employer social-security contribution rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityRates {
    /// Employer pension contribution rate.
    pub pension: Decimal,
    /// Employer health-insurance contribution rate.
    pub health: Decimal,
    /// Occupational-risk (ARL) rate by risk level.
    pub risk_by_level: BTreeMap<u8, Decimal>,
}

/// Social-benefit accrual rates (prestaciones sociales).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialBenefitRates {
    /// Service bonus (prima de servicios) rate.
    pub service_bonus: Decimal,
    /// Severance (cesantías) rate.
    pub severance: Decimal,
    /// Declared severance interest rate. Not read by the calculator.
    pub severance_interest: Decimal,
    /// Vacation rate.
    pub vacation: Decimal,
}

/// Payroll-tax rates (parafiscales).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTaxRates {
    /// Compensation fund (caja de compensación) rate.
    pub compensation_fund: Decimal,
    /// Job training (SENA) rate.
    pub job_training: Decimal,
    /// Child welfare (ICBF) rate.
    pub child_welfare: Decimal,
}

/// Rate file structure as written in YAML.
///
/// Thresholds are intentionally absent: they are always derived from
/// `minimum_wage` when the file becomes a [`RateTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTableConfig {
    /// Rate table metadata.
    pub metadata: RateTableMetadata,
    /// Statutory monthly minimum wage (SMMLV).
    pub minimum_wage: Decimal,
    /// Monthly transport allowance (auxilio de transporte).
    pub transport_allowance: Decimal,
    /// Social-security rates.
    pub social_security: SocialSecurityRates,
    /// Social-benefit rates.
    pub social_benefits: SocialBenefitRates,
    /// Payroll-tax rates.
    pub payroll_taxes: PayrollTaxRates,
}

/// The immutable statutory rate table for one legal year.
///
/// A `RateTable` is built once, either from [`RateTable::colombia_2026`] or
/// from a YAML file through [`crate::config::RateTableLoader`], and then
/// passed by reference to every calculation. It exposes no mutation.
///
/// # Example
///
/// ```
/// use labor_cost_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::colombia_2026();
/// assert_eq!(rates.minimum_wage(), Decimal::from(1_750_905));
/// assert_eq!(rates.transport_allowance_threshold(), Decimal::from(3_501_810));
/// assert!(rates.risk_rate(6).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateTable {
    metadata: RateTableMetadata,
    minimum_wage: Decimal,
    transport_allowance: Decimal,
    transport_allowance_threshold: Decimal,
    payroll_tax_exemption_threshold: Decimal,
    social_security: SocialSecurityRates,
    social_benefits: SocialBenefitRates,
    payroll_taxes: PayrollTaxRates,
}

impl RateTable {
    /// Builds a validated rate table, deriving both thresholds from the
    /// minimum wage.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRateTable`] when:
    /// - the minimum wage is not positive
    /// - any amount or rate is negative, or a rate exceeds 1
    /// - the risk levels are not exactly 1-5
    /// - a risk rate is lower than the rate of the level below it
    pub fn new(config: RateTableConfig) -> EngineResult<Self> {
        validate(&config)?;
        Ok(Self::derive(config))
    }

    /// The 2026 Colombian rate table.
    pub fn colombia_2026() -> Self {
        let risk_by_level = BTreeMap::from([
            (1, Decimal::new(522, 5)),
            (2, Decimal::new(1044, 5)),
            (3, Decimal::new(2436, 5)),
            (4, Decimal::new(4350, 5)),
            (5, Decimal::new(6700, 5)),
        ]);

        Self::derive(RateTableConfig {
            metadata: RateTableMetadata {
                year: 2026,
                jurisdiction: "CO".to_string(),
                effective_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default(),
            },
            minimum_wage: Decimal::from(1_750_905),
            transport_allowance: Decimal::from(249_095),
            social_security: SocialSecurityRates {
                pension: Decimal::new(12, 2),
                health: Decimal::new(85, 3),
                risk_by_level,
            },
            social_benefits: SocialBenefitRates {
                service_bonus: Decimal::new(833, 4),
                severance: Decimal::new(833, 4),
                severance_interest: Decimal::new(12, 2),
                vacation: Decimal::new(417, 4),
            },
            payroll_taxes: PayrollTaxRates {
                compensation_fund: Decimal::new(4, 2),
                job_training: Decimal::new(2, 2),
                child_welfare: Decimal::new(3, 2),
            },
        })
    }

    fn derive(config: RateTableConfig) -> Self {
        Self {
            transport_allowance_threshold: config.minimum_wage
                * Decimal::from(TRANSPORT_ALLOWANCE_WAGE_MULTIPLE),
            payroll_tax_exemption_threshold: config.minimum_wage
                * Decimal::from(PAYROLL_TAX_EXEMPTION_WAGE_MULTIPLE),
            metadata: config.metadata,
            minimum_wage: config.minimum_wage,
            transport_allowance: config.transport_allowance,
            social_security: config.social_security,
            social_benefits: config.social_benefits,
            payroll_taxes: config.payroll_taxes,
        }
    }

    /// Returns the rate table metadata.
    pub fn metadata(&self) -> &RateTableMetadata {
        &self.metadata
    }

    /// Returns the statutory monthly minimum wage.
    pub fn minimum_wage(&self) -> Decimal {
        self.minimum_wage
    }

    /// Returns the monthly transport allowance.
    pub fn transport_allowance(&self) -> Decimal {
        self.transport_allowance
    }

    /// Returns the salary up to which (inclusive) the transport allowance is paid.
    pub fn transport_allowance_threshold(&self) -> Decimal {
        self.transport_allowance_threshold
    }

    /// Returns the salary below which (exclusive) payroll taxes are exempted.
    pub fn payroll_tax_exemption_threshold(&self) -> Decimal {
        self.payroll_tax_exemption_threshold
    }

    /// Returns the social-security rates.
    pub fn social_security(&self) -> &SocialSecurityRates {
        &self.social_security
    }

    /// Returns the social-benefit rates.
    pub fn social_benefits(&self) -> &SocialBenefitRates {
        &self.social_benefits
    }

    /// Returns the payroll-tax rates.
    pub fn payroll_taxes(&self) -> &PayrollTaxRates {
        &self.payroll_taxes
    }

    /// Gets the occupational-risk rate for a risk level.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRiskLevel`] if the level is not
    /// configured. There is no fallback rate.
    pub fn risk_rate(&self, level: u8) -> EngineResult<Decimal> {
        self.social_security
            .risk_by_level
            .get(&level)
            .copied()
            .ok_or(EngineError::InvalidRiskLevel {
                level: level.into(),
            })
    }
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidRateTable {
        field: field.to_string(),
        message: message.into(),
    }
}

fn check_rate(field: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO {
        return Err(invalid(field, format!("must not be negative, got {}", rate)));
    }
    if rate > Decimal::ONE {
        return Err(invalid(field, format!("must not exceed 1, got {}", rate)));
    }
    Ok(())
}

fn validate(config: &RateTableConfig) -> EngineResult<()> {
    if config.minimum_wage <= Decimal::ZERO {
        return Err(invalid(
            "minimum_wage",
            format!("must be positive, got {}", config.minimum_wage),
        ));
    }
    if config.transport_allowance < Decimal::ZERO {
        return Err(invalid(
            "transport_allowance",
            format!("must not be negative, got {}", config.transport_allowance),
        ));
    }

    let ss = &config.social_security;
    check_rate("social_security.pension", ss.pension)?;
    check_rate("social_security.health", ss.health)?;

    let levels: Vec<u8> = ss.risk_by_level.keys().copied().collect();
    if levels != RISK_LEVELS {
        return Err(invalid(
            "social_security.risk_by_level",
            format!("must define exactly levels 1-5, got {:?}", levels),
        ));
    }
    let mut previous = Decimal::ZERO;
    for (level, rate) in &ss.risk_by_level {
        check_rate("social_security.risk_by_level", *rate)?;
        if *rate < previous {
            return Err(invalid(
                "social_security.risk_by_level",
                format!("level {} rate {} is lower than level {}", level, rate, level - 1),
            ));
        }
        previous = *rate;
    }

    let sb = &config.social_benefits;
    check_rate("social_benefits.service_bonus", sb.service_bonus)?;
    check_rate("social_benefits.severance", sb.severance)?;
    check_rate("social_benefits.severance_interest", sb.severance_interest)?;
    check_rate("social_benefits.vacation", sb.vacation)?;

    let pt = &config.payroll_taxes;
    check_rate("payroll_taxes.compensation_fund", pt.compensation_fund)?;
    check_rate("payroll_taxes.job_training", pt.job_training)?;
    check_rate("payroll_taxes.child_welfare", pt.child_welfare)?;

    Ok(())
}

//! Employer social-security contributions.
//!
//! Pension, health and occupational-risk (ARL) contributions are all charged
//! on the contribution base (IBC), which is the base salary unmodified.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::AuditStep;

/// The statute governing the social-security system.
pub const SOCIAL_SECURITY_LEGAL_REF: &str = "Ley 100 de 1993";

/// The result of the social-security rule, including the audit step.
#[derive(Debug, Clone)]
pub struct SocialSecurityResult {
    /// Employer pension contribution.
    pub pension: Decimal,
    /// Employer health contribution, zero when waived.
    pub health: Decimal,
    /// Occupational-risk insurance.
    pub risk: Decimal,
    /// True when the health contribution is not paid.
    pub is_health_contribution_waived: bool,
    /// `pension + health + risk`.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employer social-security contributions.
///
/// # Arguments
///
/// * `contribution_base` - The IBC (the base salary)
/// * `risk_level` - The occupational-risk level, 1 through 5
/// * `include_health` - Whether the employer pays the health contribution
/// * `rates` - The rate table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidRiskLevel`] when the risk level
/// is not configured in `rates`.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::calculate_social_security;
/// use labor_cost_engine::config::RateTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateTable::colombia_2026();
/// let result = calculate_social_security(Decimal::from(1_750_905), 1, true, &rates, 2).unwrap();
///
/// assert_eq!(result.pension, Decimal::from_str("210108.6").unwrap());
/// assert_eq!(result.health, Decimal::from_str("148826.925").unwrap());
/// ```
pub fn calculate_social_security(
    contribution_base: Decimal,
    risk_level: u8,
    include_health: bool,
    rates: &RateTable,
    step_number: u32,
) -> EngineResult<SocialSecurityResult> {
    let risk_rate = rates.risk_rate(risk_level)?;
    let ss = rates.social_security();

    let pension = contribution_base * ss.pension;
    let risk = contribution_base * risk_rate;
    let health = if include_health {
        contribution_base * ss.health
    } else {
        Decimal::ZERO
    };
    let is_health_contribution_waived = !include_health;
    let total = pension + health + risk;

    let health_reasoning = if is_health_contribution_waived {
        "health waived".to_string()
    } else {
        format!("health ${} x {} = ${}", contribution_base, ss.health, health)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_security".to_string(),
        rule_name: "Social Security Contributions".to_string(),
        legal_ref: SOCIAL_SECURITY_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "contribution_base": contribution_base.to_string(),
            "risk_level": risk_level,
            "include_health": include_health
        }),
        output: serde_json::json!({
            "pension": pension.to_string(),
            "health": health.to_string(),
            "risk": risk.to_string(),
            "is_health_contribution_waived": is_health_contribution_waived,
            "total": total.to_string()
        }),
        reasoning: format!(
            "pension ${} x {} = ${}; {}; risk level {} ${} x {} = ${}",
            contribution_base,
            ss.pension,
            pension,
            health_reasoning,
            risk_level,
            contribution_base,
            risk_rate,
            risk
        ),
    };

    Ok(SocialSecurityResult {
        pension,
        health,
        risk,
        is_health_contribution_waived,
        total,
        audit_step,
    })
}

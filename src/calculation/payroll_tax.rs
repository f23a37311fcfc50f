//! Payroll taxes (parafiscales).
//!
//! The compensation fund is always charged. Job training (SENA) and child
//! welfare (ICBF) are exempted when either the employer health contribution
//! is waived or the salary is below ten minimum wages.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::AuditStep;

/// The statute granting the payroll-tax exemption.
pub const PAYROLL_TAX_LEGAL_REF: &str = "Estatuto Tributario art. 114-1";

/// The result of the payroll-tax rule, including the audit step.
#[derive(Debug, Clone)]
pub struct PayrollTaxResult {
    /// True when the salary is below the exemption threshold.
    pub is_generally_exempt: bool,
    /// Compensation fund contribution.
    pub compensation_fund: Decimal,
    /// Job training contribution, zero when exempt.
    pub job_training: Decimal,
    /// Child welfare contribution, zero when exempt.
    pub child_welfare: Decimal,
    /// `compensation_fund + job_training + child_welfare`.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the payroll taxes.
///
/// The exemption threshold is exclusive: a salary exactly equal to
/// [`RateTable::payroll_tax_exemption_threshold`] is not generally exempt.
///
/// # Arguments
///
/// * `contribution_base` - The IBC (the base salary)
/// * `health_contribution_waived` - Whether the health contribution is waived
/// * `rates` - The rate table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::calculate_payroll_tax;
/// use labor_cost_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::colombia_2026();
/// let result = calculate_payroll_tax(Decimal::from(20_000_000), false, &rates, 4);
///
/// assert!(!result.is_generally_exempt);
/// assert_eq!(result.job_training, Decimal::from(400_000));
/// assert_eq!(result.child_welfare, Decimal::from(600_000));
/// ```
pub fn calculate_payroll_tax(
    contribution_base: Decimal,
    health_contribution_waived: bool,
    rates: &RateTable,
    step_number: u32,
) -> PayrollTaxResult {
    let pt = rates.payroll_taxes();
    let threshold = rates.payroll_tax_exemption_threshold();

    let is_generally_exempt = contribution_base < threshold;
    let exempt = health_contribution_waived || is_generally_exempt;

    let compensation_fund = contribution_base * pt.compensation_fund;
    let (job_training, child_welfare) = if exempt {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (
            contribution_base * pt.job_training,
            contribution_base * pt.child_welfare,
        )
    };
    let total = compensation_fund + job_training + child_welfare;

    let reasoning = match (health_contribution_waived, is_generally_exempt) {
        (false, false) => format!(
            "Salary ${} >= ${} and health paid - job training and child welfare charged",
            contribution_base, threshold
        ),
        (true, false) => "Health contribution waived - job training and child welfare exempt"
            .to_string(),
        (false, true) => format!(
            "Salary ${} < ${} - job training and child welfare exempt",
            contribution_base, threshold
        ),
        (true, true) => format!(
            "Health contribution waived and salary ${} < ${} - job training and child welfare exempt",
            contribution_base, threshold
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "payroll_tax".to_string(),
        rule_name: "Payroll Taxes".to_string(),
        legal_ref: PAYROLL_TAX_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "contribution_base": contribution_base.to_string(),
            "exemption_threshold": threshold.to_string(),
            "health_contribution_waived": health_contribution_waived
        }),
        output: serde_json::json!({
            "is_generally_exempt": is_generally_exempt,
            "exempt": exempt,
            "compensation_fund": compensation_fund.to_string(),
            "job_training": job_training.to_string(),
            "child_welfare": child_welfare.to_string(),
            "total": total.to_string()
        }),
        reasoning,
    };

    PayrollTaxResult {
        is_generally_exempt,
        compensation_fund,
        job_training,
        child_welfare,
        total,
        audit_step,
    }
}

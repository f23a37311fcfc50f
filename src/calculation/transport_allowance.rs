//! Transport allowance calculation functionality.
//!
//! The transport allowance (auxilio de transporte) is paid to employees
//! earning up to twice the minimum wage. Employers may opt out of paying it
//! below the threshold; above the threshold it is never paid.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::AuditStep;

/// The statute establishing the transport allowance.
pub const TRANSPORT_ALLOWANCE_LEGAL_REF: &str = "Ley 15 de 1959";

/// The result of the transport allowance rule, including the audit step.
#[derive(Debug, Clone)]
pub struct TransportAllowanceResult {
    /// Whether the salary is at or below the allowance threshold.
    pub eligible: bool,
    /// Whether the allowance is paid (eligible and requested).
    pub has_allowance: bool,
    /// The allowance amount, zero when not paid.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Determines the transport allowance for a base salary.
///
/// The threshold is inclusive: a salary exactly equal to
/// [`RateTable::transport_allowance_threshold`] still qualifies.
///
/// # Arguments
///
/// * `base_salary` - The monthly base salary
/// * `include_allowance` - Whether the employer pays the allowance when eligible
/// * `rates` - The rate table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::calculate_transport_allowance;
/// use labor_cost_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::colombia_2026();
///
/// let result = calculate_transport_allowance(Decimal::from(3_501_810), true, &rates, 1);
/// assert!(result.has_allowance);
/// assert_eq!(result.amount, Decimal::from(249_095));
///
/// let result = calculate_transport_allowance(Decimal::from(3_501_811), true, &rates, 1);
/// assert_eq!(result.amount, Decimal::ZERO);
/// ```
pub fn calculate_transport_allowance(
    base_salary: Decimal,
    include_allowance: bool,
    rates: &RateTable,
    step_number: u32,
) -> TransportAllowanceResult {
    let threshold = rates.transport_allowance_threshold();
    let eligible = base_salary <= threshold;
    let has_allowance = eligible && include_allowance;
    let amount = if has_allowance {
        rates.transport_allowance()
    } else {
        Decimal::ZERO
    };

    let reasoning = match (eligible, include_allowance) {
        (true, true) => format!(
            "Salary ${} <= threshold ${} - allowance ${} paid",
            base_salary, threshold, amount
        ),
        (true, false) => format!(
            "Salary ${} <= threshold ${} but allowance excluded by employer",
            base_salary, threshold
        ),
        (false, _) => format!(
            "Salary ${} > threshold ${} - no transport allowance",
            base_salary, threshold
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "transport_allowance".to_string(),
        rule_name: "Transport Allowance".to_string(),
        legal_ref: TRANSPORT_ALLOWANCE_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "threshold": threshold.to_string(),
            "include_allowance": include_allowance
        }),
        output: serde_json::json!({
            "eligible": eligible,
            "has_allowance": has_allowance,
            "amount": amount.to_string()
        }),
        reasoning,
    };

    TransportAllowanceResult {
        eligible,
        has_allowance,
        amount,
        audit_step,
    }
}

//! Total employer cost calculation.
//!
//! This module runs the individual rules in order and assembles the
//! [`CostBreakdown`]:
//!
//! 1. Transport allowance
//! 2. Social security (on the IBC)
//! 3. Social benefits (on salary + allowance, vacation on salary)
//! 4. Payroll taxes (with both exemption paths)
//! 5. Totals and overhead percentage

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CostBreakdown, CostCalculation, CostRequest,
};

use super::payroll_tax::calculate_payroll_tax;
use super::social_benefits::calculate_social_benefits;
use super::social_security::calculate_social_security;
use super::transport_allowance::calculate_transport_allowance;

/// Returns the largest base salary accepted (10^18).
///
/// Every derived amount, including the annual view, stays inside decimal
/// range below this bound.
pub fn max_base_salary() -> Decimal {
    Decimal::from(1_000_000_000_000_000_000u64)
}

/// Computes the itemized employer cost of a salary.
///
/// This is the boundary-stable entry point: the inputs and the returned
/// [`CostBreakdown`] are all a caller needs. Use [`calculate_cost`] to also
/// get the audit trace.
///
/// # Errors
///
/// - [`EngineError::InvalidSalary`] when `base_salary` is below 1 (callers
///   default missing input with [`super::resolve_base_salary`] first) or
///   above [`max_base_salary`]
/// - [`EngineError::InvalidRiskLevel`] when `risk_level` is not configured
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::compute_cost;
/// use labor_cost_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::colombia_2026();
/// let cost = compute_cost(Decimal::from(20_000_000), 1, true, true, &rates).unwrap();
///
/// assert_eq!(cost.transport_allowance_amount, Decimal::ZERO);
/// assert!(cost.job_training_amount > Decimal::ZERO);
/// assert!(cost.child_welfare_amount > Decimal::ZERO);
/// ```
pub fn compute_cost(
    base_salary: Decimal,
    risk_level: u8,
    include_health_contribution: bool,
    include_transport_allowance: bool,
    rates: &RateTable,
) -> EngineResult<CostBreakdown> {
    let request = CostRequest {
        base_salary,
        risk_level,
        include_health_contribution,
        include_transport_allowance,
    };
    calculate_cost(&request, rates).map(|calculation| calculation.breakdown)
}

/// Computes the employer cost of a request together with its audit trace.
///
/// # Errors
///
/// Same as [`compute_cost`].
pub fn calculate_cost(request: &CostRequest, rates: &RateTable) -> EngineResult<CostCalculation> {
    let start_time = Instant::now();
    let base_salary = request.base_salary;

    if base_salary < Decimal::ONE || base_salary > max_base_salary() {
        return Err(EngineError::InvalidSalary {
            value: base_salary.to_string(),
        });
    }

    let mut steps: Vec<AuditStep> = Vec::with_capacity(5);
    let mut warnings: Vec<AuditWarning> = Vec::new();

    if base_salary < rates.minimum_wage() {
        warnings.push(AuditWarning {
            code: "BELOW_MINIMUM_WAGE".to_string(),
            message: format!(
                "Base salary ${} is below the minimum wage ${}",
                base_salary,
                rates.minimum_wage()
            ),
            severity: "medium".to_string(),
        });
    }

    let allowance = calculate_transport_allowance(
        base_salary,
        request.include_transport_allowance,
        rates,
        1,
    );
    if request.include_transport_allowance && !allowance.eligible {
        warnings.push(AuditWarning {
            code: "TRANSPORT_ALLOWANCE_NOT_ELIGIBLE".to_string(),
            message: format!(
                "Transport allowance requested but salary exceeds ${}",
                rates.transport_allowance_threshold()
            ),
            severity: "low".to_string(),
        });
    }
    steps.push(allowance.audit_step);

    // The contribution base (IBC) is the salary itself.
    let contribution_base = base_salary;

    let social_security = calculate_social_security(
        contribution_base,
        request.risk_level,
        request.include_health_contribution,
        rates,
        2,
    )?;
    steps.push(social_security.audit_step);

    let benefits = calculate_social_benefits(base_salary, allowance.amount, rates, 3);
    steps.push(benefits.audit_step);

    let payroll_tax = calculate_payroll_tax(
        contribution_base,
        social_security.is_health_contribution_waived,
        rates,
        4,
    );
    steps.push(payroll_tax.audit_step);

    let total_employer_cost = base_salary
        + allowance.amount
        + social_security.total
        + benefits.total
        + payroll_tax.total;
    let overhead_percentage =
        (total_employer_cost / base_salary - Decimal::ONE) * Decimal::ONE_HUNDRED;

    steps.push(AuditStep {
        step_number: 5,
        rule_id: "employer_cost".to_string(),
        rule_name: "Total Employer Cost".to_string(),
        legal_ref: String::new(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "transport_allowance": allowance.amount.to_string(),
            "social_security": social_security.total.to_string(),
            "social_benefits": benefits.total.to_string(),
            "payroll_tax": payroll_tax.total.to_string()
        }),
        output: serde_json::json!({
            "total_employer_cost": total_employer_cost.to_string(),
            "overhead_percentage": overhead_percentage.to_string()
        }),
        reasoning: format!(
            "${} + ${} + ${} + ${} + ${} = ${}",
            base_salary,
            allowance.amount,
            social_security.total,
            benefits.total,
            payroll_tax.total,
            total_employer_cost
        ),
    });

    let breakdown = CostBreakdown {
        base_salary,
        risk_level: request.risk_level,
        has_transport_allowance: allowance.has_allowance,
        is_health_contribution_waived: social_security.is_health_contribution_waived,
        is_generally_exempt: payroll_tax.is_generally_exempt,
        transport_allowance_amount: allowance.amount,
        pension_amount: social_security.pension,
        health_amount: social_security.health,
        risk_insurance_amount: social_security.risk,
        service_bonus_amount: benefits.service_bonus,
        severance_amount: benefits.severance,
        severance_interest_amount: benefits.severance_interest,
        vacation_amount: benefits.vacation,
        compensation_fund_amount: payroll_tax.compensation_fund,
        job_training_amount: payroll_tax.job_training,
        child_welfare_amount: payroll_tax.child_welfare,
        total_social_security: social_security.total,
        total_social_benefits: benefits.total,
        total_payroll_tax: payroll_tax.total,
        total_employer_cost,
        overhead_percentage,
    };

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        base_salary = %base_salary,
        risk_level = request.risk_level,
        total_employer_cost = %total_employer_cost,
        warnings = warnings.len(),
        duration_us,
        "Employer cost calculated"
    );

    Ok(CostCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        breakdown,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

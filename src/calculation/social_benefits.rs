//! Social-benefit accruals (prestaciones sociales).
//!
//! Service bonus, severance and severance interest accrue on the salary plus
//! the transport allowance. Vacation accrues on the salary alone.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::AuditStep;

/// The statute governing the social benefits.
pub const SOCIAL_BENEFITS_LEGAL_REF: &str = "Código Sustantivo del Trabajo";

/// Returns the monthly severance interest rate: 1% / 12.
///
/// NOTE: the rate table also declares `social_benefits.severance_interest`
/// (0.12 for 2026), which this calculation does not read. Whoever owns the
/// yearly rate update should reconcile the two before relying on the
/// configured value.
pub fn severance_interest_rate() -> Decimal {
    Decimal::new(1, 2) / Decimal::from(12)
}

/// The result of the social-benefits rule, including the audit step.
#[derive(Debug, Clone)]
pub struct SocialBenefitsResult {
    /// Salary plus transport allowance.
    pub benefits_base: Decimal,
    /// Service bonus accrual.
    pub service_bonus: Decimal,
    /// Severance accrual.
    pub severance: Decimal,
    /// Severance interest accrual.
    pub severance_interest: Decimal,
    /// Vacation accrual.
    pub vacation: Decimal,
    /// `service_bonus + severance + severance_interest + vacation`.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the monthly social-benefit accruals.
///
/// # Arguments
///
/// * `base_salary` - The monthly base salary
/// * `transport_allowance` - The transport allowance actually paid
/// * `rates` - The rate table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::calculate_social_benefits;
/// use labor_cost_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::colombia_2026();
/// let result = calculate_social_benefits(
///     Decimal::from(1_750_905),
///     Decimal::from(249_095),
///     &rates,
///     3,
/// );
///
/// assert_eq!(result.benefits_base, Decimal::from(2_000_000));
/// assert_eq!(result.service_bonus, Decimal::from(166_600));
/// ```
pub fn calculate_social_benefits(
    base_salary: Decimal,
    transport_allowance: Decimal,
    rates: &RateTable,
    step_number: u32,
) -> SocialBenefitsResult {
    let sb = rates.social_benefits();
    let interest_rate = severance_interest_rate();

    let benefits_base = base_salary + transport_allowance;
    let service_bonus = benefits_base * sb.service_bonus;
    let severance = benefits_base * sb.severance;
    let severance_interest = benefits_base * interest_rate;
    let vacation = base_salary * sb.vacation;
    let total = service_bonus + severance + severance_interest + vacation;

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_benefits".to_string(),
        rule_name: "Social Benefits".to_string(),
        legal_ref: SOCIAL_BENEFITS_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "transport_allowance": transport_allowance.to_string(),
            "benefits_base": benefits_base.to_string()
        }),
        output: serde_json::json!({
            "service_bonus": service_bonus.to_string(),
            "severance": severance.to_string(),
            "severance_interest": severance_interest.to_string(),
            "vacation": vacation.to_string(),
            "total": total.to_string()
        }),
        reasoning: format!(
            "Bonus, severance and interest on ${} (salary + allowance); vacation on ${} (salary only)",
            benefits_base, base_salary
        ),
    };

    SocialBenefitsResult {
        benefits_base,
        service_bonus,
        severance,
        severance_interest,
        vacation,
        total,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_severance_interest_rate_is_one_percent_over_twelve() {
        assert_eq!(
            severance_interest_rate(),
            Decimal::new(1, 2) / Decimal::from(12)
        );
        assert!(
            severance_interest_rate()
                .to_string()
                .starts_with("0.000833333333")
        );
    }

    #[test]
    fn test_severance_interest_ignores_configured_rate() {
        let rates = RateTable::colombia_2026();
        let result = calculate_social_benefits(dec("1000000"), Decimal::ZERO, &rates, 1);

        assert_eq!(
            result.severance_interest,
            dec("1000000") * (Decimal::new(1, 2) / Decimal::from(12))
        );
        assert_ne!(
            result.severance_interest,
            dec("1000000") * rates.social_benefits().severance_interest
        );
    }

    #[test]
    fn test_benefits_at_minimum_wage_with_allowance() {
        let rates = RateTable::colombia_2026();
        let result = calculate_social_benefits(dec("1750905"), dec("249095"), &rates, 1);

        assert_eq!(result.benefits_base, dec("2000000"));
        assert_eq!(result.service_bonus, dec("166600"));
        assert_eq!(result.severance, dec("166600"));
        assert_eq!(result.vacation, dec("73012.7385"));
        assert_eq!(
            result.severance_interest.round_dp(2),
            dec("1666.67")
        );
    }

    #[test]
    fn test_vacation_excludes_allowance() {
        let rates = RateTable::colombia_2026();
        let with = calculate_social_benefits(dec("1750905"), dec("249095"), &rates, 1);
        let without = calculate_social_benefits(dec("1750905"), Decimal::ZERO, &rates, 1);

        assert_eq!(with.vacation, without.vacation);
        assert!(with.service_bonus > without.service_bonus);
        assert!(with.severance > without.severance);
        assert!(with.severance_interest > without.severance_interest);
    }

    #[test]
    fn test_total_is_sum_of_components() {
        let rates = RateTable::colombia_2026();
        let r = calculate_social_benefits(dec("3200000"), dec("249095"), &rates, 1);
        assert_eq!(
            r.total,
            r.service_bonus + r.severance + r.severance_interest + r.vacation
        );
    }

    #[test]
    fn test_audit_step_explains_bases() {
        let rates = RateTable::colombia_2026();
        let r = calculate_social_benefits(dec("1750905"), dec("249095"), &rates, 3);

        assert_eq!(r.audit_step.step_number, 3);
        assert_eq!(r.audit_step.input["benefits_base"], "2000000");
        assert!(r.audit_step.reasoning.contains("salary only"));
    }
}

//! Property-based tests for the employer cost calculation.
//!
//! These tests check the calculation invariants across the whole salary
//! range rather than at fixed scenarios.

use labor_cost_engine::calculation::compute_cost;
use labor_cost_engine::config::RateTable;
use labor_cost_engine::format::{format_currency, parse_formatted_amount};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Salaries from 1.00 to 1,000,000,000.00 with cent precision.
fn salary() -> impl Strategy<Value = Decimal> {
    (100i64..=100_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn risk_level() -> impl Strategy<Value = u8> {
    1u8..=5
}

// ============================================================================
// Transport Allowance
// ============================================================================

proptest! {
    /// Property: the allowance is paid exactly when requested and the salary
    /// is at most twice the minimum wage.
    #[test]
    fn prop_allowance_follows_threshold(
        base in salary(),
        level in risk_level(),
        health in any::<bool>(),
        include in any::<bool>(),
    ) {
        let rates = RateTable::colombia_2026();
        let cost = compute_cost(base, level, health, include, &rates).unwrap();

        if include && base <= rates.transport_allowance_threshold() {
            prop_assert_eq!(cost.transport_allowance_amount, rates.transport_allowance());
            prop_assert!(cost.has_transport_allowance);
        } else {
            prop_assert_eq!(cost.transport_allowance_amount, Decimal::ZERO);
            prop_assert!(!cost.has_transport_allowance);
        }
    }
}

// ============================================================================
// Totals
// ============================================================================

proptest! {
    /// Property: every aggregate is the exact sum of its components.
    #[test]
    fn prop_totals_are_exact_sums(
        base in salary(),
        level in risk_level(),
        health in any::<bool>(),
        include in any::<bool>(),
    ) {
        let rates = RateTable::colombia_2026();
        let c = compute_cost(base, level, health, include, &rates).unwrap();

        prop_assert_eq!(
            c.total_social_security,
            c.pension_amount + c.health_amount + c.risk_insurance_amount
        );
        prop_assert_eq!(
            c.total_social_benefits,
            c.service_bonus_amount
                + c.severance_amount
                + c.severance_interest_amount
                + c.vacation_amount
        );
        prop_assert_eq!(
            c.total_payroll_tax,
            c.compensation_fund_amount + c.job_training_amount + c.child_welfare_amount
        );
        prop_assert_eq!(
            c.total_employer_cost,
            c.base_salary
                + c.transport_allowance_amount
                + c.total_social_security
                + c.total_social_benefits
                + c.total_payroll_tax
        );
    }

    /// Property: overhead is the cost above salary relative to salary.
    #[test]
    fn prop_overhead_matches_formula(
        base in salary(),
        level in risk_level(),
        health in any::<bool>(),
    ) {
        let rates = RateTable::colombia_2026();
        let c = compute_cost(base, level, health, true, &rates).unwrap();

        prop_assert_eq!(
            c.overhead_percentage,
            (c.total_employer_cost / c.base_salary - Decimal::ONE) * Decimal::ONE_HUNDRED
        );
        prop_assert!(c.total_employer_cost > c.base_salary);
    }

    /// Property: the same inputs always give the same breakdown.
    #[test]
    fn prop_calculation_is_deterministic(base in salary(), level in risk_level()) {
        let rates = RateTable::colombia_2026();
        let a = compute_cost(base, level, true, true, &rates).unwrap();
        let b = compute_cost(base, level, true, true, &rates).unwrap();
        prop_assert_eq!(a, b);
    }
}

// ============================================================================
// Payroll Tax Exemption
// ============================================================================

proptest! {
    /// Property: a waived health contribution always exempts job training
    /// and child welfare.
    #[test]
    fn prop_waived_health_exempts_payroll_taxes(
        base in salary(),
        level in risk_level(),
        include in any::<bool>(),
    ) {
        let rates = RateTable::colombia_2026();
        let c = compute_cost(base, level, false, include, &rates).unwrap();

        prop_assert!(c.is_health_contribution_waived);
        prop_assert_eq!(c.health_amount, Decimal::ZERO);
        prop_assert_eq!(c.job_training_amount, Decimal::ZERO);
        prop_assert_eq!(c.child_welfare_amount, Decimal::ZERO);
    }

    /// Property: with health paid, job training and child welfare are charged
    /// exactly when the salary reaches ten minimum wages.
    #[test]
    fn prop_paid_health_charges_above_exemption(base in salary(), level in risk_level()) {
        let rates = RateTable::colombia_2026();
        let c = compute_cost(base, level, true, true, &rates).unwrap();

        if base >= rates.payroll_tax_exemption_threshold() {
            prop_assert!(!c.is_generally_exempt);
            prop_assert!(c.job_training_amount > Decimal::ZERO);
            prop_assert!(c.child_welfare_amount > Decimal::ZERO);
        } else {
            prop_assert!(c.is_generally_exempt);
            prop_assert_eq!(c.job_training_amount, Decimal::ZERO);
            prop_assert_eq!(c.child_welfare_amount, Decimal::ZERO);
        }
    }

    /// Property: the compensation fund is never exempt.
    #[test]
    fn prop_compensation_fund_always_charged(base in salary(), health in any::<bool>()) {
        let rates = RateTable::colombia_2026();
        let c = compute_cost(base, 1, health, true, &rates).unwrap();
        prop_assert_eq!(
            c.compensation_fund_amount,
            base * rates.payroll_taxes().compensation_fund
        );
    }
}

// ============================================================================
// Formatting
// ============================================================================

proptest! {
    /// Property: parsing a formatted whole amount recovers the amount,
    /// across the full decimal range.
    #[test]
    fn prop_parse_inverts_format(n in 0u128..(1u128 << 96)) {
        let amount = Decimal::from_i128_with_scale(n as i128, 0);
        prop_assert_eq!(parse_formatted_amount(&format_currency(amount)), amount);
    }

    /// Property: the inversion holds on both sides of the `u64` limit.
    #[test]
    fn prop_parse_inverts_format_near_u64_max(offset in 0u64..=1_000_000u64) {
        let limit = Decimal::from(u64::MAX);
        for amount in [limit - Decimal::from(offset), limit + Decimal::from(offset)] {
            prop_assert_eq!(parse_formatted_amount(&format_currency(amount)), amount);
        }
    }

    /// Property: a formatted amount has a separator every three digits.
    #[test]
    fn prop_format_groups_digits(n in 0u64..=1_000_000_000_000u64) {
        let formatted = format_currency(Decimal::from(n));
        let body = formatted.trim_start_matches('$');
        for (i, group) in body.split('.').enumerate() {
            if i == 0 {
                prop_assert!((1..=3).contains(&group.len()));
            } else {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}

//! Cost breakdown models for the Labor Cost Engine.
//!
//! This module contains the [`CostBreakdown`] produced by every calculation,
//! the [`CostCalculation`] envelope that adds identity and an audit trace,
//! and the grouped [`CostLine`] view used for itemized display.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, Period};
use crate::calculation::severance_interest_rate;
use crate::config::RateTable;
use crate::format::format_rate;

/// The fully itemized monthly employer cost of one salary.
///
/// A breakdown is a plain value: it is created once by
/// [`crate::calculation::compute_cost`] and never mutated. Every component is
/// kept at full decimal precision; rounding happens only when formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// The base salary the breakdown was computed for.
    pub base_salary: Decimal,
    /// The occupational-risk level used.
    pub risk_level: u8,
    /// Whether the transport allowance was paid.
    pub has_transport_allowance: bool,
    /// True when the employer health contribution is not paid.
    pub is_health_contribution_waived: bool,
    /// True when the salary is below the payroll-tax exemption threshold.
    pub is_generally_exempt: bool,

    /// Transport allowance (auxilio de transporte).
    pub transport_allowance_amount: Decimal,
    /// Employer pension contribution.
    pub pension_amount: Decimal,
    /// Employer health contribution.
    pub health_amount: Decimal,
    /// Occupational-risk insurance (ARL).
    pub risk_insurance_amount: Decimal,
    /// Service bonus accrual (prima de servicios).
    pub service_bonus_amount: Decimal,
    /// Severance accrual (cesantías).
    pub severance_amount: Decimal,
    /// Severance interest accrual (intereses sobre cesantías).
    pub severance_interest_amount: Decimal,
    /// Vacation accrual.
    pub vacation_amount: Decimal,
    /// Compensation fund contribution (caja de compensación).
    pub compensation_fund_amount: Decimal,
    /// Job training contribution (SENA).
    pub job_training_amount: Decimal,
    /// Child welfare contribution (ICBF).
    pub child_welfare_amount: Decimal,

    /// Pension + health + occupational risk.
    pub total_social_security: Decimal,
    /// Service bonus + severance + severance interest + vacation.
    pub total_social_benefits: Decimal,
    /// Compensation fund + job training + child welfare.
    pub total_payroll_tax: Decimal,
    /// Salary, allowance and every contribution.
    pub total_employer_cost: Decimal,
    /// Cost above the base salary, as a percentage of the base salary.
    pub overhead_percentage: Decimal,
}

impl CostBreakdown {
    /// Returns the breakdown scaled to a reporting period.
    ///
    /// Every monetary amount is multiplied by the period's month count;
    /// flags, the risk level and `overhead_percentage` are unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use labor_cost_engine::calculation::compute_cost;
    /// use labor_cost_engine::config::RateTable;
    /// use labor_cost_engine::models::Period;
    /// use rust_decimal::Decimal;
    ///
    /// let rates = RateTable::colombia_2026();
    /// let monthly = compute_cost(Decimal::from(3_000_000), 1, true, true, &rates).unwrap();
    /// let annual = monthly.for_period(Period::Annual);
    ///
    /// assert_eq!(annual.base_salary, Decimal::from(36_000_000));
    /// assert_eq!(annual.overhead_percentage, monthly.overhead_percentage);
    /// ```
    pub fn for_period(&self, period: Period) -> CostBreakdown {
        let m = period.multiplier();
        CostBreakdown {
            base_salary: self.base_salary * m,
            transport_allowance_amount: self.transport_allowance_amount * m,
            pension_amount: self.pension_amount * m,
            health_amount: self.health_amount * m,
            risk_insurance_amount: self.risk_insurance_amount * m,
            service_bonus_amount: self.service_bonus_amount * m,
            severance_amount: self.severance_amount * m,
            severance_interest_amount: self.severance_interest_amount * m,
            vacation_amount: self.vacation_amount * m,
            compensation_fund_amount: self.compensation_fund_amount * m,
            job_training_amount: self.job_training_amount * m,
            child_welfare_amount: self.child_welfare_amount * m,
            total_social_security: self.total_social_security * m,
            total_social_benefits: self.total_social_benefits * m,
            total_payroll_tax: self.total_payroll_tax * m,
            total_employer_cost: self.total_employer_cost * m,
            ..self.clone()
        }
    }

    /// Returns `amount` as a percentage of the total employer cost.
    ///
    /// Returns zero when the total is zero.
    pub fn share_of_total(&self, amount: Decimal) -> Decimal {
        if self.total_employer_cost.is_zero() {
            return Decimal::ZERO;
        }
        amount / self.total_employer_cost * Decimal::ONE_HUNDRED
    }

    /// Returns true when job training and child welfare were not charged.
    pub fn is_payroll_tax_exempt(&self) -> bool {
        self.is_health_contribution_waived || self.is_generally_exempt
    }

    /// Groups the components into the four display sections.
    ///
    /// Rates are read from `rates`, which should be the table the breakdown
    /// was computed with. Group totals equal the breakdown's aggregates.
    pub fn groups(&self, rates: &RateTable) -> Vec<CostGroup> {
        let ss = rates.social_security();
        let sb = rates.social_benefits();
        let pt = rates.payroll_taxes();
        let tax_exempt = self.is_payroll_tax_exempt();

        vec![
            CostGroup {
                category: CostCategory::SalaryAndAllowance,
                total: self.base_salary + self.transport_allowance_amount,
                lines: vec![
                    CostLine::new("Base salary", None, self.base_salary),
                    CostLine::new("Transport allowance", None, self.transport_allowance_amount)
                        .exempt_if(!self.has_transport_allowance),
                ],
            },
            CostGroup {
                category: CostCategory::SocialSecurity,
                total: self.total_social_security,
                lines: vec![
                    CostLine::new("Pension", Some(ss.pension), self.pension_amount),
                    CostLine::new("Health", Some(ss.health), self.health_amount)
                        .exempt_if(self.is_health_contribution_waived),
                    CostLine::new(
                        "Occupational risk",
                        rates.risk_rate(self.risk_level).ok(),
                        self.risk_insurance_amount,
                    ),
                ],
            },
            CostGroup {
                category: CostCategory::SocialBenefits,
                total: self.total_social_benefits,
                lines: vec![
                    CostLine::new(
                        "Service bonus",
                        Some(sb.service_bonus),
                        self.service_bonus_amount,
                    ),
                    CostLine::new("Severance", Some(sb.severance), self.severance_amount),
                    CostLine::new(
                        "Severance interest",
                        Some(severance_interest_rate()),
                        self.severance_interest_amount,
                    ),
                    CostLine::new("Vacation", Some(sb.vacation), self.vacation_amount),
                ],
            },
            CostGroup {
                category: CostCategory::PayrollTax,
                total: self.total_payroll_tax,
                lines: vec![
                    CostLine::new(
                        "Compensation fund",
                        Some(pt.compensation_fund),
                        self.compensation_fund_amount,
                    ),
                    CostLine::new("Job training", Some(pt.job_training), self.job_training_amount)
                        .exempt_if(tax_exempt),
                    CostLine::new(
                        "Child welfare",
                        Some(pt.child_welfare),
                        self.child_welfare_amount,
                    )
                    .exempt_if(tax_exempt),
                ],
            },
        ]
    }
}

/// The display section a cost line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    /// Base salary and transport allowance.
    SalaryAndAllowance,
    /// Pension, health and occupational risk.
    SocialSecurity,
    /// Statutory benefit accruals.
    SocialBenefits,
    /// Compensation fund, job training and child welfare.
    PayrollTax,
}

/// One itemized line of a cost group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLine {
    /// Display name of the component.
    pub name: String,
    /// The fractional rate applied, if the component is rate-based.
    pub rate: Option<Decimal>,
    /// `rate` as a display percentage, e.g. `"8.50%"`.
    pub formatted_rate: Option<String>,
    /// The component amount.
    pub amount: Decimal,
    /// True when the component was not charged, either because of an
    /// exemption or because it does not apply (an allowance above its
    /// threshold or opted out).
    pub exempt: bool,
}

impl CostLine {
    fn new(name: &str, rate: Option<Decimal>, amount: Decimal) -> Self {
        Self {
            name: name.to_string(),
            rate,
            formatted_rate: rate.map(format_rate),
            amount,
            exempt: false,
        }
    }

    fn exempt_if(mut self, exempt: bool) -> Self {
        self.exempt = exempt;
        self
    }
}

/// A display section with its lines and subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostGroup {
    /// The section.
    pub category: CostCategory,
    /// Sum of the section's lines.
    pub total: Decimal,
    /// The itemized lines.
    pub lines: Vec<CostLine>,
}

/// The complete result of one cost calculation.
///
/// Wraps the [`CostBreakdown`] with an identifier, a timestamp and the audit
/// trace of every rule decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The monthly cost breakdown.
    pub breakdown: CostBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_cost;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn breakdown(salary: &str, include_health: bool) -> CostBreakdown {
        compute_cost(dec(salary), 2, include_health, true, &RateTable::colombia_2026()).unwrap()
    }

    #[test]
    fn test_for_period_monthly_is_identity() {
        let b = breakdown("2500000", true);
        assert_eq!(b.for_period(Period::Monthly), b);
    }

    #[test]
    fn test_for_period_annual_scales_every_amount() {
        let b = breakdown("2500000", true);
        let annual = b.for_period(Period::Annual);
        let twelve = Decimal::from(12);

        assert_eq!(annual.base_salary, b.base_salary * twelve);
        assert_eq!(annual.transport_allowance_amount, b.transport_allowance_amount * twelve);
        assert_eq!(annual.vacation_amount, b.vacation_amount * twelve);
        assert_eq!(annual.total_payroll_tax, b.total_payroll_tax * twelve);
        assert_eq!(annual.total_employer_cost, b.total_employer_cost * twelve);
        assert_eq!(annual.risk_level, b.risk_level);
        assert_eq!(annual.has_transport_allowance, b.has_transport_allowance);
        assert_eq!(annual.overhead_percentage, b.overhead_percentage);
    }

    #[test]
    fn test_groups_totals_match_aggregates() {
        let b = breakdown("20000000", true);
        let groups = b.groups(&RateTable::colombia_2026());

        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].category, CostCategory::SalaryAndAllowance);
        assert_eq!(groups[1].total, b.total_social_security);
        assert_eq!(groups[2].total, b.total_social_benefits);
        assert_eq!(groups[3].total, b.total_payroll_tax);

        let grand: Decimal = groups.iter().map(|g| g.total).sum();
        assert_eq!(grand, b.total_employer_cost);
    }

    #[test]
    fn test_group_lines_sum_to_group_total() {
        let b = breakdown("4000000", true);
        for group in b.groups(&RateTable::colombia_2026()) {
            let sum: Decimal = group.lines.iter().map(|l| l.amount).sum();
            assert_eq!(sum, group.total, "category {:?}", group.category);
        }
    }

    #[test]
    fn test_groups_mark_waived_health_and_taxes_exempt() {
        let b = breakdown("20000000", false);
        let groups = b.groups(&RateTable::colombia_2026());

        let health = &groups[1].lines[1];
        assert_eq!(health.name, "Health");
        assert!(health.exempt);
        assert_eq!(health.amount, Decimal::ZERO);

        assert!(!groups[3].lines[0].exempt);
        assert!(groups[3].lines[1].exempt);
        assert!(groups[3].lines[2].exempt);
    }

    #[test]
    fn test_groups_show_risk_rate_for_level() {
        let b = breakdown("3000000", true);
        let groups = b.groups(&RateTable::colombia_2026());
        assert_eq!(groups[1].lines[2].rate, Some(dec("0.01044")));
    }

    #[test]
    fn test_groups_mark_allowance_not_applicable() {
        let rates = RateTable::colombia_2026();

        let above = breakdown("5000000", true);
        let line = &above.groups(&rates)[0].lines[1];
        assert_eq!(line.name, "Transport allowance");
        assert!(line.exempt);
        assert_eq!(line.amount, Decimal::ZERO);

        let opted_out = compute_cost(dec("1750905"), 1, true, false, &rates).unwrap();
        assert!(opted_out.groups(&rates)[0].lines[1].exempt);

        let paid = breakdown("1750905", true);
        assert!(!paid.groups(&rates)[0].lines[1].exempt);
    }

    #[test]
    fn test_group_lines_carry_formatted_rates() {
        let b = breakdown("3000000", true);
        let groups = b.groups(&RateTable::colombia_2026());

        assert_eq!(groups[0].lines[0].formatted_rate, None);
        assert_eq!(groups[1].lines[0].formatted_rate.as_deref(), Some("12.00%"));
        assert_eq!(groups[1].lines[1].formatted_rate.as_deref(), Some("8.50%"));
        assert_eq!(groups[1].lines[2].formatted_rate.as_deref(), Some("1.04%"));
        assert_eq!(groups[2].lines[2].formatted_rate.as_deref(), Some("0.08%"));
        assert_eq!(groups[3].lines[2].formatted_rate.as_deref(), Some("3.00%"));
    }

    #[test]
    fn test_share_of_total() {
        let b = breakdown("20000000", true);
        let share = b.share_of_total(b.total_employer_cost);
        assert_eq!(share, Decimal::ONE_HUNDRED);

        let salary_share = b.share_of_total(b.base_salary);
        assert!(salary_share > dec("60") && salary_share < dec("70"));
    }

    #[test]
    fn test_cost_category_serialization() {
        let json = serde_json::to_string(&CostCategory::SalaryAndAllowance).unwrap();
        assert_eq!(json, "\"salary_and_allowance\"");
    }

    #[test]
    fn test_breakdown_serializes_amounts_as_strings() {
        let b = breakdown("20000000", true);
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["base_salary"], "20000000");
        assert_eq!(json["transport_allowance_amount"], "0");
        assert_eq!(json["is_health_contribution_waived"], false);
    }
}

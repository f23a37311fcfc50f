//! Calculation logic for the Labor Cost Engine.
//!
//! This module contains the rules that make up the employer cost of a
//! salary: transport allowance, social-security contributions, social-benefit
//! accruals and payroll taxes, plus the function that combines them into a
//! [`crate::models::CostBreakdown`]. Caller-side salary resolution lives here
//! as well.

mod base_salary;
mod employer_cost;
mod payroll_tax;
mod social_benefits;
mod social_security;
mod transport_allowance;

pub use base_salary::{ResolvedSalary, resolve_base_salary, salary_from_input};
pub use employer_cost::{calculate_cost, compute_cost, max_base_salary};
pub use payroll_tax::{PAYROLL_TAX_LEGAL_REF, PayrollTaxResult, calculate_payroll_tax};
pub use social_benefits::{
    SOCIAL_BENEFITS_LEGAL_REF, SocialBenefitsResult, calculate_social_benefits,
    severance_interest_rate,
};
pub use social_security::{
    SOCIAL_SECURITY_LEGAL_REF, SocialSecurityResult, calculate_social_security,
};
pub use transport_allowance::{
    TRANSPORT_ALLOWANCE_LEGAL_REF, TransportAllowanceResult, calculate_transport_allowance,
};

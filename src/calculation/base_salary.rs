//! Caller-side base salary resolution.
//!
//! [`crate::calculation::compute_cost`] rejects salaries below one unit.
//! Callers collecting free-form input resolve it here first: missing, zero
//! or unparsable input falls back to the minimum wage.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::format::parse_formatted_amount;

/// The outcome of resolving a caller-supplied salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSalary {
    /// The salary to calculate with.
    pub salary: Decimal,
    /// True when the input was replaced by the minimum wage.
    pub defaulted: bool,
}

/// Resolves an optional salary, defaulting to the minimum wage.
///
/// `None` and any value below one currency unit become
/// [`RateTable::minimum_wage`]. Other values pass through unchanged, even
/// when below the minimum wage.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::resolve_base_salary;
/// use labor_cost_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::colombia_2026();
///
/// let resolved = resolve_base_salary(Some(Decimal::ZERO), &rates);
/// assert!(resolved.defaulted);
/// assert_eq!(resolved.salary, rates.minimum_wage());
///
/// let resolved = resolve_base_salary(Some(Decimal::from(5_000_000)), &rates);
/// assert!(!resolved.defaulted);
/// ```
pub fn resolve_base_salary(input: Option<Decimal>, rates: &RateTable) -> ResolvedSalary {
    match input {
        Some(salary) if salary >= Decimal::ONE => ResolvedSalary {
            salary,
            defaulted: false,
        },
        _ => ResolvedSalary {
            salary: rates.minimum_wage(),
            defaulted: true,
        },
    }
}

/// Parses a formatted salary (e.g., `"$2.500.000"`) and resolves it.
///
/// Text without digits resolves to the minimum wage.
pub fn salary_from_input(text: &str, rates: &RateTable) -> ResolvedSalary {
    resolve_base_salary(Some(parse_formatted_amount(text)), rates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_none_defaults_to_minimum_wage() {
        let rates = RateTable::colombia_2026();
        let resolved = resolve_base_salary(None, &rates);
        assert_eq!(resolved.salary, dec("1750905"));
        assert!(resolved.defaulted);
    }

    #[test]
    fn test_fraction_below_one_defaults() {
        let rates = RateTable::colombia_2026();
        assert!(resolve_base_salary(Some(dec("0.5")), &rates).defaulted);
        assert!(resolve_base_salary(Some(dec("-10")), &rates).defaulted);
    }

    #[test]
    fn test_one_is_accepted() {
        let rates = RateTable::colombia_2026();
        let resolved = resolve_base_salary(Some(Decimal::ONE), &rates);
        assert_eq!(resolved.salary, Decimal::ONE);
        assert!(!resolved.defaulted);
    }

    #[test]
    fn test_salary_from_formatted_input() {
        let rates = RateTable::colombia_2026();
        let resolved = salary_from_input("$2.500.000", &rates);
        assert_eq!(resolved.salary, dec("2500000"));
        assert!(!resolved.defaulted);
    }

    #[test]
    fn test_salary_from_non_numeric_input_defaults() {
        let rates = RateTable::colombia_2026();
        for text in ["", "abc", "$", "0", "$0"] {
            let resolved = salary_from_input(text, &rates);
            assert!(resolved.defaulted, "input {:?}", text);
            assert_eq!(resolved.salary, rates.minimum_wage());
        }
    }
}

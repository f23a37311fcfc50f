//! Presentation formatting for cost amounts.
//!
//! Amounts are rendered in Colombian peso style: rounded to whole pesos,
//! `.` as the thousands separator and a `$` prefix. Rounding is always half
//! away from zero.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

const THOUSANDS_SEPARATOR: char = '.';

/// Formats an amount as whole currency units with thousands separators.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::format::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from(1_750_905)), "$1.750.905");
/// assert_eq!(format_currency(Decimal::from_str("2.5").unwrap()), "$3");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = rounded.abs().trunc().normalize().to_string();

    format!("{}${}", sign, group_thousands(&digits))
}

/// Formats a percentage value with exactly two decimals.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::format::format_percentage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_percentage(Decimal::from_str("62.54399").unwrap()), "62.54%");
/// assert_eq!(format_percentage(Decimal::from(8)), "8.00%");
/// ```
pub fn format_percentage(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", rounded)
}

/// Formats a fractional rate (e.g., `0.085`) as a percentage (`8.50%`).
pub fn format_rate(rate: Decimal) -> String {
    format_percentage(rate * Decimal::ONE_HUNDRED)
}

/// Parses a formatted amount by keeping only its digits.
///
/// Every non-digit character is discarded, so `"$1.750.905"` parses as
/// `1750905`. Input without digits, or whose digits exceed the decimal range
/// (about 7.9e28), yields zero.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::format::parse_formatted_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_formatted_amount("$1.750.905"), Decimal::from(1_750_905));
/// assert_eq!(parse_formatted_amount("n/a"), Decimal::ZERO);
/// ```
pub fn parse_formatted_amount(text: &str) -> Decimal {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(significant).unwrap_or(Decimal::ZERO)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(c);
    }
    out
}

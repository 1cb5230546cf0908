//! Amount and balance formatting
//!
//! Amounts are shown with exactly two decimals, rounded half away from zero.
//! Digit grouping follows the selected [`NumberLocale`]; the Indian
//! convention groups the last three digits and then pairs (`12,34,567.50`).

use crate::types::BalanceType;
use rust_decimal::{Decimal, RoundingStrategy};

/// Digit grouping convention
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberLocale {
    /// Lakh/crore grouping: 12,34,567.00
    #[default]
    EnIn,
    /// Thousands grouping: 1,234,567.00
    EnUs,
    /// No grouping: 1234567.00
    Plain,
}

/// Format an amount with two decimals and locale grouping
///
/// # Examples
///
/// ```
/// use ledger_statement_engine::render::amount::{format_amount, NumberLocale};
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::new(123456750, 2);
/// assert_eq!(format_amount(amount, NumberLocale::EnIn), "12,34,567.50");
/// assert_eq!(format_amount(amount, NumberLocale::EnUs), "1,234,567.50");
/// assert_eq!(format_amount(amount, NumberLocale::Plain), "1234567.50");
/// ```
pub fn format_amount(amount: Decimal, locale: NumberLocale) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let grouped = match locale {
        NumberLocale::EnIn => group_indian(integer),
        NumberLocale::EnUs => group_by(integer, 3),
        NumberLocale::Plain => integer.to_string(),
    };

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

/// Format a signed balance as its magnitude plus Dr/Cr tag
///
/// ```
/// use ledger_statement_engine::render::amount::{format_balance, NumberLocale};
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_balance(Decimal::new(-5000, 0), NumberLocale::EnIn), "5,000.00 Cr");
/// assert_eq!(format_balance(Decimal::ZERO, NumberLocale::EnIn), "0.00 Dr");
/// ```
pub fn format_balance(signed: Decimal, locale: NumberLocale) -> String {
    format!(
        "{} {}",
        format_amount(signed.abs(), locale),
        BalanceType::of(signed)
    )
}

fn group_by(integer: &str, size: usize) -> String {
    let mut groups: Vec<&str> = Vec::new();
    let mut end = integer.len();

    while end > size {
        groups.push(&integer[end - size..end]);
        end -= size;
    }
    groups.push(&integer[..end]);

    groups.reverse();
    groups.join(",")
}

fn group_indian(integer: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }

    let (head, tail) = integer.split_at(integer.len() - 3);
    format!("{},{}", group_by(head, 2), tail)
}

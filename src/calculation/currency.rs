//! Indian-rupee currency formatting.
//!
//! Standard library and most locale crates group digits western-style
//! (thousands), so the Indian grouping rule is implemented here as an
//! explicit string algorithm: the rightmost group takes 3 digits, every
//! group after that takes 2.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as an Indian-rupee string, e.g. `₹12,34,567`.
///
/// The amount is rounded to the nearest integer first (midpoint away from
/// zero), then grouped. Zero, negative, and fractional amounts all format
/// without failing; a negative sign sits between the glyph and the digits.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::format_inr;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_inr(Decimal::from(1_234_567)), "₹12,34,567");
/// assert_eq!(format_inr(Decimal::new(15_006, 1)), "₹1,501");
/// assert_eq!(format_inr(Decimal::ZERO), "₹0");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().normalize().to_string();
    let grouped = group_indian(&digits);

    if rounded < Decimal::ZERO {
        format!("₹-{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Groups a plain digit string per the Indian convention.
///
/// The last 3 digits form the rightmost group; the remaining digits are
/// grouped in pairs from the right: "1234567" becomes "12,34,567".
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}

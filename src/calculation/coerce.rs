//! Permissive numeric coercion for salary input.
//!
//! The source system never rejects bad salary input; anything that is not a
//! usable non-negative number silently becomes zero. This module makes that
//! policy an explicit, named, tested function instead of an implicit
//! type-coercion side effect.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerces an arbitrary JSON value to a non-negative salary amount.
///
/// JSON numbers and parseable numeric strings yield their decimal value when
/// non-negative. Everything else - null, booleans, arrays, objects,
/// unparseable strings, and negative amounts - yields zero. This function
/// never fails; leniency here is a deliberate compatibility policy, not an
/// oversight.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::salary_or_zero;
/// use rust_decimal::Decimal;
/// use serde_json::json;
///
/// assert_eq!(salary_or_zero(&json!(50000)), Decimal::from(50_000));
/// assert_eq!(salary_or_zero(&json!("1500.60")), Decimal::new(150_060, 2));
/// assert_eq!(salary_or_zero(&json!("abc")), Decimal::ZERO);
/// assert_eq!(salary_or_zero(&json!(null)), Decimal::ZERO);
/// assert_eq!(salary_or_zero(&json!(-100)), Decimal::ZERO);
/// ```
pub fn salary_or_zero(value: &Value) -> Decimal {
    let parsed = match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    };

    match parsed {
        Some(amount) if amount >= Decimal::ZERO => amount,
        _ => Decimal::ZERO,
    }
}

/// Parses a decimal from plain or scientific notation.
fn parse_decimal(input: &str) -> Option<Decimal> {
    Decimal::from_str(input)
        .ok()
        .or_else(|| Decimal::from_scientific(input).ok())
}

/// Serde deserializer applying [`salary_or_zero`] to whatever the input
/// document contains.
///
/// Used on the `basicSalary` field of employee records and API requests so
/// that malformed stored data or request bodies degrade to a zero salary
/// instead of failing the whole read.
pub fn lenient_salary<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(salary_or_zero(&value))
}

//! Statutory salary component derivation.
//!
//! This module derives the HRA, DA, and PF components and the resulting net
//! pay from a basic salary. No rounding happens here; rounding is deferred
//! to the currency formatter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Returns the house rent allowance rate (40% of basic).
pub fn hra_rate() -> Decimal {
    Decimal::new(40, 2)
}

/// Returns the dearness allowance rate (10% of basic).
pub fn da_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Returns the provident fund deduction rate (12% of basic).
pub fn pf_rate() -> Decimal {
    Decimal::new(12, 2)
}

/// The salary components derived from a basic salary.
///
/// A value object recomputed on every read and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponents {
    /// House rent allowance: basic x 0.40.
    pub hra: Decimal,
    /// Dearness allowance: basic x 0.10.
    pub da: Decimal,
    /// Provident fund deduction: basic x 0.12.
    pub pf: Decimal,
    /// Net pay: basic + HRA + DA - PF.
    pub net: Decimal,
}

/// Derives the statutory salary components from a basic salary.
///
/// Pure and deterministic: `net` is always `basic * 1.38` and no field other
/// than the basic salary affects the result. Callers feeding untrusted input
/// coerce it first via [`salary_or_zero`](crate::calculation::salary_or_zero).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_components;
/// use rust_decimal::Decimal;
///
/// let components = compute_components(Decimal::from(50_000));
/// assert_eq!(components.hra, Decimal::from(20_000));
/// assert_eq!(components.da, Decimal::from(5_000));
/// assert_eq!(components.pf, Decimal::from(6_000));
/// assert_eq!(components.net, Decimal::from(69_000));
/// ```
pub fn compute_components(basic: Decimal) -> SalaryComponents {
    let hra = basic * hra_rate();
    let da = basic * da_rate();
    let pf = basic * pf_rate();
    let net = basic + hra + da - pf;

    SalaryComponents { hra, da, pf, net }
}

//! Fleet-wide payroll statistics.
//!
//! Aggregates a collection of employee records into the headline numbers
//! shown on the dashboard. Single pass, order-independent, no mutation of
//! the input.

use rust_decimal::Decimal;

use crate::models::{Employee, PayrollStats};

use super::components::compute_components;
use super::currency::format_inr;

/// Computes headcount, total net payroll, and highest basic salary.
///
/// `total_payroll` sums the derived net pay of every record; `highest_salary`
/// takes the maximum over the raw basic salary, NOT net pay (preserved source
/// behavior). The empty collection is an explicit edge case, not an error:
/// it yields a zero headcount and formatted zeros.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_stats;
///
/// let stats = compute_stats(&[]);
/// assert_eq!(stats.total_employees, 0);
/// assert_eq!(stats.total_payroll, "₹0");
/// assert_eq!(stats.highest_salary, "₹0");
/// ```
pub fn compute_stats(employees: &[Employee]) -> PayrollStats {
    let total_payroll: Decimal = employees
        .iter()
        .map(|e| compute_components(e.basic_salary).net)
        .sum();

    let highest = employees
        .iter()
        .map(|e| e.basic_salary)
        .max()
        .unwrap_or(Decimal::ZERO);

    PayrollStats {
        total_employees: employees.len(),
        total_payroll: format_inr(total_payroll),
        highest_salary: format_inr(highest),
    }
}

//! Per-employee enrichment.
//!
//! This module attaches formatted salary strings to an employee record for
//! dashboard rendering. The original record fields pass through unchanged.

use crate::models::{Employee, EnrichedEmployee};

use super::currency::format_inr;
use super::components::compute_components;

/// Enriches an employee record with formatted salary components.
///
/// Computes the components from the record's basic salary and formats the
/// raw basic plus each derived amount. Nothing is validated here; a record
/// whose salary already coerced to zero simply enriches to formatted zeros.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::enrich_employee;
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 1,
///     name: "Asha Verma".to_string(),
///     department: "Engineering".to_string(),
///     basic_salary: Decimal::from(50_000),
/// };
///
/// let enriched = enrich_employee(&employee);
/// assert_eq!(enriched.basic_fmt, "₹50,000");
/// assert_eq!(enriched.net_fmt, "₹69,000");
/// ```
pub fn enrich_employee(employee: &Employee) -> EnrichedEmployee {
    let components = compute_components(employee.basic_salary);

    EnrichedEmployee {
        id: employee.id,
        name: employee.name.clone(),
        department: employee.department.clone(),
        basic_salary: employee.basic_salary,
        basic_fmt: format_inr(employee.basic_salary),
        hra_fmt: format_inr(components.hra),
        da_fmt: format_inr(components.da),
        pf_fmt: format_inr(components.pf),
        net_fmt: format_inr(components.net),
    }
}

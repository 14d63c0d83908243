//! Dashboard view models.
//!
//! These types are produced fresh on every read by the calculation core and
//! discarded after the response is rendered; they are never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee record enriched with formatted salary components.
///
/// Carries every original field unchanged plus a formatted rupee string for
/// the basic salary and each derived component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedEmployee {
    /// Unique identifier of the underlying record.
    pub id: u64,
    /// Display name of the underlying record.
    pub name: String,
    /// Department label of the underlying record.
    pub department: String,
    /// Raw basic salary of the underlying record.
    pub basic_salary: Decimal,
    /// Formatted basic salary, e.g. "₹50,000".
    pub basic_fmt: String,
    /// Formatted house rent allowance (40% of basic).
    pub hra_fmt: String,
    /// Formatted dearness allowance (10% of basic).
    pub da_fmt: String,
    /// Formatted provident fund deduction (12% of basic).
    pub pf_fmt: String,
    /// Formatted net pay (basic + HRA + DA - PF).
    pub net_fmt: String,
}

/// Fleet-wide payroll statistics for the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollStats {
    /// Number of employees in the store.
    pub total_employees: usize,
    /// Formatted sum of net pay across all employees.
    pub total_payroll: String,
    /// Formatted maximum basic salary, "₹0" when the store is empty.
    pub highest_salary: String,
}

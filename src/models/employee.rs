//! Employee record model.
//!
//! This module defines the Employee struct persisted in the flat-file store.
//! Field names serialize in camelCase to match the on-disk `employee.json`
//! format.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::lenient_salary;

/// A persisted employee record.
///
/// `basic_salary` deserializes permissively: a JSON number, a numeric string,
/// a missing field, or garbage all produce a value (garbage and negatives
/// coerce to zero). This preserves the lenient input policy of the source
/// system rather than rejecting malformed records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier, assigned by the store's allocation helper.
    pub id: u64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Department label.
    #[serde(default)]
    pub department: String,
    /// Monthly basic salary, the sole input to all salary derivations.
    #[serde(default, deserialize_with = "lenient_salary")]
    pub basic_salary: Decimal,
}

impl Employee {
    /// Returns true if the employee matches a dashboard search query.
    ///
    /// The match is case-insensitive and checks the id, name, and
    /// department for a substring hit.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: 12,
    ///     name: "Asha Verma".to_string(),
    ///     department: "Engineering".to_string(),
    ///     basic_salary: Decimal::from(50_000),
    /// };
    /// assert!(employee.matches_query("asha"));
    /// assert!(employee.matches_query("ENGIN"));
    /// assert!(employee.matches_query("12"));
    /// assert!(!employee.matches_query("finance"));
    /// ```
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.id.to_string().contains(&q)
            || self.name.to_lowercase().contains(&q)
            || self.department.to_lowercase().contains(&q)
    }
}

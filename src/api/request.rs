//! Request types for the payroll API and dashboard forms.
//!
//! The JSON API accepts salaries leniently (anything unusable coerces to
//! zero, matching the source system); the HTML forms validate strictly and
//! re-render with an error instead.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::lenient_salary;
use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

/// JSON body for `POST /employees` and `PUT /employees/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    /// Display name.
    pub name: String,
    /// Department label.
    pub department: String,
    /// Basic salary; missing or unusable input coerces to zero.
    #[serde(default, deserialize_with = "lenient_salary")]
    pub basic_salary: Decimal,
}

/// Urlencoded body of the add and edit dashboard forms.
///
/// Fields arrive as raw strings; [`EmployeeForm::validate`] turns them into
/// typed values or a validation error for re-rendering the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeForm {
    /// Submitted name field.
    #[serde(default)]
    pub name: String,
    /// Submitted department field.
    #[serde(default)]
    pub department: String,
    /// Submitted salary field, still unparsed.
    #[serde(default, rename = "basicSalary")]
    pub basic_salary: String,
}

/// A form submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEmployee {
    /// Trimmed name.
    pub name: String,
    /// Trimmed department.
    pub department: String,
    /// Parsed non-negative salary.
    pub basic_salary: Decimal,
}

impl EmployeeForm {
    /// Validates the submission: all fields required, the salary a valid
    /// non-negative number.
    pub fn validate(&self) -> PayrollResult<ValidatedEmployee> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PayrollError::InvalidEmployee {
                field: "name".to_string(),
                message: "is required".to_string(),
            });
        }

        let department = self.department.trim();
        if department.is_empty() {
            return Err(PayrollError::InvalidEmployee {
                field: "department".to_string(),
                message: "is required".to_string(),
            });
        }

        let salary = self.basic_salary.trim();
        let basic_salary = match Decimal::from_str(salary) {
            Ok(amount) if amount >= Decimal::ZERO => amount,
            _ => {
                return Err(PayrollError::InvalidEmployee {
                    field: "basicSalary".to_string(),
                    message: "must be a valid non-negative number".to_string(),
                });
            }
        };

        Ok(ValidatedEmployee {
            name: name.to_string(),
            department: department.to_string(),
            basic_salary,
        })
    }

    /// Builds a form pre-filled from an existing record, for the edit page.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            department: employee.department.clone(),
            basic_salary: employee.basic_salary.normalize().to_string(),
        }
    }
}

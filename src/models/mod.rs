//! Core data models for the payroll engine.
//!
//! This module contains the persisted employee record and the ephemeral
//! view models derived from it.

mod dashboard;
mod employee;

pub use dashboard::{EnrichedEmployee, PayrollStats};
pub use employee::Employee;

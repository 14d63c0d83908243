//! Calculation logic for the payroll engine.
//!
//! This module contains all the pure salary computation functions: the
//! permissive numeric coercion policy, statutory component derivation
//! (HRA, DA, PF, net pay), Indian-rupee currency formatting, per-employee
//! enrichment, and fleet-wide statistics aggregation.
//!
//! Every function here is a side-effect-free transformation over plain data:
//! no I/O, no shared state, no ordering dependencies. They may be invoked
//! concurrently from any number of callers without coordination.

mod coerce;
mod components;
mod currency;
mod enrich;
mod stats;

pub use coerce::{lenient_salary, salary_or_zero};
pub use components::{SalaryComponents, compute_components, da_rate, hra_rate, pf_rate};
pub use currency::format_inr;
pub use enrich::enrich_employee;
pub use stats::compute_stats;

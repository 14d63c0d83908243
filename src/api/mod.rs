//! HTTP layer for the payroll dashboard.
//!
//! This module provides the REST API for employee records and the
//! server-rendered dashboard pages (list, search, add, edit, delete,
//! payslip).

mod handlers;
mod pages;
mod request;
mod response;
mod state;
mod views;

pub use handlers::create_router;
pub use request::{EmployeeForm, EmployeeInput};
pub use response::{ApiError, MessageResponse};
pub use state::AppState;

//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions outside the calculation core (the core itself
//! never fails: bad salary input coerces to zero instead).

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Store and HTTP-layer operations return this error type, making it easy
/// to handle failures consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The employee store file could not be read.
    #[error("Failed to read employee store '{path}': {message}")]
    StoreRead {
        /// The path of the store file.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// The employee store file contained invalid JSON.
    #[error("Failed to parse employee store '{path}': {message}")]
    StoreParse {
        /// The path of the store file.
        path: String,
        /// A description of the parse failure.
        message: String,
    },

    /// The employee store file could not be written.
    #[error("Failed to write employee store '{path}': {message}")]
    StoreWrite {
        /// The path of the store file.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// No employee with the given id exists in the store.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// Submitted employee data failed HTTP-layer validation.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

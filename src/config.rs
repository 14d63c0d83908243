//! Application configuration.
//!
//! Configuration comes from the environment (with `.env` support via
//! `dotenvy`); every variable has a default so the dashboard runs with no
//! setup at all.

use std::env;
use std::path::PathBuf;

/// Runtime configuration for the dashboard server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the flat-file employee store.
    pub data_file: PathBuf,
    /// Interface the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server binds to.
    pub port: u16,
}

impl AppConfig {
    /// Builds the configuration from environment variables.
    ///
    /// Recognized variables: `PAYROLL_DATA_FILE` (default `employee.json`),
    /// `PAYROLL_HOST` (default `0.0.0.0`), `PAYROLL_PORT` (default `3000`).
    /// Unparseable ports fall back to the default.
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        AppConfig {
            data_file: env::var("PAYROLL_DATA_FILE")
                .unwrap_or_else(|_| "employee.json".to_string())
                .into(),

            host: env::var("PAYROLL_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("PAYROLL_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        }
    }
}

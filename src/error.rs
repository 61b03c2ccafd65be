//! Error types for the payroll and billing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll or billing
//! computation.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the payroll and billing engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use siteledger::error::EngineError;
///
/// let error = EngineError::InvalidPeriod { month: 13, year: 2026 };
/// assert_eq!(error.to_string(), "Invalid period: month 13, year 2026");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A numeric or structural input was malformed or out of range.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// Payroll was requested for an employee with no applicable salary structure.
    #[error("No salary structure found for employee {employee_id}")]
    MissingSalaryStructure {
        /// The employee the payroll was requested for.
        employee_id: Uuid,
    },

    /// The target month/year does not denote a real calendar month.
    #[error("Invalid period: month {month}, year {year}")]
    InvalidPeriod {
        /// The requested month (1-12 when valid).
        month: u32,
        /// The requested year.
        year: i32,
    },

    /// No sidecar metadata was stored for the bill being rendered.
    #[error("No metadata found for bill {bill_id}")]
    MetadataNotFound {
        /// The bill whose metadata was requested.
        bill_id: Uuid,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Convenience constructor for [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

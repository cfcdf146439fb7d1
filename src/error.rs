//! Error types for the Salary Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during salary calculation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::EmployeeId;

/// The main error type for the Salary Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// The as-of date precedes the employee's join date, so no tenure
    /// can be computed.
    #[error("Calculation date {as_of} precedes join date {date_joined} for employee {id}")]
    InvalidDate {
        /// The employee whose tenure could not be computed.
        id: EmployeeId,
        /// The date the employee joined.
        date_joined: NaiveDate,
        /// The requested as-of date.
        as_of: NaiveDate,
    },

    /// A subordinate reference points at an identity that is not present
    /// in the hierarchy.
    #[error("Employee not found in hierarchy: {id}")]
    EmployeeNotFound {
        /// The identity that was not found.
        id: EmployeeId,
    },

    /// Two distinct employees were supplied with the same identity.
    #[error("Duplicate employee identity: {id}")]
    DuplicateIdentity {
        /// The identity that appeared more than once.
        id: EmployeeId,
    },

    /// The reporting hierarchy contains a cycle, so subordinate resolution
    /// cannot terminate.
    #[error("Reporting cycle detected at employee {id}")]
    CycleDetected {
        /// The identity at which the cycle was detected.
        id: EmployeeId,
    },

    /// An employee carries a role the rule set does not recognise.
    ///
    /// Only raised under the `Reject` unknown-role policy; the default
    /// policy maps unknown roles to a zero salary instead.
    #[error("Unknown role for employee {id}")]
    UnknownRole {
        /// The employee carrying the unrecognised role.
        id: EmployeeId,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

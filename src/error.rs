//! Error types for the Labor Cost Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rate tables and
//! computing employer cost.

use thiserror::Error;

/// The main error type for the Labor Cost Engine.
///
/// All fallible operations in the engine return this error type. The two
/// calculation errors ([`EngineError::InvalidRiskLevel`] and
/// [`EngineError::InvalidSalary`]) are caller errors: they are deterministic
/// and retrying with the same input always fails the same way.
///
/// # Example
///
/// ```
/// use labor_cost_engine::error::EngineError;
///
/// let error = EngineError::InvalidRiskLevel { level: 7 };
/// assert_eq!(error.to_string(), "Invalid risk level: 7 (expected a configured level 1-5)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested risk level has no configured occupational-risk rate.
    #[error("Invalid risk level: {level} (expected a configured level 1-5)")]
    InvalidRiskLevel {
        /// The risk level that was requested.
        level: i64,
    },

    /// The base salary was below one currency unit.
    #[error("Invalid base salary: {value} (must be at least 1)")]
    InvalidSalary {
        /// The rejected salary, rendered as text.
        value: String,
    },

    /// A rate table failed validation.
    #[error("Invalid rate table field '{field}': {message}")]
    InvalidRateTable {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
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

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Error types for the rental pricing engine.
//!
//! Eligibility rejections are ordinary outcomes of a quote and are not
//! represented here. This module only covers the failures that stop a quote
//! from being computed at all: unreadable rule files, inconsistent rules and
//! timestamps that cannot be mapped onto a calendar date.

use thiserror::Error;

/// The main error type for the rental pricing engine.
///
/// # Example
///
/// ```
/// use rental_pricing::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/pricing.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pricing.yaml");
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

    /// The pricing rules are internally inconsistent.
    #[error("Invalid pricing rules: {message}")]
    InvalidRules {
        /// A description of the inconsistency.
        message: String,
    },

    /// A timestamp falls outside the representable calendar range.
    #[error("Invalid timestamp for '{field}': {value} ms is out of range")]
    InvalidTimestamp {
        /// The request field holding the timestamp.
        field: String,
        /// The raw epoch-millisecond value.
        value: i64,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

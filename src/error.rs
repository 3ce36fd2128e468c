//! Error types for the Government Fee Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing fees or loading
//! fee schedules.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Government Fee Engine.
///
/// The pure fee computation only ever returns [`EngineError::Validation`];
/// the remaining variants come from loading fee schedules.
///
/// # Example
///
/// ```
/// use gov_fee_engine::error::EngineError;
///
/// let error = EngineError::Validation {
///     field: "categories".to_string(),
///     message: "select at least one fee category".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Validation failed for field 'categories': select at least one fee category"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A fee request or employee record was malformed or incomplete.
    #[error("Validation failed for field '{field}': {message}")]
    Validation {
        /// The offending field, using its serialized name (e.g. "other_fee.amount").
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

    /// No fee schedule is effective on the requested date.
    #[error("No fee schedule effective on {date}")]
    ScheduleNotFound {
        /// The date for which a schedule was requested.
        date: NaiveDate,
    },
}

impl EngineError {
    /// Builds a [`EngineError::Validation`] for the given field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the offending field name for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

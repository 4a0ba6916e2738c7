//! Error types for the shift compensation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording and pricing shifts.

use chrono::NaiveTime;
use thiserror::Error;

/// The main error type for the shift compensation engine.
///
/// An unknown wage level is deliberately absent: it resolves to the wage
/// table's fallback rate instead of failing.
///
/// # Example
///
/// ```
/// use turncal_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/wages.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/wages.yaml");
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

    /// Configuration parsed but holds values the engine cannot price with.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the offending value.
        message: String,
    },

    /// A shift's start time is not strictly before its end time.
    #[error("Start time {start} must be earlier than end time {end}")]
    InvalidShiftInterval {
        /// The rejected start time.
        start: NaiveTime,
        /// The rejected end time.
        end: NaiveTime,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Time-of-day text could not be parsed.
    #[error("Invalid time format '{input}'. Use HH or HH:mm (e.g., 08 or 08:00).")]
    InvalidTime {
        /// The rejected input.
        input: String,
    },

    /// Month key could not be parsed.
    #[error("Invalid month '{input}'. Use YYYY-MM (e.g., 2026-01).")]
    InvalidMonth {
        /// The rejected input.
        input: String,
    },

    /// No shift exists with the given id.
    #[error("Shift not found: {id}")]
    ShiftNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// A shift refers to an employee that could not be resolved.
    #[error("Employee not found: {name}")]
    EmployeeNotFound {
        /// The employee name that was looked up.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

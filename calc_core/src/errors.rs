//! # Error Types
//!
//! Structured error types for calc_core. Every failure in the engine is a
//! typed `CalcError`; the dispatcher turns them into user-facing strings at
//! the boundary so nothing here is ever fatal to the host process.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn parse_operand(token: &str) -> CalcResult<f64> {
//!     token
//!         .parse()
//!         .map_err(|_| CalcError::invalid_argument("add", format!("'{}' is not a number", token)))
//! }
//!
//! assert!(parse_operand("2.5").is_ok());
//! assert_eq!(parse_operand("two").unwrap_err().error_code(), "INVALID_ARGUMENT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Divisor was exactly zero
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Wrong number of operands, or an operand that is not a number
    #[error("Invalid arguments for '{command}': {reason}")]
    InvalidArgument { command: String, reason: String },

    /// No command is registered under this name
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    /// A plugin could not be instantiated or registered
    #[error("Failed to load plugin '{plugin}': {reason}")]
    PluginLoad { plugin: String, reason: String },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidArgument error
    pub fn invalid_argument(command: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidArgument {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownCommand error
    pub fn unknown_command(name: impl Into<String>) -> Self {
        CalcError::UnknownCommand { name: name.into() }
    }

    /// Create a PluginLoad error
    pub fn plugin_load(plugin: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::PluginLoad {
            plugin: plugin.into(),
            reason: reason.into(),
        }
    }

    /// Errors caused by what the user typed, as opposed to startup problems
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CalcError::DivisionByZero
                | CalcError::InvalidArgument { .. }
                | CalcError::UnknownCommand { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "DIVISION_BY_ZERO",
            CalcError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            CalcError::UnknownCommand { .. } => "UNKNOWN_COMMAND",
            CalcError::PluginLoad { .. } => "PLUGIN_LOAD_FAILURE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_argument("add", "expected 2 operands, got 1");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_division_by_zero_message() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Cannot divide by zero");
    }

    #[test]
    fn test_unknown_command_message() {
        assert_eq!(
            CalcError::unknown_command("bogus").to_string(),
            "Unknown command: bogus"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::DivisionByZero.error_code(), "DIVISION_BY_ZERO");
        assert_eq!(CalcError::plugin_load("x", "boom").error_code(), "PLUGIN_LOAD_FAILURE");
    }

    #[test]
    fn test_user_errors() {
        assert!(CalcError::DivisionByZero.is_user_error());
        assert!(!CalcError::plugin_load("x", "boom").is_user_error());
    }
}

//! # Error Types
//!
//! Structured error types for calc_core. These errors are designed to be
//! informative for both humans and tools consuming the JSON output, providing
//! enough context to understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_m: f64) -> CalcResult<()> {
//!     if width_m == 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "width_m".to_string(),
//!             value: width_m.to_string(),
//!             reason: "Width must be non-zero".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by front ends and scripts.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (unparseable, zero where a divisor is needed, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A currency, unit or other table code was not recognised
    #[error("Unknown {kind}: {code}")]
    UnknownCode { kind: String, code: String },

    /// Two units from different categories were combined
    #[error("Cannot convert {from} to {to}: units measure different quantities")]
    IncompatibleUnits { from: String, to: String },

    /// Calculation failed (division by zero, non-finite result, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// Settings file could not be read or contains bad values
    #[error("Config error: '{path}' - {reason}")]
    ConfigError { path: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownCode error
    pub fn unknown_code(kind: impl Into<String>, code: impl Into<String>) -> Self {
        CalcError::UnknownCode {
            kind: kind.into(),
            code: code.into(),
        }
    }

    /// Create an IncompatibleUnits error
    pub fn incompatible_units(from: impl Into<String>, to: impl Into<String>) -> Self {
        CalcError::IncompatibleUnits {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (the user can fix the input and retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::UnknownCode { .. }
                | CalcError::IncompatibleUnits { .. }
                | CalcError::CalculationFailed { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownCode { .. } => "UNKNOWN_CODE",
            CalcError::IncompatibleUnits { .. } => "INCOMPATIBLE_UNITS",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
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
        let error = CalcError::invalid_input("width_m", "abc", "Not a number");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::unknown_code("currency", "XYZ").error_code(), "UNKNOWN_CODE");
        assert_eq!(
            CalcError::incompatible_units("meters", "pounds").error_code(),
            "INCOMPATIBLE_UNITS"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(CalcError::missing_field("amount").is_recoverable());
        assert!(!CalcError::config_error("settings.toml", "bad rate").is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = CalcError::unknown_code("currency", "XYZ");
        assert_eq!(err.to_string(), "Unknown currency: XYZ");
    }
}

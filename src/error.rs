//! Error types for the junction calculator.
//!
//! This module provides a unified error type [`JunctionError`] that covers
//! input validation, numerical failure of the diode model, preset lookup and
//! parsing of parameter lists and constants files.

use thiserror::Error;

/// Result type alias using [`JunctionError`].
pub type Result<T> = std::result::Result<T, JunctionError>;

/// Unified error type for all junction operations.
#[derive(Error, Debug)]
pub enum JunctionError {
    // ============ Input Validation Errors ============
    /// Non-positive doping, or doping below the intrinsic level
    #[error("Invalid doping (Na={na:.3e}, Nd={nd:.3e}, ni={ni:.3e} cm^-3): {message}")]
    InvalidDoping {
        na: f64,
        nd: f64,
        ni: f64,
        message: String,
    },

    /// Invalid scalar parameter (temperature, saturation current, ...)
    #[error("Invalid parameter '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // ============ Model Errors ============
    /// Forward bias exceeds the built-in potential
    #[error(
        "Negative junction voltage Vj={vj:.4} V (Vbi={vbi:.4} V, Vapp={vapp:.4} V) - depletion approximation breaks down"
    )]
    NegativeJunctionVoltage { vbi: f64, vapp: f64, vj: f64 },

    /// Exponential current left the representable range
    #[error("Numerical overflow computing {quantity} at V={voltage:.4} V")]
    NumericalOverflow { quantity: String, voltage: f64 },

    // ============ Lookup & Parsing Errors ============
    /// Unknown device preset
    #[error("Unknown diode preset '{name}'")]
    InvalidPreset { name: String },

    /// Malformed value or parameter list
    #[error("Parse error in '{input}': {message}")]
    ParseError { input: String, message: String },

    // ============ I/O Errors ============
    /// Error reading a constants file
    #[error("Failed to read constants file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed constants file
    #[error("Invalid constants file '{path}': {source}")]
    ConfigFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize a result
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JunctionError {
    /// Create an invalid doping error
    pub fn invalid_doping(na: f64, nd: f64, ni: f64, message: impl Into<String>) -> Self {
        Self::InvalidDoping {
            na,
            nd,
            ni,
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create a numerical overflow error
    pub fn overflow(quantity: impl Into<String>, voltage: f64) -> Self {
        Self::NumericalOverflow {
            quantity: quantity.into(),
            voltage,
        }
    }

    /// Create a parse error
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            input: input.into(),
            message: message.into(),
        }
    }
}

/// Require `value` to be finite and strictly positive.
pub(crate) fn require_positive(param: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(JunctionError::invalid_parameter(
            param,
            format!("must be finite and > 0 (got {value})"),
        ))
    }
}

/// Require `value` to be finite and non-negative.
pub(crate) fn require_non_negative(param: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(JunctionError::invalid_parameter(
            param,
            format!("must be finite and >= 0 (got {value})"),
        ))
    }
}

/// Require `value` to be finite.
pub(crate) fn require_finite(param: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(JunctionError::invalid_parameter(
            param,
            format!("must be finite (got {value})"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = JunctionError::invalid_parameter("T", "must be > 0");
        assert_eq!(err.to_string(), "Invalid parameter 'T': must be > 0");

        let err = JunctionError::InvalidPreset {
            name: "zener".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown diode preset 'zener'");
    }

    #[test]
    fn test_validation_helpers() {
        assert!(require_positive("Is", 1e-12).is_ok());
        assert!(require_positive("Is", 0.0).is_err());
        assert!(require_positive("Is", f64::NAN).is_err());
        assert!(require_non_negative("Rs", 0.0).is_ok());
        assert!(require_non_negative("Rs", -1.0).is_err());
        assert!(require_finite("Vapp", -0.5).is_ok());
        assert!(require_finite("Vapp", f64::INFINITY).is_err());
    }
}

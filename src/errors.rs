//! # Error Types
//!
//! Structured error types for geostress. Every failure names the input field
//! or method that caused it, so callers (human or LLM) can diagnose and fix
//! the offending geometry programmatically.
//!
//! ## Example
//!
//! ```rust
//! use geostress::errors::{StressError, StressResult};
//!
//! fn validate_depth(depth: f64) -> StressResult<()> {
//!     if depth <= 0.0 {
//!         return Err(StressError::invalid_input(
//!             "depth",
//!             depth.to_string(),
//!             "Depth must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for geostress operations
pub type StressResult<T> = Result<T, StressError>;

/// Structured error type for influence-factor calculations.
///
/// Every variant is a domain error: the crate performs no I/O, parsing, or
/// concurrency, so invalid geometry is the only way an operation can fail.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum StressError {
    /// An input dimension violates a precondition (non-positive, NaN, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A formula could not produce a meaningful value from valid-looking inputs
    /// (trigonometric argument out of range, degenerate reference denominator)
    #[error("Calculation failed: {method} - {reason}")]
    CalculationFailed { method: String, reason: String },
}

impl StressError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        StressError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(method: impl Into<String>, reason: impl Into<String>) -> Self {
        StressError::CalculationFailed {
            method: method.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StressError::InvalidInput { .. } => "INVALID_INPUT",
            StressError::CalculationFailed { .. } => "CALCULATION_FAILED",
        }
    }
}

//! # Error Types
//!
//! Structured error types for camber_core. Every failure here is a
//! caller-input problem: the engine performs pure arithmetic, so there is no
//! transient failure mode and nothing is retryable. Errors are reported
//! immediately and never swallowed.
//!
//! ## Example
//!
//! ```rust
//! use camber_core::errors::{CamberError, CamberResult};
//!
//! fn validate_span(span_m: f64) -> CamberResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CamberError::invalid_geometry(
//!             "primary_span",
//!             span_m,
//!             "span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for camber_core operations
pub type CamberResult<T> = Result<T, CamberError>;

/// Structured error type for analysis operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by API consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CamberError {
    /// Requested support condition has no registered analyzer
    #[error("Unsupported condition: '{condition}'")]
    UnsupportedCondition { condition: String },

    /// Beam geometry is invalid for the requested analysis.
    ///
    /// Also raised in place of any arithmetic degeneracy (a zero span would
    /// otherwise divide by zero); the engine never returns NaN or infinity.
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: f64,
        reason: String,
    },

    /// A material property required by the selected analyzer is absent
    #[error("Material '{material}' is missing required property '{property}'")]
    MissingProperty { material: String, property: String },
}

impl CamberError {
    /// Create an UnsupportedCondition error
    pub fn unsupported_condition(condition: impl Into<String>) -> Self {
        CamberError::UnsupportedCondition {
            condition: condition.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        CamberError::InvalidGeometry {
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Create a MissingProperty error
    pub fn missing_property(material: impl Into<String>, property: impl Into<String>) -> Self {
        CamberError::MissingProperty {
            material: material.into(),
            property: property.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CamberError::UnsupportedCondition { .. } => "UNSUPPORTED_CONDITION",
            CamberError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CamberError::MissingProperty { .. } => "MISSING_PROPERTY",
        }
    }
}

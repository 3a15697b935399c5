//! Error types for core operations.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur constructing or serializing core state.
///
/// The geometry pipeline itself never fails: it is pure computation over
/// already-validated in-memory data. Errors exist only at the edges where
/// untrusted input enters (dimensions, colors, parameters, JSON).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Grid dimensions outside the supported range.
    #[error("Invalid grid dimensions {width}x{height} (each axis must be 4..=128)")]
    InvalidDimensions {
        /// Requested grid width.
        width: u32,
        /// Requested grid height.
        height: u32,
    },

    /// Color string could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Parameter value outside its valid range.
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// Grid serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

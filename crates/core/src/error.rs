//! # Error Types
//!
//! Invalid dimensions are rejected at the construction boundary. Once a
//! value exists, every operation on it is total: there is no way to obtain
//! a negative size or an impossible triangle through the public
//! constructors.

use thiserror::Error;

/// Errors raised while constructing geometry and shapes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A dimension was negative or not a finite number.
    #[error("Invalid dimension: {name} = {value} (must be finite and non-negative)")]
    InvalidDimension { name: &'static str, value: f64 },

    /// Three side lengths that cannot close into a triangle.
    #[error("Invalid triangle: sides {a}, {b}, {c} violate the triangle inequality")]
    InvalidTriangle { a: f64, b: f64, c: f64 },
}

/// Check that `value` is finite and non-negative.
pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<f64, CoreError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CoreError::InvalidDimension { name, value })
    }
}

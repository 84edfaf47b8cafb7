//! Error type shared by the geometry, converter and AOI modules.

use thiserror::Error;

/// Errors raised when a geometry, orientation or angle input is rejected.
///
/// Every operation in this crate fails fast: an invalid input is reported
/// at the point it is supplied and no partial result is produced.
#[derive(Debug, Error, PartialEq)]
pub enum AoiError {
    /// A screen dimension or the viewing distance is zero, negative or not finite.
    #[error("invalid screen geometry: {field} must be a positive finite value, got {value}")]
    InvalidGeometry {
        /// Name of the offending field (e.g. `"width_mm"`).
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// An orientation string is neither `horizontal` nor `vertical`.
    #[error("invalid orientation '{0}': expected 'horizontal' or 'vertical'")]
    InvalidOrientation(String),

    /// A tracker error angle is negative, not finite, or 180° or more.
    #[error("invalid error angle: {0} degrees (must be at least 0 and below 180)")]
    InvalidAngle(f64),
}

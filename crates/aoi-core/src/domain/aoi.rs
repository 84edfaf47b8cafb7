//! Minimum Area-Of-Interest size recommendation.
//!
//! An eye tracker with an angular error of `e` degrees may report a gaze
//! point up to `e` away from where the participant is really looking, in any
//! direction.  To make sure a fixation on the centre of a target is still
//! counted as "inside", the AOI must extend that margin on both sides of the
//! target centre, so each side of the AOI is at least twice the error.
//!
//! The recommended size is computed in pixels and then re-expressed in
//! degrees.  The degree values are for reporting only; because of the tangent
//! they come out slightly below `2e`.

use serde::Serialize;
use tracing::debug;

use super::converter::{AngularConversion, VisualAngleConverter};
use super::error::AoiError;
use super::geometry::{Orientation, ScreenGeometry};

/// Error values (degrees) evaluated when the caller supplies none.
pub const DEFAULT_ERROR_SWEEP: [f64; 4] = [0.5, 1.0, 1.5, 2.0];

/// Exclusive upper bound for a tracker error.  At 180° the tangent in the
/// angle-to-size formula diverges, and past it the sign flips.
pub const MAX_ERROR_DEGREES: f64 = 180.0;

/// Tracker error expressed as a pixel margin along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorPixels {
    pub horizontal: f64,
    pub vertical: f64,
}

/// Recommended minimum AOI bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AoiSize {
    pub width_pixels: f64,
    pub height_pixels: f64,
    /// `width_pixels` re-expressed as a horizontal visual angle.
    pub width_degrees: f64,
    /// `height_pixels` re-expressed as a vertical visual angle.
    pub height_degrees: f64,
}

/// Result of one AOI size calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AoiReport {
    /// The tracker error the report was computed for.
    pub error_degrees: f64,
    pub error_pixels: ErrorPixels,
    pub recommended_aoi_size: AoiSize,
}

/// Derives AOI sizes from tracker error using a fixed converter.
///
/// Generic over [`AngularConversion`] so the derivation rule does not depend
/// on the trigonometry; production code uses [`VisualAngleConverter`].
#[derive(Debug, Clone)]
pub struct AoiCalculator<C = VisualAngleConverter> {
    converter: C,
}

impl AoiCalculator<VisualAngleConverter> {
    /// Builds a calculator for the given display.
    pub fn for_geometry(geometry: ScreenGeometry) -> Self {
        Self::new(VisualAngleConverter::from_geometry(geometry))
    }
}

impl<C: AngularConversion> AoiCalculator<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    /// Computes the recommended AOI size for a tracker error of `error_degrees`.
    ///
    /// # Errors
    ///
    /// Returns [`AoiError::InvalidAngle`] if `error_degrees` is negative, not
    /// finite, or not below [`MAX_ERROR_DEGREES`].
    pub fn calculate(&self, error_degrees: f64) -> Result<AoiReport, AoiError> {
        if !error_degrees.is_finite() || !(0.0..MAX_ERROR_DEGREES).contains(&error_degrees) {
            return Err(AoiError::InvalidAngle(error_degrees));
        }

        let error_pixels = ErrorPixels {
            horizontal: self
                .converter
                .visual_angle_to_pixels(error_degrees, Orientation::Horizontal),
            vertical: self
                .converter
                .visual_angle_to_pixels(error_degrees, Orientation::Vertical),
        };

        // Margin on both sides of the true gaze point.
        let width_pixels = error_pixels.horizontal * 2.0;
        let height_pixels = error_pixels.vertical * 2.0;

        let recommended_aoi_size = AoiSize {
            width_pixels,
            height_pixels,
            width_degrees: self
                .converter
                .pixels_to_visual_angle(width_pixels, Orientation::Horizontal),
            height_degrees: self
                .converter
                .pixels_to_visual_angle(height_pixels, Orientation::Vertical),
        };

        debug!(
            error_degrees,
            width_pixels, height_pixels, "computed recommended AOI size"
        );

        Ok(AoiReport {
            error_degrees,
            error_pixels,
            recommended_aoi_size,
        })
    }

    /// Computes one report per error value, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first invalid value and returns its [`AoiError::InvalidAngle`].
    pub fn calculate_many(&self, errors_degrees: &[f64]) -> Result<Vec<AoiReport>, AoiError> {
        errors_degrees.iter().map(|&e| self.calculate(e)).collect()
    }
}

/// Computes the recommended AOI size for `error_degrees` on `geometry`.
///
/// Equivalent to `AoiCalculator::for_geometry(*geometry).calculate(error_degrees)`.
/// Use [`ScreenGeometry::default`] for the 1920×1080 / 530×300 mm / 750 mm
/// reference display and the `with_*` methods to override parts of it.
///
/// # Errors
///
/// Returns [`AoiError::InvalidAngle`] for a negative or non-finite error, or
/// one of [`MAX_ERROR_DEGREES`] or more.
///
/// # Example
///
/// ```rust
/// use aoi_core::{calculate_aoi_size, ScreenGeometry};
///
/// let report = calculate_aoi_size(1.0, &ScreenGeometry::default()).unwrap();
/// assert!((report.recommended_aoi_size.width_pixels - 94.8).abs() < 0.1);
/// ```
pub fn calculate_aoi_size(
    error_degrees: f64,
    geometry: &ScreenGeometry,
) -> Result<AoiReport, AoiError> {
    AoiCalculator::for_geometry(*geometry).calculate(error_degrees)
}

/// Same as [`calculate_aoi_size`], taking the raw screen measurements.
///
/// # Errors
///
/// Returns [`AoiError::InvalidGeometry`] if a measurement is not positive,
/// otherwise the errors of [`calculate_aoi_size`].
pub fn calculate_aoi_size_for_display(
    error_degrees: f64,
    width_px: u32,
    height_px: u32,
    width_mm: f64,
    height_mm: f64,
    distance_mm: f64,
) -> Result<AoiReport, AoiError> {
    let geometry = ScreenGeometry::new(width_px, height_px, width_mm, height_mm, distance_mm)?;
    calculate_aoi_size(error_degrees, &geometry)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

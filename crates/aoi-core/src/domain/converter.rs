//! Visual angle ↔ pixel conversion.
//!
//! # The geometry (for beginners)
//!
//! An object of linear size `s` viewed head-on from distance `d` subtends a
//! visual angle `θ` at the eye:
//!
//! ```text
//!            s/2
//!        ┌────────┐
//!   eye ◄─── d ───┤  θ = 2 · atan(s / 2d)      s = 2 · d · tan(θ / 2)
//!        └────────┘
//!            s/2
//! ```
//!
//! The converter applies that relation in millimetres, then scales by the
//! screen's pixel density along the requested axis.  Both directions use the
//! same formula, so they are exact inverses up to floating-point rounding.

use tracing::debug;

use super::error::AoiError;
use super::geometry::{Orientation, ScreenGeometry};

/// The two conversions the AOI calculator depends on.
///
/// [`VisualAngleConverter`] is the production implementation.  The trait
/// exists so the AOI derivation rule can be exercised against a stub.
#[cfg_attr(test, mockall::automock)]
pub trait AngularConversion {
    /// Converts a visual angle in degrees to a linear extent in pixels.
    fn visual_angle_to_pixels(&self, angle_degrees: f64, orientation: Orientation) -> f64;

    /// Converts a linear extent in pixels to the visual angle it subtends.
    fn pixels_to_visual_angle(&self, pixels: f64, orientation: Orientation) -> f64;
}

/// Converts between pixels and degrees of visual angle for one display.
///
/// The converter owns an immutable [`ScreenGeometry`]; every method is a pure
/// function of its arguments and that geometry.
///
/// # Example
///
/// ```rust
/// use aoi_core::{Orientation, VisualAngleConverter};
///
/// let conv = VisualAngleConverter::new(1920, 1080, 530.0, 300.0, 750.0).unwrap();
/// let px = conv.visual_angle_to_pixels(1.0, Orientation::Horizontal);
/// assert!((px - 47.4).abs() < 0.05);
/// let deg = conv.pixels_to_visual_angle(px, Orientation::Horizontal);
/// assert!((deg - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualAngleConverter {
    geometry: ScreenGeometry,
}

impl VisualAngleConverter {
    /// Builds a converter from raw screen measurements.
    ///
    /// # Errors
    ///
    /// Returns [`AoiError::InvalidGeometry`] if any value is not strictly
    /// positive and finite.
    pub fn new(
        width_px: u32,
        height_px: u32,
        width_mm: f64,
        height_mm: f64,
        distance_mm: f64,
    ) -> Result<Self, AoiError> {
        let geometry = ScreenGeometry::new(width_px, height_px, width_mm, height_mm, distance_mm)?;
        Ok(Self::from_geometry(geometry))
    }

    /// Wraps an already validated geometry.
    pub fn from_geometry(geometry: ScreenGeometry) -> Self {
        debug!(
            width_px = geometry.width_px(),
            height_px = geometry.height_px(),
            width_mm = geometry.width_mm(),
            height_mm = geometry.height_mm(),
            distance_mm = geometry.distance_mm(),
            "visual angle converter created"
        );
        Self { geometry }
    }

    pub fn geometry(&self) -> &ScreenGeometry {
        &self.geometry
    }

    /// Pixel density along `orientation`.
    pub fn pixels_per_mm(&self, orientation: Orientation) -> f64 {
        self.geometry.pixels_per_mm(orientation)
    }

    /// Physical size in millimetres that subtends `angle_degrees` at the
    /// viewing distance.  Negative angles give negative sizes.
    pub fn visual_angle_to_mm(&self, angle_degrees: f64) -> f64 {
        2.0 * self.geometry.distance_mm() * (angle_degrees.to_radians() / 2.0).tan()
    }

    /// Visual angle in degrees subtended by `size_mm` at the viewing distance.
    pub fn mm_to_visual_angle(&self, size_mm: f64) -> f64 {
        (2.0 * (size_mm / (2.0 * self.geometry.distance_mm())).atan()).to_degrees()
    }

    /// Converts `angle_degrees` to pixels along `orientation`.
    ///
    /// The mapping is signed and odd: `f(-θ) == -f(θ)`.  No clamping is applied.
    pub fn visual_angle_to_pixels(&self, angle_degrees: f64, orientation: Orientation) -> f64 {
        self.visual_angle_to_mm(angle_degrees) * self.pixels_per_mm(orientation)
    }

    /// Converts `pixels` along `orientation` to degrees of visual angle.
    ///
    /// Inverse of [`visual_angle_to_pixels`](Self::visual_angle_to_pixels)
    /// for the same orientation.
    pub fn pixels_to_visual_angle(&self, pixels: f64, orientation: Orientation) -> f64 {
        self.mm_to_visual_angle(pixels / self.pixels_per_mm(orientation))
    }
}

impl From<ScreenGeometry> for VisualAngleConverter {
    fn from(geometry: ScreenGeometry) -> Self {
        Self::from_geometry(geometry)
    }
}

impl AngularConversion for VisualAngleConverter {
    fn visual_angle_to_pixels(&self, angle_degrees: f64, orientation: Orientation) -> f64 {
        VisualAngleConverter::visual_angle_to_pixels(self, angle_degrees, orientation)
    }

    fn pixels_to_visual_angle(&self, pixels: f64, orientation: Orientation) -> f64 {
        VisualAngleConverter::pixels_to_visual_angle(self, pixels, orientation)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn default_converter() -> VisualAngleConverter {
        VisualAngleConverter::from_geometry(ScreenGeometry::default())
    }

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected} ± {tol}, got {actual}"
        );
    }

    // ── Construction ──────────────────────────────────────────────────────────

    #[test]
    fn test_new_rejects_non_positive_geometry() {
        assert!(matches!(
            VisualAngleConverter::new(1920, 1080, 530.0, 300.0, 0.0),
            Err(AoiError::InvalidGeometry { field: "distance_mm", .. })
        ));
        assert!(matches!(
            VisualAngleConverter::new(0, 1080, 530.0, 300.0, 750.0),
            Err(AoiError::InvalidGeometry { field: "width_px", .. })
        ));
    }

    #[test]
    fn test_from_geometry_exposes_same_geometry() {
        let g = ScreenGeometry::new(2560, 1440, 600.0, 340.0, 700.0).unwrap();
        let conv = VisualAngleConverter::from(g);
        assert_eq!(conv.geometry(), &g);
    }

    // ── Physical size half ────────────────────────────────────────────────────

    #[test]
    fn test_one_degree_at_750mm_is_about_13_09mm() {
        let conv = default_converter();
        // 2 * 750 * tan(0.5°) = 13.0903...
        assert_close(conv.visual_angle_to_mm(1.0), 13.0903, 1e-3);
    }

    #[test]
    fn test_mm_to_visual_angle_inverts_visual_angle_to_mm() {
        let conv = default_converter();
        for angle in [0.0, 0.25, 1.0, 10.0, 45.0, 120.0] {
            assert_close(conv.mm_to_visual_angle(conv.visual_angle_to_mm(angle)), angle, 1e-9);
        }
    }

    // ── Pixel conversions ─────────────────────────────────────────────────────

    #[test]
    fn test_one_degree_horizontal_on_default_display_is_about_47_4px() {
        let conv = default_converter();
        let px = conv.visual_angle_to_pixels(1.0, Orientation::Horizontal);
        // 13.0903 mm * 1920/530 px/mm = 47.42
        assert_close(px, 47.42, 0.01);
    }

    #[test]
    fn test_one_degree_vertical_uses_vertical_density() {
        let conv = default_converter();
        let px = conv.visual_angle_to_pixels(1.0, Orientation::Vertical);
        // 13.0903 mm * 1080/300 px/mm = 47.13
        assert_close(px, 47.125, 0.01);
    }

    #[test]
    fn test_zero_angle_maps_to_zero_pixels() {
        let conv = default_converter();
        for o in Orientation::ALL {
            assert_eq!(conv.visual_angle_to_pixels(0.0, o), 0.0);
            assert_eq!(conv.pixels_to_visual_angle(0.0, o), 0.0);
        }
    }

    #[test]
    fn test_negative_angle_maps_to_negative_pixels_symmetrically() {
        let conv = default_converter();
        let pos = conv.visual_angle_to_pixels(2.0, Orientation::Horizontal);
        let neg = conv.visual_angle_to_pixels(-2.0, Orientation::Horizontal);
        assert!(neg < 0.0);
        assert_close(neg, -pos, 1e-12);
    }

    #[test]
    fn test_round_trip_recovers_angle_within_relative_tolerance() {
        let conv = VisualAngleConverter::new(2560, 1440, 600.0, 340.0, 650.0).unwrap();
        for o in Orientation::ALL {
            for angle in [0.01, 0.5, 1.0, 1.5, 2.0, 5.0, 30.0, 90.0] {
                let back = conv.pixels_to_visual_angle(conv.visual_angle_to_pixels(angle, o), o);
                assert!(
                    ((back - angle) / angle).abs() < 1e-9,
                    "{o}: {angle}° came back as {back}°"
                );
            }
        }
    }

    #[test]
    fn test_visual_angle_to_pixels_is_strictly_increasing() {
        let conv = default_converter();
        for o in Orientation::ALL {
            let mut previous = conv.visual_angle_to_pixels(0.0, o);
            for step in 1..=170 {
                let current = conv.visual_angle_to_pixels(f64::from(step) * 0.5, o);
                assert!(current > previous, "{o}: not increasing at step {step}");
                previous = current;
            }
        }
    }

    #[test]
    fn test_closer_viewing_distance_needs_fewer_pixels() {
        let near = VisualAngleConverter::new(1920, 1080, 530.0, 300.0, 500.0).unwrap();
        let far = VisualAngleConverter::new(1920, 1080, 530.0, 300.0, 1000.0).unwrap();
        let o = Orientation::Horizontal;
        assert!(near.visual_angle_to_pixels(1.0, o) < far.visual_angle_to_pixels(1.0, o));
    }

    #[test]
    fn test_trait_object_dispatches_to_inherent_methods() {
        let conv = default_converter();
        let dynamic: &dyn AngularConversion = &conv;
        assert_eq!(
            dynamic.visual_angle_to_pixels(1.0, Orientation::Vertical),
            conv.visual_angle_to_pixels(1.0, Orientation::Vertical)
        );
        assert_eq!(
            dynamic.pixels_to_visual_angle(100.0, Orientation::Horizontal),
            conv.pixels_to_visual_angle(100.0, Orientation::Horizontal)
        );
    }
}

//! Screen geometry value object and the orientation axis selector.
//!
//! A [`ScreenGeometry`] describes one physical display as seen by one observer:
//! its resolution in pixels, its visible area in millimetres, and the distance
//! from the eye to the screen surface.  Everything the converter needs to turn
//! pixels into degrees (and back) is derived from these five numbers.
//!
//! # Why validate on construction?
//!
//! All conversions divide by the physical size or the distance.  A zero or
//! negative value would silently produce `inf`, `NaN` or mirrored results, so
//! the fields are private and every way of building a geometry checks them.

use std::fmt;
use std::str::FromStr;

use super::error::AoiError;

/// Default horizontal resolution (common 1080p desktop monitor).
pub const DEFAULT_WIDTH_PX: u32 = 1920;
/// Default vertical resolution.
pub const DEFAULT_HEIGHT_PX: u32 = 1080;
/// Default visible width of a 24" 16:9 panel, in millimetres.
pub const DEFAULT_WIDTH_MM: f64 = 530.0;
/// Default visible height, in millimetres.
pub const DEFAULT_HEIGHT_MM: f64 = 300.0;
/// Default eye-to-screen distance, in millimetres.
pub const DEFAULT_DISTANCE_MM: f64 = 750.0;

/// Selects which screen axis a conversion applies to.
///
/// Horizontal conversions use the width in pixels and millimetres; vertical
/// conversions use the height.  The viewing distance is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Returns the lower-case name used on the command line and in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = AoiError;

    /// Parses `horizontal`/`vertical` (or `h`/`v`), ignoring case and
    /// surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`AoiError::InvalidOrientation`] for any other text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            "vertical" | "v" => Ok(Orientation::Vertical),
            _ => Err(AoiError::InvalidOrientation(s.to_string())),
        }
    }
}

/// Physical description of a display and the observer's viewing distance.
///
/// Invariant: every field is strictly positive and finite.  The struct is
/// immutable; the `with_*` methods return a new, re-validated geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry {
    width_px: u32,
    height_px: u32,
    width_mm: f64,
    height_mm: f64,
    distance_mm: f64,
}

impl ScreenGeometry {
    /// Creates a validated geometry.
    ///
    /// # Errors
    ///
    /// Returns [`AoiError::InvalidGeometry`] naming the first field that is
    /// zero, negative, `NaN` or infinite.
    pub fn new(
        width_px: u32,
        height_px: u32,
        width_mm: f64,
        height_mm: f64,
        distance_mm: f64,
    ) -> Result<Self, AoiError> {
        check_positive("width_px", f64::from(width_px))?;
        check_positive("height_px", f64::from(height_px))?;
        check_positive("width_mm", width_mm)?;
        check_positive("height_mm", height_mm)?;
        check_positive("distance_mm", distance_mm)?;

        Ok(Self {
            width_px,
            height_px,
            width_mm,
            height_mm,
            distance_mm,
        })
    }

    /// Returns a copy with a different resolution.
    ///
    /// # Errors
    ///
    /// Returns [`AoiError::InvalidGeometry`] if either value is zero.
    pub fn with_resolution(self, width_px: u32, height_px: u32) -> Result<Self, AoiError> {
        Self::new(width_px, height_px, self.width_mm, self.height_mm, self.distance_mm)
    }

    /// Returns a copy with a different visible area.
    ///
    /// # Errors
    ///
    /// Returns [`AoiError::InvalidGeometry`] if either value is not positive.
    pub fn with_physical_size(self, width_mm: f64, height_mm: f64) -> Result<Self, AoiError> {
        Self::new(self.width_px, self.height_px, width_mm, height_mm, self.distance_mm)
    }

    /// Returns a copy with a different viewing distance.
    ///
    /// # Errors
    ///
    /// Returns [`AoiError::InvalidGeometry`] if `distance_mm` is not positive.
    pub fn with_distance(self, distance_mm: f64) -> Result<Self, AoiError> {
        Self::new(self.width_px, self.height_px, self.width_mm, self.height_mm, distance_mm)
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    pub fn distance_mm(&self) -> f64 {
        self.distance_mm
    }

    /// Resolution along `orientation`, in pixels.
    pub fn pixels(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Horizontal => self.width_px,
            Orientation::Vertical => self.height_px,
        }
    }

    /// Visible extent along `orientation`, in millimetres.
    pub fn millimeters(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width_mm,
            Orientation::Vertical => self.height_mm,
        }
    }

    /// Pixel density along `orientation`: `pixels(axis) / millimeters(axis)`.
    pub fn pixels_per_mm(&self, orientation: Orientation) -> f64 {
        f64::from(self.pixels(orientation)) / self.millimeters(orientation)
    }
}

impl Default for ScreenGeometry {
    /// 1920×1080 px, 530×300 mm, viewed from 750 mm.
    fn default() -> Self {
        Self {
            width_px: DEFAULT_WIDTH_PX,
            height_px: DEFAULT_HEIGHT_PX,
            width_mm: DEFAULT_WIDTH_MM,
            height_mm: DEFAULT_HEIGHT_MM,
            distance_mm: DEFAULT_DISTANCE_MM,
        }
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), AoiError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AoiError::InvalidGeometry { field, value })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

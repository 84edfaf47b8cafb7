//! Resolves the effective display and evaluates a sweep of tracker errors.

use aoi_core::{AoiCalculator, AoiError, AoiReport, ScreenGeometry};
use tracing::info;

use crate::infrastructure::config::{AppConfig, DisplayConfig};

/// Per-field geometry overrides supplied on the command line.
///
/// `None` means "keep the profile value".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeometryOverrides {
    pub width_px: Option<u32>,
    pub height_px: Option<u32>,
    pub width_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub distance_mm: Option<f64>,
}

/// Builds the geometry to evaluate: overrides take precedence over the profile.
///
/// # Errors
///
/// Returns [`AoiError::InvalidGeometry`] if the merged values are not all positive.
pub fn resolve_geometry(
    config: &AppConfig,
    overrides: &GeometryOverrides,
) -> Result<ScreenGeometry, AoiError> {
    let display = &config.display;
    DisplayConfig {
        width_px: overrides.width_px.unwrap_or(display.width_px),
        height_px: overrides.height_px.unwrap_or(display.height_px),
        width_mm: overrides.width_mm.unwrap_or(display.width_mm),
        height_mm: overrides.height_mm.unwrap_or(display.height_mm),
        distance_mm: overrides.distance_mm.unwrap_or(display.distance_mm),
    }
    .to_geometry()
}

/// Picks the error values to evaluate: the command line wins when non-empty.
pub fn resolve_errors(config: &AppConfig, cli_errors: &[f64]) -> Vec<f64> {
    if cli_errors.is_empty() {
        config.analysis.error_degrees.clone()
    } else {
        cli_errors.to_vec()
    }
}

/// Runs the AOI calculator over `errors` on `geometry`.
///
/// # Errors
///
/// Returns [`AoiError::InvalidAngle`] for the first negative or non-finite error.
pub fn evaluate(geometry: ScreenGeometry, errors: &[f64]) -> Result<Vec<AoiReport>, AoiError> {
    info!(
        width_px = geometry.width_px(),
        height_px = geometry.height_px(),
        width_mm = geometry.width_mm(),
        height_mm = geometry.height_mm(),
        distance_mm = geometry.distance_mm(),
        count = errors.len(),
        "evaluating AOI sizes"
    );
    AoiCalculator::for_geometry(geometry).calculate_many(errors)
}

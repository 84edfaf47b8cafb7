//! Report rendering: a plain-text table for people, JSON for scripts.

use std::fmt;

use aoi_core::AoiReport;
use clap::ValueEnum;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing, one block per error value.
    #[default]
    Text,
    /// Pretty-printed JSON array of reports.
    Json,
}

/// Heading printed above the text listing.
pub const TEXT_HEADER: &str = "AOI Size Calculations for Different Error Degrees";

/// Renders `reports` in the requested format.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] only for [`OutputFormat::Json`] if
/// serialisation fails.
pub fn render(reports: &[AoiReport], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => render_json(reports),
    }
}

/// Renders the text listing.  All measurements use one decimal place.
pub fn render_text(reports: &[AoiReport]) -> String {
    TextReport(reports).to_string()
}

/// [`fmt::Display`] adapter that writes the text listing for a slice of reports.
pub struct TextReport<'a>(pub &'a [AoiReport]);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{TEXT_HEADER}")?;
        writeln!(f, "{}", "-".repeat(50))?;

        for r in self.0 {
            let size = &r.recommended_aoi_size;
            writeln!(f)?;
            writeln!(f, "Calculations for {:?}° error:", r.error_degrees)?;
            writeln!(f, "Error in pixels:")?;
            writeln!(f, "  Horizontal: {:.1} pixels", r.error_pixels.horizontal)?;
            writeln!(f, "  Vertical: {:.1} pixels", r.error_pixels.vertical)?;
            writeln!(f, "Recommended minimum AOI size:")?;
            writeln!(f, "  Width: {:.1} pixels", size.width_pixels)?;
            writeln!(f, "  Height: {:.1} pixels", size.height_pixels)?;
            writeln!(f, "Resulting AOI size in visual angles:")?;
            writeln!(f, "  Width: {:.1}°", size.width_degrees)?;
            writeln!(f, "  Height: {:.1}°", size.height_degrees)?;
        }
        Ok(())
    }
}

/// Renders the reports as a pretty-printed JSON array.
///
/// # Errors
///
/// Propagates [`serde_json::Error`] from serialisation.
pub fn render_json(reports: &[AoiReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}

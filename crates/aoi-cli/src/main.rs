//! `aoi-calc`: prints recommended minimum AOI sizes for eye-tracking analysis.
//!
//! # Usage
//!
//! ```text
//! aoi-calc [OPTIONS] [ERROR_DEGREES]...
//!
//! Arguments:
//!   [ERROR_DEGREES]...        Tracker errors in degrees [default: profile or 0.5 1.0 1.5 2.0]
//!
//! Options:
//!   --width-px <PX>           Horizontal resolution
//!   --height-px <PX>          Vertical resolution
//!   --width-mm <MM>           Visible screen width in millimetres
//!   --height-mm <MM>          Visible screen height in millimetres
//!   --distance-mm <MM>        Eye-to-screen distance in millimetres
//!   --config <PATH>           Display profile (TOML)
//!   --format <text|json>      Output format [default: text]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable          | Option          |
//! |-------------------|-----------------|
//! | `AOI_WIDTH_PX`    | `--width-px`    |
//! | `AOI_HEIGHT_PX`   | `--height-px`   |
//! | `AOI_WIDTH_MM`    | `--width-mm`    |
//! | `AOI_HEIGHT_MM`   | `--height-mm`   |
//! | `AOI_DISTANCE_MM` | `--distance-mm` |
//! | `AOI_CONFIG`      | `--config`      |
//!
//! Command-line values win over environment variables, which win over the
//! profile, which wins over the built-in reference display.
//!
//! Logs go to stderr; `RUST_LOG` overrides the profile's `log_level`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use aoi_cli::application::evaluate::{evaluate, resolve_errors, resolve_geometry, GeometryOverrides};
use aoi_cli::application::render::{render, OutputFormat};
use aoi_cli::infrastructure::config::load_config;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Command-line arguments for `aoi-calc`.
#[derive(Debug, Parser)]
#[command(
    name = "aoi-calc",
    about = "Recommend minimum eye-tracking AOI sizes from tracker angular error",
    version
)]
struct Cli {
    /// Tracker angular errors in degrees.
    #[arg(value_name = "ERROR_DEGREES", allow_negative_numbers = true)]
    errors: Vec<f64>,

    /// Horizontal screen resolution in pixels.
    #[arg(long, env = "AOI_WIDTH_PX")]
    width_px: Option<u32>,

    /// Vertical screen resolution in pixels.
    #[arg(long, env = "AOI_HEIGHT_PX")]
    height_px: Option<u32>,

    /// Visible screen width in millimetres.
    #[arg(long, env = "AOI_WIDTH_MM")]
    width_mm: Option<f64>,

    /// Visible screen height in millimetres.
    #[arg(long, env = "AOI_HEIGHT_MM")]
    height_mm: Option<f64>,

    /// Distance from the eye to the screen in millimetres.
    #[arg(long, env = "AOI_DISTANCE_MM")]
    distance_mm: Option<f64>,

    /// Path to a TOML display profile.
    #[arg(long, env = "AOI_CONFIG")]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Cli {
    fn overrides(&self) -> GeometryOverrides {
        GeometryOverrides {
            width_px: self.width_px,
            height_px: self.height_px,
            width_mm: self.width_mm,
            height_mm: self.height_mm,
            distance_mm: self.distance_mm,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The profile is read first because it supplies the fallback log level.
    let profile = load_config(cli.config.as_deref()).context("failed to load display profile")?;
    let config = profile.config;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.analysis.log_level)),
        )
        .init();

    match &profile.path {
        Some(path) => debug!(path = %path.display(), ?config, "loaded display profile"),
        None => debug!(?config, "no display profile found, using defaults"),
    }

    let geometry =
        resolve_geometry(&config, &cli.overrides()).context("invalid screen geometry")?;
    let errors = resolve_errors(&config, &cli.errors);

    let reports = evaluate(geometry, &errors).context("AOI calculation failed")?;
    let output = render(&reports, cli.format).context("failed to render reports")?;

    print!("{output}");
    info!(reports = reports.len(), "done");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

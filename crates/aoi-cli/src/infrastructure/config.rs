//! TOML display profile for the `aoi-calc` binary.
//!
//! A profile describes the lab display and the default error sweep so they do
//! not have to be repeated on every invocation.  It is read from `--config`
//! when given, otherwise from the platform-appropriate location:
//! - Linux:    `$XDG_CONFIG_HOME/aoi-calc/profile.toml` or `~/.config/aoi-calc/profile.toml`
//! - Windows:  `%APPDATA%\AoiCalc\profile.toml`
//! - macOS:    `~/Library/Application Support/AoiCalc/profile.toml`
//!
//! ```toml
//! [display]
//! width_px = 2560
//! height_px = 1440
//! width_mm = 600.0
//! height_mm = 340.0
//! distance_mm = 750.0
//!
//! [analysis]
//! error_degrees = [0.5, 1.0]
//! log_level = "debug"
//! ```
//!
//! Every field is optional.  Missing fields fall back to the reference display
//! (1920×1080, 530×300 mm, 750 mm) and the default sweep `0.5, 1.0, 1.5, 2.0`.

use std::path::{Path, PathBuf};

use aoi_core::domain::geometry::{
    DEFAULT_DISTANCE_MM, DEFAULT_HEIGHT_MM, DEFAULT_HEIGHT_PX, DEFAULT_WIDTH_MM, DEFAULT_WIDTH_PX,
};
use aoi_core::{AoiError, ScreenGeometry, DEFAULT_ERROR_SWEEP};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the profile inside the platform config directory.
pub const PROFILE_FILE_NAME: &str = "profile.toml";

/// Error type for profile loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error reading profile at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse profile TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Profile schema ────────────────────────────────────────────────────────────

/// Top-level profile document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Physical display and viewing distance.
///
/// Values are not validated here; [`DisplayConfig::to_geometry`] does that so
/// the error names the offending field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_width_px")]
    pub width_px: u32,
    #[serde(default = "default_height_px")]
    pub height_px: u32,
    #[serde(default = "default_width_mm")]
    pub width_mm: f64,
    #[serde(default = "default_height_mm")]
    pub height_mm: f64,
    #[serde(default = "default_distance_mm")]
    pub distance_mm: f64,
}

/// Analysis defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// Tracker errors evaluated when none are given on the command line.
    #[serde(default = "default_error_degrees")]
    pub error_degrees: Vec<f64>,
    /// `tracing` level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_width_px() -> u32 {
    DEFAULT_WIDTH_PX
}
fn default_height_px() -> u32 {
    DEFAULT_HEIGHT_PX
}
fn default_width_mm() -> f64 {
    DEFAULT_WIDTH_MM
}
fn default_height_mm() -> f64 {
    DEFAULT_HEIGHT_MM
}
fn default_distance_mm() -> f64 {
    DEFAULT_DISTANCE_MM
}
fn default_error_degrees() -> Vec<f64> {
    DEFAULT_ERROR_SWEEP.to_vec()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width_px: default_width_px(),
            height_px: default_height_px(),
            width_mm: default_width_mm(),
            height_mm: default_height_mm(),
            distance_mm: default_distance_mm(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            error_degrees: default_error_degrees(),
            log_level: default_log_level(),
        }
    }
}

impl DisplayConfig {
    /// Validates the profile values and builds a [`ScreenGeometry`].
    ///
    /// # Errors
    ///
    /// Returns [`AoiError::InvalidGeometry`] for any non-positive value.
    pub fn to_geometry(&self) -> Result<ScreenGeometry, AoiError> {
        ScreenGeometry::new(
            self.width_px,
            self.height_px,
            self.width_mm,
            self.height_mm,
            self.distance_mm,
        )
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Resolves the platform profile path.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot
/// be determined from the environment.
pub fn default_profile_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join(PROFILE_FILE_NAME))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Parses a profile from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed or a field has the
/// wrong type.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// A loaded profile together with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProfile {
    pub config: AppConfig,
    /// `None` when no profile file was found and the defaults are in use.
    pub path: Option<PathBuf>,
}

/// Loads the profile from an explicit path.  The file must exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if it is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Loads the profile from `explicit` if given, otherwise from the platform
/// location, falling back to `AppConfig::default()` when that file does not
/// exist or no platform directory is known.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors (including a missing
/// explicit file) and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedProfile, ConfigError> {
    if let Some(path) = explicit {
        return Ok(LoadedProfile {
            config: load_config_from(path)?,
            path: Some(path.to_path_buf()),
        });
    }

    let defaults = LoadedProfile { config: AppConfig::default(), path: None };

    let path = match default_profile_path() {
        Ok(path) => path,
        Err(ConfigError::NoPlatformConfigDir) => return Ok(defaults),
        Err(e) => return Err(e),
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(LoadedProfile {
            config: parse_config(&content)?,
            path: Some(path),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(defaults),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Resolves the platform config directory for this tool.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("AoiCalc"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("aoi-calc"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("AoiCalc")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

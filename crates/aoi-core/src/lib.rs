//! # aoi-core
//!
//! Converts between screen pixels and degrees of visual angle for an
//! observer at a known viewing distance, and recommends a minimum
//! Area-Of-Interest (AOI) size for eye-tracking analysis given a tracker's
//! angular error.
//!
//! The crate has no I/O and no runtime state.  Presentation (tables, JSON,
//! config files) lives in the `aoi-cli` crate.
//!
//! # Quick start
//!
//! ```rust
//! use aoi_core::{calculate_aoi_size, Orientation, ScreenGeometry, VisualAngleConverter};
//!
//! // 27" 1440p monitor viewed from 65 cm.
//! let geometry = ScreenGeometry::new(2560, 1440, 597.0, 336.0, 650.0).unwrap();
//!
//! let converter = VisualAngleConverter::from_geometry(geometry);
//! let one_degree = converter.visual_angle_to_pixels(1.0, Orientation::Horizontal);
//! assert!(one_degree > 45.0 && one_degree < 50.0);
//!
//! let report = calculate_aoi_size(0.5, &geometry).unwrap();
//! assert_eq!(
//!     report.recommended_aoi_size.width_pixels,
//!     report.error_pixels.horizontal * 2.0
//! );
//! ```

pub mod domain;

pub use domain::aoi::{
    calculate_aoi_size, calculate_aoi_size_for_display, AoiCalculator, AoiReport, AoiSize,
    ErrorPixels, DEFAULT_ERROR_SWEEP, MAX_ERROR_DEGREES,
};
pub use domain::converter::{AngularConversion, VisualAngleConverter};
pub use domain::error::AoiError;
pub use domain::geometry::{Orientation, ScreenGeometry};

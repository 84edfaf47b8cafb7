//! aoi-cli library entry point.
//!
//! Re-exports the modules used by the `aoi-calc` binary so integration tests
//! in `tests/` and `main.rs` share the same module tree.
//!
//! The binary is a thin presentation layer over `aoi-core`: it merges the
//! display profile with command-line overrides, asks the core for one
//! [`aoi_core::AoiReport`] per tracker error, and prints the reports.

/// Application layer: geometry resolution, evaluation and rendering.
pub mod application;

/// Infrastructure layer: display profile loading.
pub mod infrastructure;

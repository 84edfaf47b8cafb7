//! Application layer use cases for the `aoi-calc` binary.
//!
//! - **`evaluate`** – merges command-line overrides with the display profile
//!   into a validated [`aoi_core::ScreenGeometry`] and runs the AOI calculator
//!   over the requested error values.
//! - **`render`** – turns the resulting reports into the human-readable table
//!   or JSON.

pub mod evaluate;
pub mod render;

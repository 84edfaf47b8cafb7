//! Domain entities for visual angle conversion and AOI sizing.
//!
//! Everything here is pure arithmetic over immutable values: no I/O, no
//! global state, no interior mutability.  The modules are layered leaf-first:
//!
//! - [`geometry`] – the display description and the axis selector.
//! - [`converter`] – degrees ↔ millimetres ↔ pixels for one display.
//! - [`aoi`] – the AOI sizing rule built on top of the converter.

pub mod aoi;
pub mod converter;
pub mod error;
pub mod geometry;

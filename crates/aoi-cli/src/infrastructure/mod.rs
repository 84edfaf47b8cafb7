//! Infrastructure layer: reading the display profile from disk.

pub mod config;

//! Rendering drivers for the entropy pipeline.
//!
//! This module contains the consumers of the per-block color sequence:
//! - Square-grid layout over a fixed canvas
//! - Colorized hex dump for the terminal
//! - Raster heat-grid image output (optional, `raster` feature)

pub mod layout;
pub mod raster;
pub mod text;

pub use layout::{compute_layout, GridGeometry, CANVAS_HEIGHT, CANVAS_WIDTH, MIN_VERTICAL_CELL};
pub use raster::{RasterBackend, RasterError};
pub use text::write_hex_dump;

//! Entrospect - per-block entropy visualizer for binary files.
//!
//! This library splits a byte buffer into fixed-size blocks and provides:
//! - Shannon entropy calculation, normalized against the block length
//! - A blue-to-red color gradient over normalized entropy
//! - A square-grid layout that packs the blocks into a fixed canvas
//! - Rendering drivers for colorized terminal hex dumps and raster images
//!
//! Low-entropy regions (padding, structured data) come out blue; compressed
//! or encrypted regions come out red.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

pub mod analysis;
pub mod util;
pub mod viz;

//! Utility functions shared across the application.
//!
//! This module provides common utilities for:
//! - Color mapping from normalized entropy to RGB
//! - Data formatting

pub mod color;
pub mod format;

pub use color::{entropy_to_rgb, Rgb};
pub use format::format_bytes;

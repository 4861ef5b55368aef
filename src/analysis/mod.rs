//! Analysis algorithms for binary data inspection.
//!
//! This module provides the entropy pipeline:
//! - Shannon entropy calculation over byte blocks
//! - Normalization against the maximum entropy for a block length
//! - Parallel per-block scanning of a whole buffer

pub mod entropy;

pub use entropy::{
    calculate_entropy, max_entropy, normalized_entropy, profile_blocks, BlockProfile,
};

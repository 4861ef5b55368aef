//! Shannon entropy calculation over fixed-size byte blocks.
//!
//! Entropy is computed from a fixed 256-entry counting array keyed by byte
//! value, then normalized against the maximum achievable entropy for the
//! block length so that short tail blocks compare fairly with full ones.

use rayon::prelude::*;

/// Per-block scan result: where the block sits in the input and how random it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockProfile {
    /// Byte offset of the block in the input buffer.
    pub offset: usize,
    /// Block length. Equals the configured block size except for the tail.
    pub len: usize,
    /// Shannon entropy in bits, 0.0..=8.0.
    pub entropy: f64,
    /// Entropy divided by `max_entropy(len)`, 0.0..=1.0.
    pub normalized: f64,
}

/// Calculate Shannon entropy for a byte slice.
///
/// Returns 0.0 for an empty slice. Values range from 0 (all bytes identical)
/// to 8 (uniform over all 256 byte values).
pub fn calculate_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut counts = [0u32; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }

    let total = data.len() as f64;
    let mut entropy = 0.0;
    for &count in &counts {
        if count > 0 {
            let p = f64::from(count) / total;
            entropy -= p * p.log2();
        }
    }
    entropy
}

/// Maximum achievable entropy for a block of `n` bytes.
///
/// Below 256 bytes the alphabet cannot be exhausted, so the ceiling is
/// `log2(n)` (every byte distinct). From 256 bytes up it is the full 8 bits.
pub fn max_entropy(n: usize) -> f64 {
    if n == 0 {
        0.0
    } else if n < 256 {
        (n as f64).log2()
    } else {
        8.0
    }
}

/// Entropy of `data` normalized to 0.0..=1.0 against its length's ceiling.
///
/// Blocks whose ceiling is zero (empty, or a single byte where `log2(1) == 0`)
/// normalize to 0.0 rather than dividing by zero.
pub fn normalized_entropy(data: &[u8]) -> f64 {
    let max = max_entropy(data.len());
    if max > 0.0 {
        calculate_entropy(data) / max
    } else {
        0.0
    }
}

/// Split `data` into `block_size` chunks and profile each one.
///
/// The final block may be shorter; an empty input yields no blocks. Blocks are
/// independent, so the scan runs in parallel while the result order stays
/// equal to block order in the input.
///
/// # Panics
/// Panics if `block_size` is zero. The CLI rejects that at parse time.
pub fn profile_blocks(data: &[u8], block_size: usize) -> Vec<BlockProfile> {
    assert!(block_size > 0, "block size must be positive");

    data.par_chunks(block_size)
        .enumerate()
        .map(|(index, block)| BlockProfile {
            offset: index * block_size,
            len: block.len(),
            entropy: calculate_entropy(block),
            normalized: normalized_entropy(block),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_empty() {
        assert_eq!(calculate_entropy(&[]), 0.0);
    }

    #[test]
    fn test_entropy_uniform() {
        // All identical bytes carry no information
        let data = vec![0x41u8; 64];
        assert_eq!(calculate_entropy(&data), 0.0);
    }

    #[test]
    fn test_entropy_all_distinct() {
        // n distinct bytes with n <= 256 hit the log2(n) ceiling exactly
        for n in [2usize, 16, 64, 256] {
            let data: Vec<u8> = (0..n).map(|i| i as u8).collect();
            let entropy = calculate_entropy(&data);
            assert!((entropy - (n as f64).log2()).abs() < 1e-9, "n={n}");
        }
    }

    #[test]
    fn test_entropy_two_values() {
        // Half zeros, half ones: exactly one bit per byte
        let mut data = vec![0u8; 128];
        data.extend(vec![1u8; 128]);
        assert!((calculate_entropy(&data) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_bounded_by_max() {
        let data: Vec<u8> = (0..1000u32).map(|i| (i.wrapping_mul(2654435761) >> 24) as u8).collect();
        for size in [1usize, 7, 16, 255, 256, 1000] {
            let block = &data[..size];
            let entropy = calculate_entropy(block);
            assert!(entropy >= 0.0);
            assert!(entropy <= max_entropy(size) + 1e-9, "size={size}");
        }
    }

    #[test]
    fn test_max_entropy() {
        assert_eq!(max_entropy(0), 0.0);
        assert!((max_entropy(255) - 255f64.log2()).abs() < 1e-12);
        assert_eq!(max_entropy(256), 8.0);
        assert_eq!(max_entropy(1000), 8.0);
    }

    #[test]
    fn test_normalized_entropy_guards() {
        // Zero ceiling cases divide to 0.0, not NaN
        assert_eq!(normalized_entropy(&[]), 0.0);
        assert_eq!(normalized_entropy(&[0x7f]), 0.0);
    }

    #[test]
    fn test_normalized_entropy_range() {
        let data: Vec<u8> = (0..=255).collect();
        let norm = normalized_entropy(&data);
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_profile_blocks_splits_tail() {
        let data = vec![0u8; 40];
        let profiles = profile_blocks(&data, 16);
        assert_eq!(profiles.len(), 3);
        assert_eq!(profiles[0].offset, 0);
        assert_eq!(profiles[1].offset, 16);
        assert_eq!(profiles[2].offset, 32);
        assert_eq!(profiles[2].len, 8);
    }

    #[test]
    fn test_profile_blocks_empty_input() {
        assert!(profile_blocks(&[], 16).is_empty());
    }

    #[test]
    fn test_profile_blocks_order() {
        // Distinct per-block content proves result order matches input order
        let mut data = vec![0u8; 16];
        data.extend((0..16).map(|i| i as u8));
        let profiles = profile_blocks(&data, 16);
        assert_eq!(profiles[0].entropy, 0.0);
        assert!((profiles[1].entropy - 4.0).abs() < 1e-9);
    }
}

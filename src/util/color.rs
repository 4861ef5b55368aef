//! Color mapping for entropy visualization.
//!
//! Maps a normalized entropy value in [0, 1] onto a fixed five-anchor
//! gradient, interpolating linearly in RGB between adjacent anchors:
//! - 0.00 blue (cold, structured/padding)
//! - 0.25 cyan
//! - 0.50 green
//! - 0.75 yellow
//! - 1.00 red (hot, compressed/encrypted)

/// An 8-bit RGB triple. No alpha; produced only by the gradient mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Gradient anchors in increasing position order.
const ANCHORS: [(f64, Rgb); 5] = [
    (0.00, Rgb::new(0, 0, 255)),
    (0.25, Rgb::new(0, 255, 255)),
    (0.50, Rgb::new(0, 255, 0)),
    (0.75, Rgb::new(255, 255, 0)),
    (1.00, Rgb::new(255, 0, 0)),
];

/// Map a normalized entropy value to a gradient color.
///
/// Input outside [0, 1] is pinned to the nearest bound before mapping.
/// Channels are interpolated independently and truncated to integers, so the
/// anchor positions reproduce their colors exactly.
#[must_use]
pub fn entropy_to_rgb(normalized: f64) -> Rgb {
    let norm = normalized.clamp(0.0, 1.0);

    for pair in ANCHORS.windows(2) {
        let (x0, c0) = pair[0];
        let (x1, c1) = pair[1];
        if x0 <= norm && norm <= x1 {
            let t = (norm - x0) / (x1 - x0);
            return Rgb::new(
                lerp_channel(c0.r, c1.r, t),
                lerp_channel(c0.g, c1.g, t),
                lerp_channel(c0.b, c1.b, t),
            );
        }
    }

    // Unreachable after the clamp; kept as a fallback against float edge cases.
    ANCHORS[ANCHORS.len() - 1].1
}

#[inline]
fn lerp_channel(c0: u8, c1: u8, t: f64) -> u8 {
    (f64::from(c0) + t * (f64::from(c1) - f64::from(c0))) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_colors_exact() {
        assert_eq!(entropy_to_rgb(0.0), Rgb::new(0, 0, 255));
        assert_eq!(entropy_to_rgb(0.25), Rgb::new(0, 255, 255));
        assert_eq!(entropy_to_rgb(0.5), Rgb::new(0, 255, 0));
        assert_eq!(entropy_to_rgb(0.75), Rgb::new(255, 255, 0));
        assert_eq!(entropy_to_rgb(1.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(entropy_to_rgb(-0.5), entropy_to_rgb(0.0));
        assert_eq!(entropy_to_rgb(1.5), entropy_to_rgb(1.0));
        assert_eq!(entropy_to_rgb(f64::NEG_INFINITY), Rgb::new(0, 0, 255));
        assert_eq!(entropy_to_rgb(f64::INFINITY), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_midpoint_interpolation() {
        // Halfway between blue and cyan: green channel halfway up, truncated
        let mid = entropy_to_rgb(0.125);
        assert_eq!(mid.r, 0);
        assert_eq!(mid.g, 127);
        assert_eq!(mid.b, 255);

        // Halfway between yellow and red: green channel halfway down
        let warm = entropy_to_rgb(0.875);
        assert_eq!(warm.r, 255);
        assert_eq!(warm.g, 127);
        assert_eq!(warm.b, 0);
    }

    #[test]
    fn test_truncation_not_rounding() {
        // t = 0.999 between green and yellow: 255 * 0.999 = 254.745 -> 254
        let c = entropy_to_rgb(0.5 + 0.25 * 0.999);
        assert_eq!(c.r, 254);
    }
}

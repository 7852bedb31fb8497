//! Scalar color distance between two RGB triples.

use image::Rgba;

/// An RGB triple as used for histogram keys and detection results.
/// Alpha never participates in color equality or distance.
pub type Rgb = [u8; 3];

pub const BLACK: Rgb = [0, 0, 0];
pub const WHITE: Rgb = [255, 255, 255];

/// Strips the alpha channel off an RGBA pixel.
#[inline]
pub fn rgb_of(pixel: &Rgba<u8>) -> Rgb {
    [pixel[0], pixel[1], pixel[2]]
}

/// Mean of the per-channel absolute differences, rounded to nearest.
///
/// Symmetric, zero iff both triples are equal, and bounded by 255.
/// The channel-delta sum is at most 765 and its mean has a fractional part
/// of 0, 1/3 or 2/3 — an exact .5 tie is unreachable — so the integer form
/// `(sum + 1) / 3` is round-to-nearest for every input.
#[inline]
pub fn diff(a: Rgb, b: Rgb) -> u8 {
    let sum = a[0].abs_diff(b[0]) as u16 + a[1].abs_diff(b[1]) as u16 + a[2].abs_diff(b[2]) as u16;
    ((sum + 1) / 3) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_zero_for_equal_colors() {
        for value in [0u8, 1, 10, 127, 128, 254, 255] {
            let color = [value, value.wrapping_add(3), value.wrapping_mul(7)];
            assert_eq!(diff(color, color), 0);
        }
    }

    #[test]
    fn test_diff_symmetric() {
        let pairs = [
            ([0, 0, 0], [255, 255, 255]),
            ([10, 20, 30], [30, 20, 10]),
            ([1, 2, 3], [200, 100, 50]),
            ([255, 0, 128], [0, 255, 127]),
        ];
        for (a, b) in pairs {
            assert_eq!(diff(a, b), diff(b, a));
        }
    }

    #[test]
    fn test_diff_extremes() {
        assert_eq!(diff(BLACK, WHITE), 255);
        assert_eq!(diff(BLACK, BLACK), 0);
        assert_eq!(diff(WHITE, WHITE), 0);
    }

    /// The integer form must agree with the floating-point reference
    /// `round(sum / 3)` for every reachable channel-delta sum.
    #[test]
    fn test_diff_rounds_to_nearest() {
        for delta in 0u16..=765 {
            // Spread the delta over the three channels so each stays in range.
            let r = delta.min(255) as u8;
            let g = delta.saturating_sub(255).min(255) as u8;
            let b = delta.saturating_sub(510).min(255) as u8;
            let expected = (delta as f64 / 3.0).round() as u8;
            assert_eq!(diff([r, g, b], BLACK), expected, "sum {delta}");
        }
    }

    /// A single-channel delta of 1 rounds down (1/3), of 2 rounds up (2/3).
    #[test]
    fn test_diff_fractional_boundaries() {
        assert_eq!(diff([1, 0, 0], BLACK), 0);
        assert_eq!(diff([0, 2, 0], BLACK), 1);
        assert_eq!(diff([1, 1, 0], BLACK), 1);
        assert_eq!(diff([1, 1, 1], BLACK), 1);
        assert_eq!(diff([2, 1, 1], BLACK), 1);
        assert_eq!(diff([2, 2, 1], BLACK), 2);
    }

    #[test]
    fn test_rgb_of_drops_alpha() {
        assert_eq!(rgb_of(&Rgba([1, 2, 3, 77])), [1, 2, 3]);
        assert_eq!(rgb_of(&Rgba([1, 2, 3, 0])), rgb_of(&Rgba([1, 2, 3, 255])));
    }
}

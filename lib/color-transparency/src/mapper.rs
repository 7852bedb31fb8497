//! Per-pixel alpha rewrite toward a kept color.

use crate::color::{self, Rgb};
use crate::detector::Detection;
use crate::{Error, Result};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgba, RgbaImage};

/// Fixed color pair for the mapping step. The default keeps pure black over
/// a white reference, which skips detection entirely.
#[derive(Debug, Clone, Copy, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct KeepColorConfig {
    /// Color that stays fully opaque.
    #[derivative(Default(value = "crate::color::BLACK"))]
    pub main_color: Rgb,
    /// Reference color mapped to full transparency.
    #[derivative(Default(value = "crate::color::WHITE"))]
    pub most_different: Rgb,
}

impl KeepColorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_detection(detection: Detection) -> Self {
        Self {
            main_color: detection.main_color,
            most_different: detection.most_different,
        }
    }

    pub fn apply(&self, image: &RgbaImage) -> Result<RgbaImage> {
        make_transparent(image, self.main_color, self.most_different)
    }
}

/// Recolors the whole image to `main_color`, with per-pixel alpha falling
/// off linearly from 255 (a pixel equal to `main_color`) to 0 (a pixel at
/// `most_different`'s distance or beyond).
///
/// Returns a freshly allocated grid of identical dimensions; the input is
/// never modified. Fails with [`Error::DegenerateImage`] when the two
/// colors coincide, since no distance scale exists then.
pub fn make_transparent(
    image: &RgbaImage,
    main_color: Rgb,
    most_different: Rgb,
) -> Result<RgbaImage> {
    let max_diff = color::diff(main_color, most_different) as i32;
    if max_diff == 0 {
        return Err(Error::DegenerateImage(main_color));
    }

    let (width, height) = image.dimensions();
    let mut result = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let pixel = image.get_pixel(x, y);
            let pixel_diff = color::diff(main_color, color::rgb_of(pixel)) as i32;

            // Alpha ranges 0-255, with the most different color scoring 0.
            // Pixels even farther away than `most_different` would push the
            // raw value negative, so clamp before narrowing.
            let alpha = ((max_diff - pixel_diff) * 255 / max_diff).clamp(0, 255) as u8;

            result.put_pixel(
                x,
                y,
                Rgba([main_color[0], main_color[1], main_color[2], alpha]),
            );
        }
    }

    Ok(result)
}

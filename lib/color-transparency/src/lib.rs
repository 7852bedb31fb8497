//! Turn an image's dominant background color into a transparency gradient.
//!
//! A detection pass picks a "main" color from the pixel histogram under one
//! of four strategies, finds the observed color most different from it, and
//! the mapping pass recolors the whole image to the main color with alpha
//! falling off by distance: matching pixels stay opaque, the most different
//! color goes fully transparent, everything between blends proportionally.

pub mod color;
pub mod detector;
pub mod histogram;
pub mod mapper;

pub use detector::{Detection, MainColorStrategy, detect_main_color};
pub use histogram::ColorHistogram;
pub use mapper::{KeepColorConfig, make_transparent};

use image::RgbaImage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Main color and most different color are both {0:?}: no distance scale")]
    DegenerateImage(color::Rgb),

    #[error("Unknown main color strategy: {0}")]
    UnknownStrategy(String),
}

/// Detects the main color with `strategy`, then recolors the image to it
/// with per-pixel alpha by distance. The composition of
/// [`detect_main_color`] and [`make_transparent`].
pub fn fix_transparency(image: &RgbaImage, strategy: MainColorStrategy) -> Result<RgbaImage> {
    log::info!("Transform image with strategy {strategy}");

    let detection = detect_main_color(image, strategy)?;
    log::info!(
        "Main color detected: {:?}. Most different color: {:?}",
        detection.main_color,
        detection.most_different
    );

    make_transparent(image, detection.main_color, detection.most_different)
}

/// Keeps pure black opaque and fades toward white to transparent, skipping
/// detection entirely.
pub fn keep_black(image: &RgbaImage) -> Result<RgbaImage> {
    KeepColorConfig::new().apply(image)
}

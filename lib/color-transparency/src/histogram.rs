//! Color-frequency histogram over a pixel grid.

use crate::color::{self, Rgb};
use image::RgbaImage;
use std::collections::{HashMap, hash_map::Entry};

/// Occurrence counts per distinct RGB triple of an image, with the
/// first-encounter order retained so rankings are deterministic.
#[derive(Debug, Clone)]
pub struct ColorHistogram {
    counts: HashMap<Rgb, u32>,
    order: Vec<Rgb>,
}

impl ColorHistogram {
    /// Counts every pixel of the image in a single row-major pass.
    pub fn from_image(image: &RgbaImage) -> Self {
        let mut counts = HashMap::new();
        let mut order = Vec::new();

        for pixel in image.pixels() {
            let rgb = color::rgb_of(pixel);
            match counts.entry(rgb) {
                Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                Entry::Vacant(entry) => {
                    entry.insert(1);
                    order.push(rgb);
                }
            }
        }

        Self { counts, order }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of distinct colors.
    pub fn distinct_len(&self) -> usize {
        self.order.len()
    }

    pub fn count(&self, color: Rgb) -> u32 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Total number of counted pixels; equals width * height of the source.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&count| count as u64).sum()
    }

    /// Distinct colors sorted by descending count. The sort is stable over
    /// first-encounter order, so equal counts keep the earliest color first.
    pub fn ranked(&self) -> Vec<Rgb> {
        let mut ranked = self.order.clone();
        ranked.sort_by_key(|rgb| std::cmp::Reverse(self.counts[rgb]));
        ranked
    }
}

//! Main-color selection over the histogram, under four strategies.

use crate::color::{self, Rgb};
use crate::histogram::ColorHistogram;
use crate::{Error, Result};
use image::RgbaImage;
use std::{fmt, str::FromStr};

/// Policy for picking the "main" (assumed background) color of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainColorStrategy {
    /// The most frequent color.
    MostUsed,
    /// The second most frequent color, falling back to the most frequent
    /// when the image holds a single distinct color.
    SecondMostUsed,
    /// The color farthest from the most frequent one.
    MostDifferentFromMostUsed,
    /// The most frequent color that is also far from the most frequent one
    /// (more than half the maximum observed distance).
    DifferentAndWellUsed,
}

impl MainColorStrategy {
    pub const ALL: [MainColorStrategy; 4] = [
        MainColorStrategy::MostUsed,
        MainColorStrategy::SecondMostUsed,
        MainColorStrategy::MostDifferentFromMostUsed,
        MainColorStrategy::DifferentAndWellUsed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MainColorStrategy::MostUsed => "most-used",
            MainColorStrategy::SecondMostUsed => "second-most-used",
            MainColorStrategy::MostDifferentFromMostUsed => "most-different-from-most-used",
            MainColorStrategy::DifferentAndWellUsed => "different-and-well-used",
        }
    }
}

impl fmt::Display for MainColorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MainColorStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MainColorStrategy::ALL
            .into_iter()
            .find(|strategy| s.eq_ignore_ascii_case(strategy.as_str()))
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

/// The pair a strategy run resolves to: the color to keep opaque and the
/// observed color farthest from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub main_color: Rgb,
    pub most_different: Rgb,
}

/// Builds the histogram in one pass and resolves `strategy` against it.
///
/// The returned `most_different` is always searched over all distinct
/// colors, anchored at the final main color. Fails with
/// [`Error::EmptyImage`] on a zero-dimension grid.
pub fn detect_main_color(image: &RgbaImage, strategy: MainColorStrategy) -> Result<Detection> {
    let histogram = ColorHistogram::from_image(image);
    let ranked = histogram.ranked();

    let main_color = match strategy {
        MainColorStrategy::MostUsed => *ranked.first().ok_or(Error::EmptyImage)?,
        MainColorStrategy::SecondMostUsed => *ranked
            .get(1)
            .or_else(|| ranked.first())
            .ok_or(Error::EmptyImage)?,
        MainColorStrategy::MostDifferentFromMostUsed => {
            let most_used = *ranked.first().ok_or(Error::EmptyImage)?;
            find_most_different(most_used, &ranked)?
        }
        MainColorStrategy::DifferentAndWellUsed => find_different_and_well_used(&ranked)?,
    };

    let most_different = find_most_different(main_color, &ranked)?;

    Ok(Detection {
        main_color,
        most_different,
    })
}

/// The candidate maximizing `diff(anchor, _)`. The running best starts from
/// the first candidate and only a strictly larger distance replaces it, so
/// ties keep the earliest candidate.
fn find_most_different(anchor: Rgb, candidates: &[Rgb]) -> Result<Rgb> {
    let (first, rest) = candidates.split_first().ok_or(Error::EmptyImage)?;

    let mut best = *first;
    let mut best_diff = color::diff(anchor, best);

    for &candidate in rest {
        let candidate_diff = color::diff(anchor, candidate);
        if candidate_diff > best_diff {
            best = candidate;
            best_diff = candidate_diff;
        }
    }

    Ok(best)
}

/// First color in descending-count order whose distance from the most used
/// color exceeds half the maximum observed distance; falls back to the most
/// different color when nothing qualifies.
fn find_different_and_well_used(ranked: &[Rgb]) -> Result<Rgb> {
    let most_used = *ranked.first().ok_or(Error::EmptyImage)?;
    let most_different = find_most_different(most_used, ranked)?;
    let max_diff = color::diff(most_used, most_different);

    for &candidate in ranked {
        if color::diff(candidate, most_used) > max_diff / 2 {
            return Ok(candidate);
        }
    }

    Ok(most_different)
}

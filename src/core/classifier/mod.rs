//! # Classifier Module
//!
//! Computes HSV color-category percentages for an image.
//!
//! The image is downsampled to a small fixed raster (default 100x100) and
//! every pixel is bucketed into one of three categories:
//! - **white/grey** - bright, desaturated pixels (message background)
//! - **blue/green** - the iMessage send/receive bubble hue bands
//! - **other** - everything else that isn't near-black
//!
//! Percentages are computed against the fixed raster, so they are
//! independent of the original image resolution.

mod hsv;
mod resize;

pub use hsv::rgb_to_hsv;
pub use resize::{resize_to_rgb, FastResizer};

use crate::error::ClassifyError;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// White/grey pixels: low saturation, high brightness.
pub const WHITE_GREY_MAX_SATURATION: u8 = 40;
pub const WHITE_GREY_MIN_VALUE: u8 = 200;

/// Blue and green hue bands (half-angle convention, 0-179). The two bands
/// do not overlap, so a pixel is never counted in both.
pub const BLUE_HUE_MIN: u8 = 100;
pub const BLUE_HUE_MAX: u8 = 140;
pub const GREEN_HUE_MIN: u8 = 60;
pub const GREEN_HUE_MAX: u8 = 90;
pub const BUBBLE_MIN_SATURATION: u8 = 50;

/// Pixels darker than this are near-black and counted in no category.
pub const OTHER_MIN_VALUE: u8 = 40;

/// Fixed raster the percentages are computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    /// A square target with the given edge length
    pub const fn square(edge: u32) -> Self {
        Self {
            width: edge,
            height: edge,
        }
    }

    /// Total pixel count of the raster
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        Self::square(100)
    }
}

/// Color-category percentages for one image, each in [0, 100].
///
/// The three values need not sum to 100: near-black pixels fall outside
/// every category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorProfile {
    /// Percentage of bright, desaturated pixels
    pub white_grey: f64,
    /// Percentage of pixels in the blue or green bubble hue bands
    pub blue_green: f64,
    /// Percentage of remaining pixels that are not near-black
    pub other: f64,
}

/// Classify the colors of an image.
///
/// Downsamples to `target`, converts to HSV and computes the category
/// percentages. Pure function of the image and target size; only resize
/// failures propagate.
pub fn classify_colors(
    image: &DynamicImage,
    target: TargetSize,
) -> Result<ColorProfile, ClassifyError> {
    let resized = resize_to_rgb(image, target.width, target.height)?;

    let mut white_grey = 0u64;
    let mut blue = 0u64;
    let mut green = 0u64;
    let mut other = 0u64;

    for pixel in resized.pixels() {
        let (h, s, v) = rgb_to_hsv(pixel[0], pixel[1], pixel[2]);

        let is_white_grey = s < WHITE_GREY_MAX_SATURATION && v > WHITE_GREY_MIN_VALUE;
        let is_blue = (BLUE_HUE_MIN..=BLUE_HUE_MAX).contains(&h) && s > BUBBLE_MIN_SATURATION;
        let is_green = (GREEN_HUE_MIN..=GREEN_HUE_MAX).contains(&h) && s > BUBBLE_MIN_SATURATION;

        if is_white_grey {
            white_grey += 1;
        } else if is_blue {
            blue += 1;
        } else if is_green {
            green += 1;
        } else if v > OTHER_MIN_VALUE {
            other += 1;
        }
    }

    let total = target.pixel_count() as f64;

    Ok(ColorProfile {
        white_grey: white_grey as f64 / total * 100.0,
        blue_green: (blue + green) as f64 / total * 100.0,
        other: other as f64 / total * 100.0,
    })
}

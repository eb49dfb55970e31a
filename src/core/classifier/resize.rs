//! Fast SIMD-accelerated image resizing.
//!
//! Uses fast_image_resize crate which is 5-14x faster than image crate's
//! resize. Automatically uses AVX2/NEON SIMD when available. The downsample
//! deliberately ignores the source aspect ratio: percentages are computed
//! against a fixed raster, so the output is always exactly the target size.

use crate::error::ClassifyError;
use fast_image_resize::{images::Image, PixelType, ResizeOptions, Resizer};
use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};
use std::path::PathBuf;

/// Fast image resizer using SIMD acceleration
pub struct FastResizer {
    resizer: Resizer,
}

impl FastResizer {
    /// Create a new fast resizer
    pub fn new() -> Self {
        Self {
            resizer: Resizer::new(),
        }
    }

    /// Resize an image to the specified dimensions and convert to RGB.
    ///
    /// Alpha is discarded before resizing; the output raster is exactly
    /// `width` x `height` regardless of the source aspect ratio.
    pub fn resize_to_rgb(
        &mut self,
        image: &DynamicImage,
        width: u32,
        height: u32,
    ) -> Result<RgbImage, ClassifyError> {
        let rgb = image.to_rgb8();

        let src_width = rgb.width();
        let src_height = rgb.height();

        if src_width == 0 || src_height == 0 {
            return Err(ClassifyError::ResizeError {
                path: PathBuf::new(),
                reason: "Invalid source dimensions".to_string(),
            });
        }

        if width == 0 || height == 0 {
            return Err(ClassifyError::ResizeError {
                path: PathBuf::new(),
                reason: "Invalid destination dimensions".to_string(),
            });
        }

        // Create source image
        let src_image = Image::from_vec_u8(src_width, src_height, rgb.into_raw(), PixelType::U8x3)
            .map_err(|e| ClassifyError::ResizeError {
                path: PathBuf::new(),
                reason: format!("Failed to create source image: {}", e),
            })?;

        // Create destination image
        let mut dst_image = Image::new(width, height, PixelType::U8x3);

        // Bilinear convolution: deterministic, and the thresholds were tuned
        // against an interpolating filter of this class.
        let options = ResizeOptions::new().resize_alg(fast_image_resize::ResizeAlg::Convolution(
            fast_image_resize::FilterType::Bilinear,
        ));

        self.resizer
            .resize(&src_image, &mut dst_image, &options)
            .map_err(|e| ClassifyError::ResizeError {
                path: PathBuf::new(),
                reason: format!("Resize failed: {}", e),
            })?;

        // Convert back to image crate format
        let result_buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_raw(width, height, dst_image.into_vec()).ok_or_else(|| {
                ClassifyError::ResizeError {
                    path: PathBuf::new(),
                    reason: "Failed to create result buffer".to_string(),
                }
            })?;

        Ok(result_buffer)
    }
}

impl Default for FastResizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function for one-off resizing
pub fn resize_to_rgb(
    image: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<RgbImage, ClassifyError> {
    let mut resizer = FastResizer::new();
    resizer.resize_to_rgb(image, width, height)
}

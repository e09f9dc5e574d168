//! Fixed-size Lanczos resampling of the square digit.

use crate::image::GrayBuffer;
use image::imageops::{self, FilterType};
use image::GrayImage;

/// Resample a square buffer to `size × size` with a Lanczos3 filter.
///
/// The target is the digit sub-canvas (20×20 under the canonical frame), not
/// the full canvas; the surrounding margin is added by the paste stage.
pub fn resample_to(buffer: &GrayBuffer, size: usize) -> GrayBuffer {
    let src = GrayImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.as_slice().to_vec(),
    )
    .expect("buffer length matches dimensions");
    let resized = imageops::resize(&src, size as u32, size as u32, FilterType::Lanczos3);
    GrayBuffer::new(size, size, resized.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::{BACKGROUND, INK};

    #[test]
    fn constant_image_stays_constant() {
        let buffer = GrayBuffer::filled(3, 3, INK);
        let out = resample_to(&buffer, 20);
        assert_eq!((out.width(), out.height()), (20, 20));
        assert!(out.as_slice().iter().all(|&px| px == INK));

        let blank = GrayBuffer::filled(50, 50, BACKGROUND);
        let out = resample_to(&blank, 20);
        assert!(out.as_slice().iter().all(|&px| px == BACKGROUND));
    }

    #[test]
    fn single_pixel_upsamples_without_panic() {
        let buffer = GrayBuffer::filled(1, 1, INK);
        let out = resample_to(&buffer, 20);
        assert_eq!(out.as_slice().len(), 400);
        assert!(out.as_slice().iter().all(|&px| px == INK));
    }

    #[test]
    fn downsampling_mixes_edge_intensities() {
        // Left half ink, right half background: the resampled row must keep
        // dark values on the left and light values on the right.
        let mut buffer = GrayBuffer::filled(40, 40, BACKGROUND);
        for y in 0..40 {
            for x in 0..20 {
                buffer.set(x, y, INK);
            }
        }
        let out = resample_to(&buffer, 20);
        assert!(out.get(1, 10) < 64, "left side should stay dark");
        assert!(out.get(18, 10) > 192, "right side should stay light");
    }
}

//! Hard-threshold binarization into {ink, background}.

use super::{BACKGROUND, INK};
use crate::image::GrayBuffer;

/// Threshold a grayscale buffer: intensities strictly below `threshold`
/// become [`INK`] (0), everything else [`BACKGROUND`] (255).
///
/// The cutoff is fixed, not adaptive; the classifier's training convention
/// pins it.
pub fn binarize(gray: &GrayBuffer, threshold: u8) -> GrayBuffer {
    let data = gray
        .as_slice()
        .iter()
        .map(|&px| if px < threshold { INK } else { BACKGROUND })
        .collect();
    GrayBuffer::new(gray.width(), gray.height(), data)
}

/// Count of ink pixels in a binarized buffer.
pub fn ink_count(binary: &GrayBuffer) -> usize {
    binary.as_slice().iter().filter(|&&px| px < BACKGROUND).count()
}

//! Parameters fixing the canonical frame convention.
//!
//! The defaults (threshold 128, 20×20 digit inside a 28×28 canvas) are the
//! external contract of the paired classifier's training corpus. They are
//! surfaced as fields so the convention is named once, but changing them only
//! makes sense together with a classifier trained on the matching frame.

use serde::Deserialize;

/// Pipeline parameters. `Default` gives the canonical convention.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NormalizerParams {
    /// Intensities strictly below this become ink during binarization.
    pub ink_threshold: u8,
    /// Side of the square the cropped digit is resampled to.
    pub digit_size: usize,
    /// Side of the final canvas the digit is pasted onto.
    pub canvas_size: usize,
}

impl Default for NormalizerParams {
    fn default() -> Self {
        Self {
            ink_threshold: 128,
            digit_size: 20,
            canvas_size: 28,
        }
    }
}

impl NormalizerParams {
    /// Margin left on each side when the digit is pasted onto the canvas.
    #[inline]
    pub fn margin(&self) -> usize {
        (self.canvas_size - self.digit_size) / 2
    }

    /// Length of the flattened output vector.
    #[inline]
    pub fn vector_len(&self) -> usize {
        self.canvas_size * self.canvas_size
    }
}

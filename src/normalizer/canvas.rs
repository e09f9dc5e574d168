//! Pasting the resampled digit onto the fixed output canvas.

use super::BACKGROUND;
use crate::image::GrayBuffer;

/// Paste `digit` onto a background-filled `canvas_size × canvas_size` canvas
/// at the centering offset `(margin, margin)`.
///
/// With the canonical 20-in-28 convention the margin is 4 on every side,
/// regardless of the original digit shape.
pub fn paste_centered(digit: &GrayBuffer, canvas_size: usize, margin: usize) -> GrayBuffer {
    let mut canvas = GrayBuffer::filled(canvas_size, canvas_size, BACKGROUND);
    for y in 0..digit.height() {
        canvas.row_mut(margin + y)[margin..margin + digit.width()].copy_from_slice(digit.row(y));
    }
    canvas
}

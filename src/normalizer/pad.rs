//! Aspect-equalizing background padding.
//!
//! A digit much taller than wide (a drawn "1") must not be stretched square
//! by the resampler; instead the shorter axis is padded with background
//! before the fixed-size resample.

use super::BACKGROUND;
use crate::image::GrayBuffer;
use serde::Serialize;

/// Which axis received padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PadAxis {
    /// Already square, nothing added.
    None,
    /// Rows added above/below (input wider than tall).
    Rows,
    /// Columns added left/right (input taller than wide).
    Columns,
}

/// How a buffer was brought to a square shape.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SquarePad {
    pub axis: PadAxis,
    /// Pixels added on the leading side (top or left).
    pub leading: usize,
    /// Pixels added on the trailing side (bottom or right).
    pub trailing: usize,
    /// Side length of the resulting square.
    pub size: usize,
}

/// Pad the shorter axis with background so the buffer becomes square.
///
/// The pad amount is split floor/ceil; the odd remainder pixel goes to the
/// trailing (bottom/right) side.
pub fn pad_to_square(buffer: GrayBuffer) -> (GrayBuffer, SquarePad) {
    let (w, h) = (buffer.width(), buffer.height());
    if h > w {
        let leading = (h - w) / 2;
        let trailing = h - w - leading;
        let padded = pad_columns(&buffer, leading, trailing);
        (
            padded,
            SquarePad {
                axis: PadAxis::Columns,
                leading,
                trailing,
                size: h,
            },
        )
    } else if w > h {
        let leading = (w - h) / 2;
        let trailing = w - h - leading;
        let padded = pad_rows(&buffer, leading, trailing);
        (
            padded,
            SquarePad {
                axis: PadAxis::Rows,
                leading,
                trailing,
                size: w,
            },
        )
    } else {
        let size = w;
        (
            buffer,
            SquarePad {
                axis: PadAxis::None,
                leading: 0,
                trailing: 0,
                size,
            },
        )
    }
}

fn pad_columns(buffer: &GrayBuffer, left: usize, right: usize) -> GrayBuffer {
    let w = buffer.width() + left + right;
    let mut out = GrayBuffer::filled(w, buffer.height(), BACKGROUND);
    for y in 0..buffer.height() {
        out.row_mut(y)[left..left + buffer.width()].copy_from_slice(buffer.row(y));
    }
    out
}

fn pad_rows(buffer: &GrayBuffer, top: usize, bottom: usize) -> GrayBuffer {
    let h = buffer.height() + top + bottom;
    let mut out = GrayBuffer::filled(buffer.width(), h, BACKGROUND);
    for y in 0..buffer.height() {
        out.row_mut(top + y).copy_from_slice(buffer.row(y));
    }
    out
}

//! Ink bounding box and tight crop.

use super::BACKGROUND;
use crate::image::GrayBuffer;

/// Inclusive pixel extents of all ink in a binarized buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InkBounds {
    pub y0: usize,
    pub x0: usize,
    pub y1: usize,
    pub x1: usize,
}

impl InkBounds {
    #[inline]
    pub fn width(&self) -> usize {
        self.x1 - self.x0 + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.y1 - self.y0 + 1
    }
}

/// Locate the inclusive bounding box of all ink pixels (value < background).
///
/// Returns `None` for a blank buffer; the caller keeps the full matrix
/// unchanged in that case.
pub fn ink_bounds(binary: &GrayBuffer) -> Option<InkBounds> {
    let mut bounds: Option<InkBounds> = None;
    for (y, row) in binary.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            if px >= BACKGROUND {
                continue;
            }
            bounds = Some(match bounds {
                None => InkBounds {
                    y0: y,
                    x0: x,
                    y1: y,
                    x1: x,
                },
                Some(b) => InkBounds {
                    y0: b.y0.min(y),
                    x0: b.x0.min(x),
                    y1: b.y1.max(y),
                    x1: b.x1.max(x),
                },
            });
        }
    }
    bounds
}

/// Crop a buffer to the given inclusive bounds.
pub fn crop(binary: &GrayBuffer, bounds: InkBounds) -> GrayBuffer {
    let w = bounds.width();
    let h = bounds.height();
    let mut data = Vec::with_capacity(w * h);
    for y in bounds.y0..=bounds.y1 {
        data.extend_from_slice(&binary.row(y)[bounds.x0..=bounds.x1]);
    }
    GrayBuffer::new(w, h, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::INK;

    fn buffer_with_ink(w: usize, h: usize, ink: &[(usize, usize)]) -> GrayBuffer {
        let mut buf = GrayBuffer::filled(w, h, BACKGROUND);
        for &(x, y) in ink {
            buf.set(x, y, INK);
        }
        buf
    }

    #[test]
    fn blank_buffer_has_no_bounds() {
        let buf = GrayBuffer::filled(5, 4, BACKGROUND);
        assert_eq!(ink_bounds(&buf), None);
    }

    #[test]
    fn bounds_are_inclusive() {
        let buf = buffer_with_ink(6, 5, &[(1, 2), (4, 3)]);
        let bounds = ink_bounds(&buf).expect("ink present");
        assert_eq!(
            bounds,
            InkBounds {
                y0: 2,
                x0: 1,
                y1: 3,
                x1: 4
            }
        );
        assert_eq!(bounds.width(), 4);
        assert_eq!(bounds.height(), 2);
    }

    #[test]
    fn single_pixel_crops_to_one_by_one() {
        let buf = buffer_with_ink(7, 7, &[(3, 5)]);
        let bounds = ink_bounds(&buf).expect("ink present");
        let cropped = crop(&buf, bounds);
        assert_eq!(cropped.width(), 1);
        assert_eq!(cropped.height(), 1);
        assert_eq!(cropped.get(0, 0), INK);
    }

    #[test]
    fn crop_keeps_interior_pixels() {
        let buf = buffer_with_ink(6, 6, &[(2, 1), (3, 1), (2, 4)]);
        let bounds = ink_bounds(&buf).expect("ink present");
        let cropped = crop(&buf, bounds);
        assert_eq!(cropped.width(), 2);
        assert_eq!(cropped.height(), 4);
        assert_eq!(cropped.get(0, 0), INK);
        assert_eq!(cropped.get(1, 0), INK);
        assert_eq!(cropped.get(0, 3), INK);
        assert_eq!(cropped.get(1, 3), BACKGROUND);
    }
}

//! Polarity inversion and mass-centered re-registration.
//!
//! Classifiers trained on the canonical corpus see ink as high values on a
//! zero background, with the digit's *mass* (not its bounding box) centered
//! in the frame. Bounding-box-centered input measurably degrades such
//! models, so the final canvas is shifted until the intensity-weighted
//! centroid lands on the canvas center.

use crate::image::{FloatGrid, GrayBuffer};
use crate::types::CentroidShift;
use nalgebra::Vector2;

/// Convert a [0, 255] background-is-white buffer to floats via
/// `v = 1.0 − pixel/255.0`, so ink is ~1.0 and background exactly 0.0.
pub fn invert_normalize(buffer: &GrayBuffer) -> FloatGrid {
    let mut grid = FloatGrid::new(buffer.width(), buffer.height());
    for y in 0..buffer.height() {
        let src = buffer.row(y);
        for (x, &px) in src.iter().enumerate() {
            grid.set(x, y, 1.0 - px as f32 / 255.0);
        }
    }
    grid
}

/// Intensity-weighted center of mass of a grid, as `(cx, cy)`.
///
/// Returns `None` when the total mass is zero (all background) or either
/// coordinate comes out non-finite: the deterministic "no centering"
/// branch, instead of letting NaN propagate through the shift.
pub fn center_of_mass(grid: &FloatGrid) -> Option<Vector2<f32>> {
    let mut mass = 0.0f32;
    let mut weighted = Vector2::zeros();
    for y in 0..grid.height() {
        let row = grid.row(y);
        for (x, &v) in row.iter().enumerate() {
            mass += v;
            weighted += v * Vector2::new(x as f32, y as f32);
        }
    }
    if mass <= 0.0 {
        return None;
    }
    let com = weighted / mass;
    (com.x.is_finite() && com.y.is_finite()).then_some(com)
}

/// Integer shift moving `com` onto the canvas center pixel.
pub fn centroid_shift(com: Vector2<f32>, canvas_size: usize) -> CentroidShift {
    let center = (canvas_size / 2) as f32;
    CentroidShift {
        dy: (center - com.y).round() as i32,
        dx: (center - com.x).round() as i32,
    }
}

/// Translate a grid by an integer pixel offset, filling the uncovered
/// region with zero.
///
/// The shift is integral by construction, so the order-1 interpolated
/// translation of the reference convention lands exactly on the lattice and
/// reduces to a plain copy.
pub fn translate(grid: &FloatGrid, shift: CentroidShift) -> FloatGrid {
    let (w, h) = (grid.width(), grid.height());
    let mut out = FloatGrid::new(w, h);
    for y in 0..h {
        let sy = y as i64 - shift.dy as i64;
        if sy < 0 || sy >= h as i64 {
            continue;
        }
        let src = grid.row(sy as usize);
        for x in 0..w {
            let sx = x as i64 - shift.dx as i64;
            if sx < 0 || sx >= w as i64 {
                continue;
            }
            out.set(x, y, src[sx as usize]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::{BACKGROUND, INK};

    #[test]
    fn inversion_maps_polarity() {
        let buffer = GrayBuffer::new(3, 1, vec![INK, 128, BACKGROUND]);
        let grid = invert_normalize(&buffer);
        assert_eq!(grid.get(0, 0), 1.0);
        assert!((grid.get(1, 0) - (1.0 - 128.0 / 255.0)).abs() < 1e-6);
        assert_eq!(grid.get(2, 0), 0.0);
    }

    #[test]
    fn zero_mass_has_no_centroid() {
        let grid = FloatGrid::new(6, 6);
        assert!(center_of_mass(&grid).is_none());
    }

    #[test]
    fn single_mass_point_is_its_own_centroid() {
        let mut grid = FloatGrid::new(9, 9);
        grid.set(2, 6, 1.0);
        let com = center_of_mass(&grid).expect("mass present");
        assert!((com.x - 2.0).abs() < 1e-6, "cx = {}", com.x);
        assert!((com.y - 6.0).abs() < 1e-6, "cy = {}", com.y);
    }

    #[test]
    fn uniform_mass_centroid_is_grid_center() {
        let mut grid = FloatGrid::new(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                grid.set(x, y, 0.5);
            }
        }
        let com = center_of_mass(&grid).expect("mass present");
        assert!((com.x - 2.0).abs() < 1e-6);
        assert!((com.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn shift_moves_centroid_toward_center() {
        let mut grid = FloatGrid::new(28, 28);
        grid.set(4, 6, 1.0);
        let com = center_of_mass(&grid).expect("mass present");
        let shift = centroid_shift(com, 28);
        assert_eq!(shift, CentroidShift { dy: 8, dx: 10 });
        let shifted = translate(&grid, shift);
        assert_eq!(shifted.get(14, 14), 1.0);
        assert_eq!(shifted.get(4, 6), 0.0);
    }

    #[test]
    fn translate_fills_uncovered_region_with_zero() {
        let mut grid = FloatGrid::new(4, 4);
        grid.set(0, 0, 1.0);
        grid.set(3, 3, 0.5);
        let shifted = translate(&grid, CentroidShift { dy: 1, dx: 1 });
        assert_eq!(shifted.get(1, 1), 1.0);
        assert_eq!(shifted.get(0, 0), 0.0);
        // content shifted past the edge is dropped
        let total: f32 = shifted.as_slice().iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn translate_out_of_frame_clears_grid() {
        let mut grid = FloatGrid::new(4, 4);
        grid.set(1, 1, 1.0);
        let shifted = translate(&grid, CentroidShift { dy: 10, dx: 0 });
        assert!(shifted.as_slice().iter().all(|&v| v == 0.0));
    }
}

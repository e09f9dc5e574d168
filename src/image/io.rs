//! I/O helpers for grayscale images and JSON.
//!
//! - `decode_grayscale`: decode encoded raster bytes into an 8-bit gray buffer.
//! - `load_grayscale_image`: read a PNG/JPEG/etc. from disk.
//! - `save_grayscale_u8` / `save_grayscale_f32`: write debug PNGs.
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::{FloatGrid, GrayBuffer};
use crate::error::DecodeError;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Decode encoded image bytes (PNG, JPEG, ...) into 8-bit grayscale.
pub fn decode_grayscale(bytes: &[u8]) -> Result<GrayBuffer, DecodeError> {
    let img = image::load_from_memory(bytes)?.into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayBuffer::new(width, height, img.into_raw()))
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayBuffer::new(width, height, img.into_raw()))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let img = GrayImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.as_slice().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    img.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a float grid to a grayscale PNG, mapping [0, 1] to [0, 255].
///
/// A normalized canvas saved this way renders ink as white on black, the
/// same polarity the classifier sees.
pub fn save_grayscale_f32(grid: &FloatGrid, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(grid.width() as u32, grid.height() as u32);
    for y in 0..grid.height() {
        let row = grid.row(y);
        for (x, &px) in row.iter().enumerate() {
            let v = (px * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

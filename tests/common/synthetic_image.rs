use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::GrayImage;
use std::io::Cursor;

/// Generates an all-background (pure white) canvas.
pub fn blank_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![255u8; width * height]
}

/// Generates a white canvas with a black axis-aligned rectangle, inclusive
/// pixel ranges.
pub fn stroke_u8(
    width: usize,
    height: usize,
    x_range: (usize, usize),
    y_range: (usize, usize),
) -> Vec<u8> {
    let mut img = blank_u8(width, height);
    for y in y_range.0..=y_range.1 {
        for x in x_range.0..=x_range.1 {
            img[y * width + x] = 0;
        }
    }
    img
}

/// PNG-encode a row-major grayscale buffer.
pub fn encode_png(width: usize, height: usize, pixels: Vec<u8>) -> Vec<u8> {
    let img = GrayImage::from_raw(width as u32, height as u32, pixels)
        .expect("pixel buffer matches dimensions");
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("in-memory PNG encoding succeeds");
    bytes
}

/// Bare base64 payload for a grayscale image.
pub fn base64_payload(width: usize, height: usize, pixels: Vec<u8>) -> String {
    STANDARD.encode(encode_png(width, height, pixels))
}

/// Same payload wrapped in a browser-style data-URI header.
pub fn data_uri_payload(width: usize, height: usize, pixels: Vec<u8>) -> String {
    format!(
        "data:image/png;base64,{}",
        base64_payload(width, height, pixels)
    )
}

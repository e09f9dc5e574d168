use thiserror::Error;

/// The only hard failure in the pipeline: the payload could not be turned
/// into a grayscale raster. Everything downstream of decoding falls back to
/// deterministic no-op policies instead of erroring.
///
/// A failed decode is terminal for that input: the transform is pure, so a
/// retry with the same bytes fails identically.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload body is not valid standard-alphabet base64.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not a decodable raster image.
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}

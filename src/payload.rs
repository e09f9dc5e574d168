//! Payload handling: data-URI header stripping and base64 decoding.
//!
//! Browser canvases export drawings as `data:image/png;base64,<body>`; other
//! clients send the bare base64 body. Both forms are accepted.

use crate::error::DecodeError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Strip an optional metadata header from a payload.
///
/// Everything up to and including the first `,` is discarded; a payload
/// without a delimiter is returned unchanged. Idempotent on well-formed
/// data-URIs, whose base64 body never contains a comma.
pub fn strip_header(payload: &str) -> &str {
    match payload.split_once(',') {
        Some((_, body)) => body,
        None => payload,
    }
}

/// Strip the header and decode the base64 body into raw encoded-image bytes.
///
/// Decoding is strict: bytes outside the standard base64 alphabet are a
/// [`DecodeError`], not silently skipped.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>, DecodeError> {
    let body = strip_header(payload);
    Ok(STANDARD.decode(body)?)
}

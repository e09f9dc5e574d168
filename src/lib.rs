#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod normalizer;
pub mod types;

// Lower-level building blocks – still public so tools can run or inspect
// individual stages, but considered unstable internals.
pub mod image;
pub mod payload;

// --- High-level re-exports -------------------------------------------------

// Main entry points: normalizer + results.
pub use crate::error::DecodeError;
pub use crate::normalizer::{Normalizer, NormalizerParams};
pub use crate::types::{CentroidShift, NormalizeResult};

// Per-stage trace returned by the diagnostics entry point.
pub use crate::diagnostics::{NormalizeReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use digit_normalizer::prelude::*;
///
/// let normalizer = Normalizer::new(NormalizerParams::default());
/// let err = normalizer.normalize("definitely not base64 ###");
/// assert!(matches!(err, Err(DecodeError::Base64(_))));
/// ```
pub mod prelude {
    pub use crate::{DecodeError, NormalizeResult, Normalizer, NormalizerParams};
}

//! Structured per-stage diagnostics for one pipeline invocation.
//!
//! Every stage records what it saw and what it decided (ink counts, crop
//! bounds, pad split, centroid, applied shift) plus its wall-clock cost.
//! The full report serializes to JSON for offline inspection.

use crate::normalizer::{InkBounds, SquarePad};
use crate::types::{CentroidShift, NormalizeResult};
use serde::Serialize;

/// Dimensions of the decoded input image.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct BinarizeStage {
    pub threshold: u8,
    pub ink_pixels: usize,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct CropStage {
    /// Inclusive ink extents as `[y0, x0, y1, x1]`; `None` on a blank canvas.
    pub bounds: Option<[usize; 4]>,
    /// Dimensions after cropping (input dimensions when skipped).
    pub width: usize,
    pub height: usize,
    /// True when no ink was found and the full matrix was retained.
    pub skipped: bool,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ResampleStage {
    pub from_size: usize,
    pub to_size: usize,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct CenterStage {
    /// Intensity-weighted centroid as `[cy, cx]` before re-registration.
    pub centroid: Option<[f32; 2]>,
    pub shift: Option<CentroidShift>,
    /// False when centering was skipped (zero mass or non-finite centroid).
    pub applied: bool,
}

/// Wall-clock cost of each stage in milliseconds.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct TimingBreakdown {
    pub decode_ms: f64,
    pub binarize_ms: f64,
    pub crop_ms: f64,
    pub pad_ms: f64,
    pub resample_ms: f64,
    pub center_ms: f64,
    pub total_ms: f64,
}

/// Everything one invocation observed, stage by stage.
#[derive(Clone, Debug, Serialize)]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub binarize: BinarizeStage,
    pub crop: CropStage,
    pub pad: SquarePad,
    pub resample: ResampleStage,
    pub center: CenterStage,
    pub timing: TimingBreakdown,
}

/// Compact result plus the per-stage trace.
#[derive(Clone, Debug, Serialize)]
pub struct NormalizeReport {
    pub result: NormalizeResult,
    pub trace: PipelineTrace,
}

impl CropStage {
    pub(crate) fn from_bounds(bounds: Option<InkBounds>, width: usize, height: usize) -> Self {
        Self {
            bounds: bounds.map(|b| [b.y0, b.x0, b.y1, b.x1]),
            width,
            height,
            skipped: bounds.is_none(),
        }
    }
}

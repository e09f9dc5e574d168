//! Orchestrator driving the image-to-vector transform end-to-end.
//!
//! The [`Normalizer`] exposes a simple API: feed an encoded payload and get
//! back the flattened, mass-centered feature vector. Internally it runs the
//! linear stage sequence (decode, binarize, bounding-box crop, square pad,
//! Lanczos resample, canvas paste, inverted normalization, mass-centering)
//! with explicit fallback policies at every degenerate edge case.
//!
//! Typical usage:
//! ```no_run
//! use digit_normalizer::{Normalizer, NormalizerParams};
//!
//! # fn example(payload: &str) {
//! let normalizer = Normalizer::new(NormalizerParams::default());
//! match normalizer.normalize(payload) {
//!     Ok(vector) => println!("features: {}", vector.len()),
//!     Err(err) => eprintln!("bad payload: {err}"),
//! }
//! # }
//! ```

use super::bbox::{crop, ink_bounds};
use super::binarize::{binarize, ink_count};
use super::canvas::paste_centered;
use super::center::{center_of_mass, centroid_shift, invert_normalize, translate};
use super::options::NormalizerParams;
use super::pad::pad_to_square;
use super::resample::resample_to;
use crate::diagnostics::{
    BinarizeStage, CenterStage, CropStage, InputDescriptor, NormalizeReport, PipelineTrace,
    ResampleStage, TimingBreakdown,
};
use crate::error::DecodeError;
use crate::image::{io, GrayBuffer};
use crate::payload::decode_payload;
use crate::types::NormalizeResult;
use log::debug;
use std::time::Instant;

/// Stateless pipeline front end.
///
/// Every invocation allocates and discards its own intermediates; a single
/// `Normalizer` may be shared freely across call sites and threads.
pub struct Normalizer {
    params: NormalizerParams,
}

impl Normalizer {
    /// Create a normalizer with the supplied parameters.
    pub fn new(params: NormalizerParams) -> Self {
        assert!(
            params.digit_size > 0 && params.digit_size <= params.canvas_size,
            "digit size must fit inside the canvas"
        );
        Self { params }
    }

    /// Active parameters.
    pub fn params(&self) -> &NormalizerParams {
        &self.params
    }

    /// Transform an encoded payload (raw base64 or data-URI) into the
    /// flattened feature vector.
    ///
    /// # Errors
    ///
    /// [`DecodeError`] when the payload is not valid base64 or the decoded
    /// bytes are not a decodable raster image. Every downstream edge case
    /// (blank canvas, degenerate center of mass) is absorbed, not raised.
    pub fn normalize(&self, payload: &str) -> Result<Vec<f32>, DecodeError> {
        Ok(self.normalize_with_diagnostics(payload)?.result.vector)
    }

    /// Like [`normalize`](Self::normalize), with a per-stage trace.
    pub fn normalize_with_diagnostics(&self, payload: &str) -> Result<NormalizeReport, DecodeError> {
        let total_start = Instant::now();
        let bytes = decode_payload(payload)?;
        let gray = io::decode_grayscale(&bytes)?;
        let decode_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        Ok(self.run_stages(gray, decode_ms, total_start))
    }

    /// Transform raw encoded image bytes, skipping payload handling.
    pub fn normalize_bytes(&self, bytes: &[u8]) -> Result<NormalizeReport, DecodeError> {
        let total_start = Instant::now();
        let gray = io::decode_grayscale(bytes)?;
        let decode_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        Ok(self.run_stages(gray, decode_ms, total_start))
    }

    /// Run the core transform over an already-decoded grayscale buffer.
    /// Infallible: past decoding the pipeline never fails.
    pub fn normalize_gray(&self, gray: GrayBuffer) -> NormalizeReport {
        let total_start = Instant::now();
        self.run_stages(gray, 0.0, total_start)
    }

    fn run_stages(&self, gray: GrayBuffer, decode_ms: f64, total_start: Instant) -> NormalizeReport {
        let params = &self.params;
        debug!(
            "normalize start w={} h={} threshold={}",
            gray.width(),
            gray.height(),
            params.ink_threshold
        );
        let input = InputDescriptor {
            width: gray.width(),
            height: gray.height(),
        };
        let mut timing = TimingBreakdown {
            decode_ms,
            ..Default::default()
        };

        let stage_start = Instant::now();
        let binary = binarize(&gray, params.ink_threshold);
        let ink_pixels = ink_count(&binary);
        timing.binarize_ms = stage_start.elapsed().as_secs_f64() * 1000.0;
        let binarize_stage = BinarizeStage {
            threshold: params.ink_threshold,
            ink_pixels,
        };

        // Blank canvas: keep the full matrix, no crop.
        let stage_start = Instant::now();
        let bounds = ink_bounds(&binary);
        let cropped = match bounds {
            Some(b) => crop(&binary, b),
            None => binary,
        };
        timing.crop_ms = stage_start.elapsed().as_secs_f64() * 1000.0;
        let crop_stage = CropStage::from_bounds(bounds, cropped.width(), cropped.height());
        if crop_stage.skipped {
            debug!("no ink found, crop skipped");
        }

        let stage_start = Instant::now();
        let (square, pad_stage) = pad_to_square(cropped);
        timing.pad_ms = stage_start.elapsed().as_secs_f64() * 1000.0;

        let stage_start = Instant::now();
        let digit = resample_to(&square, params.digit_size);
        let canvas = paste_centered(&digit, params.canvas_size, params.margin());
        timing.resample_ms = stage_start.elapsed().as_secs_f64() * 1000.0;
        let resample_stage = ResampleStage {
            from_size: pad_stage.size,
            to_size: params.digit_size,
        };

        let stage_start = Instant::now();
        let grid = invert_normalize(&canvas);
        let com = center_of_mass(&grid);
        let (grid, shift) = match com {
            Some(c) => {
                let shift = centroid_shift(c, params.canvas_size);
                (translate(&grid, shift), Some(shift))
            }
            None => (grid, None),
        };
        timing.center_ms = stage_start.elapsed().as_secs_f64() * 1000.0;
        let center_stage = CenterStage {
            centroid: com.map(|c| [c.y, c.x]),
            shift,
            applied: shift.is_some(),
        };
        if shift.is_none() {
            debug!("degenerate center of mass, centering skipped");
        }

        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "normalize done ink={} shift={:?} total_ms={:.3}",
            ink_pixels, shift, timing.total_ms
        );

        NormalizeReport {
            result: NormalizeResult {
                vector: grid.into_flat(),
                shift,
                latency_ms: timing.total_ms,
            },
            trace: PipelineTrace {
                input,
                binarize: binarize_stage,
                crop: crop_stage,
                pad: pad_stage,
                resample: resample_stage,
                center: center_stage,
                timing,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::{BACKGROUND, INK};

    fn normalizer() -> Normalizer {
        Normalizer::new(NormalizerParams::default())
    }

    #[test]
    fn blank_buffer_yields_zero_vector_without_shift() {
        let gray = GrayBuffer::filled(50, 30, BACKGROUND);
        let report = normalizer().normalize_gray(gray);
        assert_eq!(report.result.vector.len(), 784);
        assert!(report.result.vector.iter().all(|&v| v == 0.0));
        assert_eq!(report.result.shift, None);
        assert!(report.trace.crop.skipped);
        assert!(!report.trace.center.applied);
    }

    #[test]
    fn single_ink_pixel_flows_through_all_stages() {
        let mut gray = GrayBuffer::filled(40, 40, BACKGROUND);
        gray.set(5, 7, INK);
        let report = normalizer().normalize_gray(gray);
        let trace = &report.trace;
        assert_eq!(trace.binarize.ink_pixels, 1);
        assert_eq!(trace.crop.bounds, Some([7, 5, 7, 5]));
        assert_eq!((trace.crop.width, trace.crop.height), (1, 1));
        assert_eq!(trace.pad.size, 1);
        assert!(trace.center.applied);
        // after centering the canvas center pixel carries full ink
        let v = &report.result.vector;
        assert_eq!(v.len(), 784);
        assert_eq!(v[14 * 28 + 14], 1.0);
    }

    #[test]
    fn vector_values_stay_in_unit_range() {
        let mut gray = GrayBuffer::filled(33, 17, BACKGROUND);
        for x in 3..20 {
            gray.set(x, 9, 20);
        }
        let report = normalizer().normalize_gray(gray);
        assert!(report
            .result
            .vector
            .iter()
            .all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    #[should_panic(expected = "digit size must fit inside the canvas")]
    fn oversized_digit_target_is_rejected() {
        Normalizer::new(NormalizerParams {
            digit_size: 30,
            canvas_size: 28,
            ..Default::default()
        });
    }
}

use digit_normalizer::image::GrayBuffer;
use digit_normalizer::normalizer::BACKGROUND;
use digit_normalizer::{Normalizer, NormalizerParams};

fn main() {
    // Demo stub: draws a synthetic vertical stroke and runs the pipeline
    let w = 64usize;
    let h = 64usize;
    let mut gray = GrayBuffer::filled(w, h, BACKGROUND);
    for y in 10..54 {
        for x in 30..34 {
            gray.set(x, y, 0);
        }
    }

    let normalizer = Normalizer::new(NormalizerParams::default());
    let report = normalizer.normalize_gray(gray);
    println!(
        "len={} shift={:?} latency_ms={:.3}",
        report.result.vector.len(),
        report.result.shift,
        report.result.latency_ms
    );
}

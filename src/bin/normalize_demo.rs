use digit_normalizer::config::normalize::{load_config, RuntimeConfig};
use digit_normalizer::diagnostics::NormalizeReport;
use digit_normalizer::image::io::{
    load_grayscale_image, save_grayscale_f32, save_grayscale_u8, write_json_file,
};
use digit_normalizer::image::{FloatGrid, GrayBuffer};
use digit_normalizer::normalizer::{
    binarize::binarize, canvas::paste_centered, center::invert_normalize, ink_bounds,
    pad::pad_to_square, resample::resample_to, Normalizer,
};
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "normalize_demo".to_string());
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| format!("Usage: {program} <config.json>"))?;
    let config = load_config(Path::new(&config_path))?;

    let normalizer = Normalizer::new(config.params.clone());
    let report = run_input(&normalizer, &config)?;

    print_text_summary(&report);

    if let Some(path) = &config.output.vector_json {
        write_json_file(path, &report.result.vector)?;
        println!("Vector written to {}", path.display());
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    if let Some(dir) = &config.output.debug_dir {
        save_debug_artifacts(dir, &config, &report)?;
        println!("Debug artifacts written to {}", dir.display());
    }

    Ok(())
}

fn run_input(normalizer: &Normalizer, config: &RuntimeConfig) -> Result<NormalizeReport, String> {
    if is_text_payload(&config.input) {
        let payload = fs::read_to_string(&config.input)
            .map_err(|e| format!("Failed to read {}: {e}", config.input.display()))?;
        normalizer
            .normalize_with_diagnostics(payload.trim())
            .map_err(|e| format!("Failed to normalize payload: {e}"))
    } else {
        let bytes = fs::read(&config.input)
            .map_err(|e| format!("Failed to read {}: {e}", config.input.display()))?;
        normalizer
            .normalize_bytes(&bytes)
            .map_err(|e| format!("Failed to normalize image: {e}"))
    }
}

fn is_text_payload(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("b64") | Some("txt")
    )
}

fn print_text_summary(report: &NormalizeReport) {
    let trace = &report.trace;
    println!("Normalization summary");
    println!(
        "  input: {}x{}",
        trace.input.width, trace.input.height
    );
    println!(
        "  ink pixels: {} (threshold {})",
        trace.binarize.ink_pixels, trace.binarize.threshold
    );
    match trace.crop.bounds {
        Some([y0, x0, y1, x1]) => println!(
            "  crop: rows {y0}..={y1}, cols {x0}..={x1} -> {}x{}",
            trace.crop.width, trace.crop.height
        ),
        None => println!("  crop: skipped (blank canvas)"),
    }
    println!(
        "  pad: {:?} leading={} trailing={} -> {}x{}",
        trace.pad.axis, trace.pad.leading, trace.pad.trailing, trace.pad.size, trace.pad.size
    );
    match (trace.center.centroid, report.result.shift) {
        (Some([cy, cx]), Some(shift)) => println!(
            "  center of mass: ({cy:.2}, {cx:.2}), shift: ({}, {})",
            shift.dy, shift.dx
        ),
        _ => println!("  centering: skipped (degenerate mass)"),
    }
    println!("  latency_ms: {:.3}", report.result.latency_ms);
    println!();
    print_canvas_preview(&report.result.vector);
}

/// ASCII rendering of the final canvas, one character per pixel.
fn print_canvas_preview(vector: &[f32]) {
    let side = (vector.len() as f64).sqrt() as usize;
    const RAMP: [char; 5] = [' ', '.', ':', 'o', '#'];
    for row in vector.chunks(side) {
        let line: String = row
            .iter()
            .map(|&v| {
                let idx = (v * (RAMP.len() - 1) as f32).round() as usize;
                RAMP[idx.min(RAMP.len() - 1)]
            })
            .collect();
        println!("  |{line}|");
    }
}

/// Re-run the stages up to the paste so the pre-centering canvas can be
/// saved alongside the final one.
fn save_debug_artifacts(
    dir: &Path,
    config: &RuntimeConfig,
    report: &NormalizeReport,
) -> Result<(), String> {
    let gray = load_input_gray(config)?;
    save_grayscale_u8(&gray, &dir.join("input_gray.png"))?;

    let params = &config.params;
    let binary = binarize(&gray, params.ink_threshold);
    let cropped = match ink_bounds(&binary) {
        Some(bounds) => digit_normalizer::normalizer::bbox::crop(&binary, bounds),
        None => binary,
    };
    let (square, _) = pad_to_square(cropped);
    let digit = resample_to(&square, params.digit_size);
    let canvas = paste_centered(&digit, params.canvas_size, params.margin());
    save_grayscale_f32(&invert_normalize(&canvas), &dir.join("canvas_uncentered.png"))?;

    let side = params.canvas_size;
    let mut centered = FloatGrid::new(side, side);
    for y in 0..side {
        for x in 0..side {
            centered.set(x, y, report.result.vector[y * side + x]);
        }
    }
    save_grayscale_f32(&centered, &dir.join("canvas_centered.png"))
}

fn load_input_gray(config: &RuntimeConfig) -> Result<GrayBuffer, String> {
    if is_text_payload(&config.input) {
        let payload = fs::read_to_string(&config.input)
            .map_err(|e| format!("Failed to read {}: {e}", config.input.display()))?;
        let bytes = digit_normalizer::payload::decode_payload(payload.trim())
            .map_err(|e| format!("Failed to decode payload: {e}"))?;
        digit_normalizer::image::io::decode_grayscale(&bytes)
            .map_err(|e| format!("Failed to decode image: {e}"))
    } else {
        load_grayscale_image(&config.input)
    }
}

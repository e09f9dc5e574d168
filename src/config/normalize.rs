use crate::normalizer::NormalizerParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Write the flattened vector as a JSON array.
    pub vector_json: Option<PathBuf>,
    /// Write the full per-stage report as pretty JSON.
    pub report_json: Option<PathBuf>,
    /// Dump debug PNGs of the decoded input and the canvases.
    pub debug_dir: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Encoded image file (PNG/JPEG/...) or a stored text payload
    /// (`.b64`/`.txt` with base64 or data-URI content).
    pub input: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: NormalizerParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

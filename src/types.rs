use serde::Serialize;

/// Integer pixel offset applied to re-register the digit so its
/// intensity-weighted center of mass lands on the canvas center.
///
/// `dy` moves content down, `dx` moves it right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CentroidShift {
    pub dy: i32,
    pub dx: i32,
}

/// Compact output of one pipeline invocation.
#[derive(Clone, Debug, Serialize)]
pub struct NormalizeResult {
    /// Flattened 28×28 canvas, row-major, values in [0.0, 1.0] with ink high.
    /// Always exactly 784 elements under the default parameters.
    pub vector: Vec<f32>,
    /// Mass-centering shift, `None` when centering was skipped (blank canvas
    /// or degenerate center of mass).
    pub shift: Option<CentroidShift>,
    pub latency_ms: f64,
}

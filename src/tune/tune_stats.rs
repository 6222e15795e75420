use serde::{Serialize, Deserialize};

/// Per-epoch tuning statistics emitted by `tune_loop`.
///
/// When a `progress_tx` channel is configured in `TuneConfig`, the loop
/// sends one `TuneStats` value at the end of every completed epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuneStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Summed squared error over the batch after this epoch.
    pub error: f64,
    /// Shallow runs: links that failed to improve. Always 0 for deep runs.
    pub fails: usize,
    /// Links visited this epoch.
    pub total: usize,
    /// Deep runs: mean step magnitude over visited nodes. Always 0 for shallow runs.
    pub mean_delta: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

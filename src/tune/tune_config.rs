use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};

use serde::{Deserialize, Serialize};

use crate::network::ConProperty;
use crate::tune::tune_stats::TuneStats;

/// Which tuning procedure an epoch applies to each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Greedy forward probing, see `tune_shallow`.
    Shallow,
    /// Analytic consensus update, see `tune_deep`.
    Deep,
}

/// Configuration for a `tune_loop` run.
///
/// # Fields
/// - `epochs`       — number of passes over all non-output nodes
/// - `learn_rate`   — probe size (shallow) or step multiplier (deep)
/// - `strategy`     — which procedure to apply per node
/// - `property`     — connection parameter being tuned
/// - `shuffle`      — visit nodes in a random order each epoch
/// - `target_error` — stop once the batch error falls to this value
/// - `progress_tx`  — optional channel sender; one `TuneStats` is sent per
///                    completed epoch.  If the receiver is dropped the loop
///                    terminates early.
/// - `stop_flag`    — optional atomic flag; when set to `true` from another
///                    thread the loop terminates after the current epoch.
pub struct TuneConfig {
    pub epochs: usize,
    pub learn_rate: f64,
    pub strategy: Strategy,
    pub property: ConProperty,
    pub shuffle: bool,
    pub target_error: Option<f64>,
    pub progress_tx: Option<mpsc::Sender<TuneStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TuneConfig {
    /// Creates a minimal `TuneConfig`: in-order visits, no early stop, no channel.
    pub fn new(epochs: usize, learn_rate: f64, strategy: Strategy, property: ConProperty) -> Self {
        TuneConfig {
            epochs,
            learn_rate,
            strategy,
            property,
            shuffle: false,
            target_error: None,
            progress_tx: None,
            stop_flag: None,
        }
    }
}

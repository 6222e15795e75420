use std::sync::atomic::Ordering;
use std::time::Instant;

use log::{debug, info};
use rand::seq::SliceRandom;

use crate::network::{Network, NodeAddr};
use crate::tune::deep::tune_deep;
use crate::tune::sample::{TuneOutcome, TuningSample};
use crate::tune::shallow::tune_shallow;
use crate::tune::tune_config::{Strategy, TuneConfig};
use crate::tune::tune_stats::TuneStats;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Tunes `network` for `config.epochs` epochs and returns the batch error
/// after the **last completed epoch** (the starting error if none ran).
///
/// Every epoch visits each node that owns at least one link, in layer order
/// unless `config.shuffle` is set.
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`, **or**
/// - the error reaches `config.target_error`.
///
/// # Panics
/// Panics if `samples` is empty.
pub fn tune_loop(network: &mut Network, samples: &[TuningSample], config: &TuneConfig) -> f64 {
    assert!(!samples.is_empty(), "samples must not be empty");

    let mut last_error = network.total_squared_error(samples);
    info!(
        "tuning {:?} with {:?} strategy for {} epochs, starting error {:.6}",
        config.property, config.strategy, config.epochs, last_error
    );

    for epoch in 1..=config.epochs {
        if stop_requested(config) {
            break;
        }

        let t_start = Instant::now();

        let mut nodes = tunable_nodes(network);
        if config.shuffle {
            nodes.shuffle(&mut rand::thread_rng());
        }

        // ── One pass over every tunable node ──────────────────────────────
        let (outcome, mean_delta) = run_one_epoch(network, &nodes, samples, config);

        last_error = network.total_squared_error(samples);
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        let stats = TuneStats {
            epoch,
            total_epochs: config.epochs,
            error: last_error,
            fails: outcome.fails,
            total: outcome.total,
            mean_delta,
            elapsed_ms,
        };
        debug!(
            "epoch {}/{}: error {:.6}, fails {}/{}, mean delta {:.6}",
            epoch, config.epochs, stats.error, stats.fails, stats.total, stats.mean_delta
        );

        if let Some(ref tx) = config.progress_tx {
            // If the receiver has been dropped, stop tuning.
            if tx.send(stats).is_err() {
                break;
            }
        }

        if config.target_error.is_some_and(|target| last_error <= target) {
            info!("reached target error after {} epochs", epoch);
            break;
        }
    }

    last_error
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn stop_requested(config: &TuneConfig) -> bool {
    config.stop_flag.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed))
}

/// Addresses of all nodes that own at least one link.
fn tunable_nodes(network: &Network) -> Vec<NodeAddr> {
    network
        .layers
        .iter()
        .enumerate()
        .flat_map(|(l, layer)| {
            layer
                .iter()
                .enumerate()
                .filter(|(_, node)| !node.links.is_empty())
                .map(move |(n, _)| NodeAddr::new(l, n))
        })
        .collect()
}

/// Applies the configured strategy to each node once.
/// Returns the accumulated outcome and the mean per-node step magnitude.
fn run_one_epoch(
    network: &mut Network,
    nodes: &[NodeAddr],
    samples: &[TuningSample],
    config: &TuneConfig,
) -> (TuneOutcome, f64) {
    let mut outcome = TuneOutcome::default();
    let mut delta = 0.0;

    for &addr in nodes {
        match config.strategy {
            Strategy::Shallow => {
                outcome += tune_shallow(network, addr, config.property, samples, config.learn_rate);
            }
            Strategy::Deep => {
                delta += tune_deep(network, addr, config.property, samples, config.learn_rate);
                outcome.total += network[addr].links.len();
            }
        }
    }

    let mean_delta = if nodes.is_empty() { 0.0 } else { delta / nodes.len() as f64 };
    (outcome, mean_delta)
}

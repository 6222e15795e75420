use log::trace;

use crate::math::normalize::normalize;
use crate::network::{ConProperty, LinkAddr, Network, NodeAddr};
use crate::tune::sample::TuningSample;

/// One proposed value of `prop` per sample, for every link of `addr`.
///
/// Result is indexed `[link][sample]`.
pub fn collect_tuning_summary(
    network: &mut Network,
    addr: NodeAddr,
    prop: ConProperty,
    samples: &[TuningSample],
) -> Vec<Vec<f64>> {
    let links = network[addr].links.len();
    let mut summary: Vec<Vec<f64>> =
        (0..links).map(|_| Vec::with_capacity(samples.len())).collect();

    for sample in samples {
        network.run(&sample.input);
        for (l, proposals) in summary.iter_mut().enumerate() {
            let target = network[addr].links[l].target;
            let desired = network.predict_desired_signal(target, &sample.expected);
            proposals.push(network.solve_parameter_for(addr, l, desired, prop));
        }
    }
    summary
}

/// One proposed value of `prop` per sample for a single link.
pub fn collect_link_summary(
    network: &mut Network,
    link: LinkAddr,
    prop: ConProperty,
    samples: &[TuningSample],
) -> Vec<f64> {
    let owner = link.node_addr();
    samples
        .iter()
        .map(|sample| {
            network.run(&sample.input);
            let target = network.connection(link).target;
            let desired = network.predict_desired_signal(target, &sample.expected);
            network.solve_parameter_for(owner, link.link, desired, prop)
        })
        .collect()
}

/// Moves `prop` of one link towards the mean of the per-sample analytic
/// proposals. The step `(1 + min - max)·(avg - current)·learn_rate` shrinks
/// as the proposals spread out. Returns the magnitude of the step.
///
/// # Panics
/// Panics if `samples` is empty.
pub fn tune_deep_link(
    network: &mut Network,
    link: LinkAddr,
    prop: ConProperty,
    samples: &[TuningSample],
    learn_rate: f64,
) -> f64 {
    assert!(!samples.is_empty(), "samples must not be empty");
    let proposals = collect_link_summary(network, link, prop, samples);

    let (mut min, mut max, mut sum) = (1.0_f64, 0.0_f64, 0.0);
    for &p in &proposals {
        min = min.min(p);
        max = max.max(p);
        sum += p;
    }
    let avg = sum / proposals.len() as f64;

    let value = network.connection_mut(link).get_mut(prop);
    let diff = (1.0 + min - max) * (avg - *value) * learn_rate;
    *value = normalize(*value + diff);

    trace!("link {:?} {:?}: avg {:.4}, spread {:.4}, step {:.4}", link, prop, avg, max - min, diff);
    diff.abs()
}

/// Runs [`tune_deep_link`] on every link of `addr` and returns the mean step
/// magnitude; 0 for a node without links.
pub fn tune_deep(
    network: &mut Network,
    addr: NodeAddr,
    prop: ConProperty,
    samples: &[TuningSample],
    learn_rate: f64,
) -> f64 {
    let links = network[addr].links.len();
    if links == 0 {
        return 0.0;
    }
    let total: f64 = (0..links)
        .map(|l| {
            let link = LinkAddr::new(addr.layer, addr.node, l);
            tune_deep_link(network, link, prop, samples, learn_rate)
        })
        .sum();
    total / links as f64
}

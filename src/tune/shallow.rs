use crate::network::{ConProperty, Network, NodeAddr};
use crate::tune::sample::{TuneOutcome, TuningSample};

/// Greedy probe of `prop` on every link of `addr`.
///
/// Each link first tries `value + learn_rate`, then `value - learn_rate`
/// (both clamped to `[0, 1]`), scored against the batch error measured once
/// on entry. A strictly lower error keeps the move. An equal error keeps the
/// move too but counts as a fail. If neither direction helps the old value
/// is restored and the link counts as a fail.
pub fn tune_shallow(
    network: &mut Network,
    addr: NodeAddr,
    prop: ConProperty,
    samples: &[TuningSample],
    learn_rate: f64,
) -> TuneOutcome {
    let baseline = network.total_squared_error(samples);
    let mut outcome = TuneOutcome::default();

    for l in 0..network[addr].links.len() {
        outcome.total += 1;
        let prev = network[addr].links[l].get(prop);

        if prev < 1.0 {
            *network[addr].links[l].get_mut(prop) = (prev + learn_rate).min(1.0);
            let err = network.total_squared_error(samples);
            if err < baseline {
                continue;
            } else if err == baseline {
                outcome.fails += 1;
                continue;
            }
        }

        if network[addr].links[l].get(prop) > 0.0 {
            *network[addr].links[l].get_mut(prop) = (prev - learn_rate).max(0.0);
            let err = network.total_squared_error(samples);
            if err < baseline {
                continue;
            } else if err == baseline {
                outcome.fails += 1;
                continue;
            }
        }

        outcome.fails += 1;
        *network[addr].links[l].get_mut(prop) = prev;
    }

    outcome
}

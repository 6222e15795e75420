use crate::math::normalize::normalize;
use crate::network::{ConProperty, Network, NodeAddr};

impl Network {
    /// Value of `prop` on link `link` of `addr` that would drive a fresh
    /// target (signal 1, no other inbound links) to `expected`, holding the
    /// source state and the other two parameters fixed.
    ///
    /// `C` has no inversion of its own and uses the `W` formula.
    pub fn solve_parameter_for(
        &self,
        addr: NodeAddr,
        link: usize,
        expected: f64,
        prop: ConProperty,
    ) -> f64 {
        let node = &self[addr];
        let lnk = &node.links[link];

        match prop {
            ConProperty::K => {
                // (1 - e) / (w·cond) = k + s - 2·s·k  =>  k = (x - s) / (1 - 2·s)
                let attenuation = (1.0 - expected) / (lnk.w * node.conductivity);
                normalize((attenuation - node.signal) / (1.0 - 2.0 * node.signal))
            }
            ConProperty::W | ConProperty::C => normalize((1.0 - expected) / node.attenuation(lnk)),
        }
    }

    /// Signal `addr` should have carried for the last run to produce
    /// `expected` at the output, all other state unchanged.
    ///
    /// Exact for output nodes. For the layer right before a single-node
    /// output the first link is inverted in closed form. Anywhere else the
    /// observed signal is returned as is. Must follow a run with the
    /// matching input.
    pub fn predict_desired_signal(&self, addr: NodeAddr, expected: &[f64]) -> f64 {
        let layers = self.layers.len();
        let output = &self.layers[layers - 1];
        assert_eq!(
            expected.len(),
            output.len(),
            "expected output length must match the output layer size"
        );

        if addr.layer + 1 == layers {
            return expected[addr.node];
        }

        let node = &self[addr];
        if expected.len() != 1 || addr.layer + 2 != layers {
            return node.signal;
        }
        let Some(lnk) = node.links.first() else {
            return node.signal;
        };

        // Output with this node's contribution divided back out.
        let contribution = 1.0 - lnk.w * node.attenuation(lnk);
        let without = output[0].signal / contribution;
        let wanted = expected[0] / without;

        // (1 - wanted) / (w·cond) = k + s - 2·s·k  =>  s = (x - k) / (1 - 2·k)
        let attenuation = (1.0 - wanted) / (lnk.w * node.conductivity);
        (attenuation - lnk.k) / (1.0 - 2.0 * lnk.k)
    }
}

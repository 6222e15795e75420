use crate::network::network::Network;

impl Network {
    /// Sets signal and conductivity of every node back to 1.
    pub fn reset(&mut self) {
        for l in 0..self.layers.len() {
            self.reset_layer(l);
        }
    }

    pub fn reset_layer(&mut self, layer: usize) {
        for node in self.layers[layer].iter_mut() {
            node.signal = 1.0;
            node.conductivity = 1.0;
        }
    }

    /// Overwrites the input layer's signals. Conductivity is untouched.
    pub fn load_input(&mut self, input: &[f64]) {
        let inputs = &mut self.layers[0];
        assert_eq!(input.len(), inputs.len(), "input length must match the input layer size");
        for (node, &value) in inputs.iter_mut().zip(input) {
            node.signal = value;
        }
    }

    /// Pushes every link of `layer` into its target, node by node and link
    /// by link. Each target's signal is scaled by `1 - w·a` and its
    /// conductivity by `1 - c·a`, where `a` is the source's attenuation.
    pub fn propagate_layer(&mut self, layer: usize) {
        for n in 0..self.layers[layer].len() {
            for l in 0..self.layers[layer][n].links.len() {
                let node = &self.layers[layer][n];
                let lnk = &node.links[l];
                let attenuation = node.attenuation(lnk);
                let (w, c, target) = (lnk.w, lnk.c, lnk.target);

                let target = &mut self[target];
                target.signal *= 1.0 - w * attenuation;
                target.conductivity *= 1.0 - c * attenuation;
            }
        }
    }

    /// Propagates layers `0..len-1` in order.
    pub fn propagate_all(&mut self) {
        for l in 0..self.layers.len().saturating_sub(1) {
            self.propagate_layer(l);
        }
    }

    /// Forward pass: reset, load `input`, propagate; returns the output signals.
    pub fn run(&mut self, input: &[f64]) -> Vec<f64> {
        self.reset();
        self.load_input(input);
        self.propagate_all();
        self.output()
    }
}

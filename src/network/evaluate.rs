use crate::loss::sse::SseLoss;
use crate::network::network::Network;
use crate::tune::sample::TuningSample;

impl Network {
    /// Runs every sample and sums the squared output error over all of them.
    pub fn total_squared_error(&mut self, samples: &[TuningSample]) -> f64 {
        samples
            .iter()
            .map(|sample| {
                let output = self.run(&sample.input);
                SseLoss::loss(&output, &sample.expected)
            })
            .sum()
    }

    /// Re-propagates from `layer` onward, assuming the signals of `layer` and
    /// everything before it are current, and returns the squared error
    /// against `expected`. Every later layer is reset first.
    pub fn recalculate_from(&mut self, layer: usize, expected: &[f64]) -> f64 {
        for l in layer + 1..self.layers.len() {
            self.reset_layer(l);
        }
        for l in layer..self.layers.len().saturating_sub(1) {
            self.propagate_layer(l);
        }
        SseLoss::loss(&self.output(), expected)
    }
}

use log::debug;

use crate::network::address::NodeAddr;
use crate::network::error::NetError;
use crate::network::network::Network;
use crate::network::node::{Connection, Node, Params};

impl Network {
    /// Builds layers of the given sizes; every node of a non-output layer
    /// links to every node of the next layer.
    pub fn uniform(sizes: &[usize], params: Params) -> Network {
        let mut layers: Vec<Vec<Node>> = sizes.iter().map(|&n| vec![Node::default(); n]).collect();
        for (l, layer) in layers.iter_mut().enumerate() {
            let Some(&next) = sizes.get(l + 1) else { break };
            for node in layer.iter_mut() {
                node.links = (0..next)
                    .map(|i| Connection::new(params, NodeAddr::new(l + 1, i)))
                    .collect();
            }
        }
        Network { layers }
    }

    /// Like [`Network::uniform`], but node `i` of layer `l` only reaches the
    /// next-layer nodes in `[i - radii[l], i + radii[l]]`, clamped to bounds.
    pub fn branching(
        sizes: &[usize],
        radii: &[usize],
        params: Params,
    ) -> Result<Network, NetError> {
        let needed = sizes.len().saturating_sub(1);
        if radii.len() < needed {
            return Err(NetError::BranchingMismatch { expected: needed, got: radii.len() });
        }

        let mut layers: Vec<Vec<Node>> = sizes.iter().map(|&n| vec![Node::default(); n]).collect();
        for (l, layer) in layers.iter_mut().enumerate() {
            let Some(&next) = sizes.get(l + 1) else { break };
            let radius = radii[l];
            for (n, node) in layer.iter_mut().enumerate() {
                let begin = n.saturating_sub(radius);
                let end = n.saturating_add(radius).saturating_add(1).min(next);
                node.links = (begin..end)
                    .map(|i| Connection::new(params, NodeAddr::new(l + 1, i)))
                    .collect();
            }
        }
        Ok(Network { layers })
    }

    /// Grows `layer` to `size` nodes. New nodes are fed by every node of the
    /// previous layer and feed every node of the next one; existing links
    /// are left alone.
    pub fn expand_layer(
        &mut self,
        layer: usize,
        size: usize,
        params: Params,
    ) -> Result<(), NetError> {
        self.check_layer(layer)?;
        let current = self.layers[layer].len();
        if size < current {
            return Err(NetError::ShrinkLayer { layer, current, requested: size });
        }
        if size == current {
            return Ok(());
        }

        self.layers[layer].resize(size, Node::default());

        if layer > 0 {
            for node in self.layers[layer - 1].iter_mut() {
                node.links.extend(
                    (current..size).map(|i| Connection::new(params, NodeAddr::new(layer, i))),
                );
            }
        }

        if let Some(next) = self.layers.get(layer + 1).map(Vec::len) {
            for node in &mut self.layers[layer][current..] {
                node.links.extend(
                    (0..next).map(|i| Connection::new(params, NodeAddr::new(layer + 1, i))),
                );
            }
        }

        debug!("expanded layer {} from {} to {} nodes", layer, current, size);
        Ok(())
    }

    /// Inserts a layer of `size` nodes in front of the current layer `at`.
    ///
    /// New node `i` passes its signal straight to old node `i`; all other new
    /// links take `params`. Links of layer `at - 1` that fed the old layer now
    /// feed the new one, so with matching sizes and conductivity-neutral
    /// params (`w = c = 0`) the network output does not change.
    pub fn insert_layer(&mut self, at: usize, size: usize, params: Params) -> Result<(), NetError> {
        self.check_layer(at)?;
        let current = self.layers[at].len();
        if size < current {
            return Err(NetError::ShrinkLayer { layer: at, current, requested: size });
        }

        // Shift every address first so nothing observes a half-moved network.
        for (l, layer) in self.layers.iter_mut().enumerate() {
            let rewired = l + 1 == at;
            for lnk in layer.iter_mut().flat_map(|node| node.links.iter_mut()) {
                if lnk.target.layer > at || (lnk.target.layer == at && !rewired) {
                    lnk.target.layer += 1;
                }
            }
        }

        let fresh: Vec<Node> = (0..size)
            .map(|n| {
                Node::with_links(
                    (0..current)
                        .map(|i| {
                            let p = if i == n { Params::pass_through() } else { params };
                            Connection::new(p, NodeAddr::new(at + 1, i))
                        })
                        .collect(),
                )
            })
            .collect();
        self.layers.insert(at, fresh);

        if at > 0 {
            for node in self.layers[at - 1].iter_mut() {
                node.links.extend(
                    (current..size).map(|i| Connection::new(params, NodeAddr::new(at, i))),
                );
            }
        }

        debug!("inserted layer {} with {} nodes ({} layers total)", at, size, self.layers.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(net: &Network, layer: usize, node: usize) -> Vec<(usize, usize)> {
        net.layer(layer)[node].links.iter().map(|l| (l.target.layer, l.target.node)).collect()
    }

    #[test]
    fn uniform_is_fully_connected() {
        let net = Network::uniform(&[2, 3, 1], Params::default());
        assert_eq!(net.layer_count(), 3);
        assert_eq!(net.node_count(), 6);
        assert_eq!(targets(&net, 0, 1), vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!(targets(&net, 1, 2), vec![(2, 0)]);
        assert!(net.layer(2)[0].links.is_empty());
    }

    #[test]
    fn branching_uses_inclusive_clamped_band() {
        let net = Network::branching(&[4, 4], &[1], Params::default()).unwrap();
        assert_eq!(targets(&net, 0, 0), vec![(1, 0), (1, 1)]);
        assert_eq!(targets(&net, 0, 2), vec![(1, 1), (1, 2), (1, 3)]);
        assert_eq!(targets(&net, 0, 3), vec![(1, 2), (1, 3)]);
    }

    #[test]
    fn branching_requires_a_radius_per_hidden_layer() {
        let err = Network::branching(&[2, 2, 2], &[1], Params::default());
        assert_eq!(err, Err(NetError::BranchingMismatch { expected: 2, got: 1 }));
    }

    #[test]
    fn expand_wires_new_nodes_both_ways() {
        let mut net = Network::uniform(&[2, 1, 2], Params::default());
        net.expand_layer(1, 3, Params::new(0.5, 0.0, 0.0)).unwrap();
        assert_eq!(net.layer(1).len(), 3);
        assert_eq!(targets(&net, 0, 0), vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!(targets(&net, 1, 0), vec![(2, 0), (2, 1)]);
        assert_eq!(targets(&net, 1, 2), vec![(2, 0), (2, 1)]);
        assert_eq!(net.layer(1)[2].links[0].k, 0.5);
    }

    #[test]
    fn expand_refuses_to_shrink() {
        let mut net = Network::uniform(&[2, 3], Params::default());
        let err = net.expand_layer(1, 2, Params::default());
        assert_eq!(err, Err(NetError::ShrinkLayer { layer: 1, current: 3, requested: 2 }));
        assert_eq!(
            net.expand_layer(5, 2, Params::default()),
            Err(NetError::LayerOutOfRange { layer: 5, layers: 2 })
        );
    }

    #[test]
    fn insert_shifts_addresses_and_adds_pass_through() {
        let mut net = Network::uniform(&[1, 2, 1], Params::default());
        net.insert_layer(2, 1, Params::new(0.3, 0.0, 0.0)).unwrap();
        assert_eq!(net.layer_count(), 4);
        // layer 1 now feeds the inserted layer
        assert_eq!(targets(&net, 1, 0), vec![(2, 0)]);
        assert_eq!(targets(&net, 2, 0), vec![(3, 0)]);
        assert_eq!(net.layer(2)[0].links[0].params(), Params::pass_through());
        assert_eq!(targets(&net, 0, 0), vec![(1, 0), (1, 1)]);
    }

    #[test]
    fn insert_keeps_skip_links_on_their_layer() {
        let mut net = Network::uniform(&[1, 1, 1], Params::default());
        net.connect(NodeAddr::new(0, 0), NodeAddr::new(2, 0), Params::default()).unwrap();
        net.insert_layer(2, 2, Params::default()).unwrap();
        assert_eq!(targets(&net, 0, 0), vec![(1, 0), (3, 0)]);
        assert_eq!(targets(&net, 1, 0), vec![(2, 0), (2, 1)]);
        assert_eq!(targets(&net, 2, 1), vec![(3, 0)]);
    }
}

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::network::address::{LinkAddr, NodeAddr};
use crate::network::error::NetError;
use crate::network::node::{Connection, Node, Params};

/// Layers of nodes; each node owns its outgoing connections, which address
/// their targets by absolute `(layer, node)` indices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Vec<Node>>,
}

impl Network {
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Total number of nodes across all layers.
    pub fn node_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    pub fn layer(&self, layer: usize) -> &[Node] {
        &self.layers[layer]
    }

    pub fn node(&self, addr: NodeAddr) -> &Node {
        &self.layers[addr.layer][addr.node]
    }

    pub fn node_mut(&mut self, addr: NodeAddr) -> &mut Node {
        &mut self.layers[addr.layer][addr.node]
    }

    pub fn connection(&self, addr: LinkAddr) -> &Connection {
        &self.layers[addr.layer][addr.node].links[addr.link]
    }

    pub fn connection_mut(&mut self, addr: LinkAddr) -> &mut Connection {
        &mut self.layers[addr.layer][addr.node].links[addr.link]
    }

    /// Signals of the output layer, as left by the last run.
    pub fn output(&self) -> Vec<f64> {
        self.layers
            .last()
            .map(|layer| layer.iter().map(|n| n.signal).collect())
            .unwrap_or_default()
    }

    /// Appends an unconnected node to `layer` and returns its address.
    pub fn push_node(&mut self, layer: usize) -> Result<NodeAddr, NetError> {
        self.check_layer(layer)?;
        self.layers[layer].push(Node::default());
        Ok(NodeAddr::new(layer, self.layers[layer].len() - 1))
    }

    /// Adds a link from `from` to `to`; `to` must sit in a later layer.
    pub fn connect(
        &mut self,
        from: NodeAddr,
        to: NodeAddr,
        params: Params,
    ) -> Result<LinkAddr, NetError> {
        self.check_node(from)?;
        self.check_node(to)?;
        if to.layer <= from.layer {
            return Err(NetError::BackwardLink { from: from.layer, to: to.layer });
        }
        let links = &mut self.layers[from.layer][from.node].links;
        links.push(Connection::new(params, to));
        Ok(LinkAddr::new(from.layer, from.node, links.len() - 1))
    }

    pub(crate) fn check_layer(&self, layer: usize) -> Result<(), NetError> {
        if layer >= self.layers.len() {
            return Err(NetError::LayerOutOfRange { layer, layers: self.layers.len() });
        }
        Ok(())
    }

    pub(crate) fn check_node(&self, addr: NodeAddr) -> Result<(), NetError> {
        self.check_layer(addr.layer)?;
        let size = self.layers[addr.layer].len();
        if addr.node >= size {
            return Err(NetError::NodeOutOfRange { layer: addr.layer, node: addr.node, size });
        }
        Ok(())
    }

    /// Serializes the topology and connection parameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl Index<NodeAddr> for Network {
    type Output = Node;

    fn index(&self, addr: NodeAddr) -> &Node {
        self.node(addr)
    }
}

impl IndexMut<NodeAddr> for Network {
    fn index_mut(&mut self, addr: NodeAddr) -> &mut Node {
        self.node_mut(addr)
    }
}

impl Index<usize> for Network {
    type Output = [Node];

    fn index(&self, layer: usize) -> &[Node] {
        self.layer(layer)
    }
}

use serde::{Deserialize, Serialize};

/// Position of a node: layer index, then index within that layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeAddr {
    pub layer: usize,
    pub node: usize,
}

impl NodeAddr {
    pub fn new(layer: usize, node: usize) -> Self {
        NodeAddr { layer, node }
    }
}

/// Position of a connection: the owning node plus the index into its
/// outgoing link list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkAddr {
    pub layer: usize,
    pub node: usize,
    pub link: usize,
}

impl LinkAddr {
    pub fn new(layer: usize, node: usize, link: usize) -> Self {
        LinkAddr { layer, node, link }
    }

    /// Address of the node that owns this link.
    pub fn node_addr(&self) -> NodeAddr {
        NodeAddr { layer: self.layer, node: self.node }
    }
}

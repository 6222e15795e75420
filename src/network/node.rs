use serde::{Deserialize, Serialize};

use crate::network::address::NodeAddr;

/// Selects one of the three tunable parameters of a [`Connection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConProperty {
    /// Forward coefficient: blends "pass the source signal" (1) and
    /// "attenuate regardless of the source" (0).
    K,
    /// Weight: how strongly attenuation scales the target's signal.
    W,
    /// Conductivity impact: how strongly attenuation scales the target's conductivity.
    C,
}

/// Default parameters handed to the topology builders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params {
    pub k: f64,
    pub w: f64,
    pub c: f64,
}

impl Params {
    pub fn new(k: f64, w: f64, c: f64) -> Self {
        Params { k, w, c }
    }

    /// A link that copies the source signal into a fresh target unchanged.
    pub fn pass_through() -> Self {
        Params { k: 1.0, w: 1.0, c: 0.0 }
    }
}

impl Default for Params {
    fn default() -> Self {
        Params { k: 0.25, w: 0.5, c: 0.0 }
    }
}

/// Directed edge owned by its source node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub k: f64,
    pub w: f64,
    pub c: f64,
    /// Always lives in a strictly later layer than the owner.
    pub target: NodeAddr,
}

impl Connection {
    pub fn new(params: Params, target: NodeAddr) -> Self {
        Connection { k: params.k, w: params.w, c: params.c, target }
    }

    pub fn get(&self, prop: ConProperty) -> f64 {
        match prop {
            ConProperty::K => self.k,
            ConProperty::W => self.w,
            ConProperty::C => self.c,
        }
    }

    pub fn get_mut(&mut self, prop: ConProperty) -> &mut f64 {
        match prop {
            ConProperty::K => &mut self.k,
            ConProperty::W => &mut self.w,
            ConProperty::C => &mut self.c,
        }
    }

    pub fn params(&self) -> Params {
        Params { k: self.k, w: self.w, c: self.c }
    }
}

fn neutral() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Transient; recomputed on every run.
    #[serde(skip, default = "neutral")]
    pub signal: f64,
    /// Transient; gates the effect of this node's outgoing links.
    #[serde(skip, default = "neutral")]
    pub conductivity: f64,
    /// Order matters: updates to targets are applied in this order.
    pub links: Vec<Connection>,
}

impl Node {
    pub fn with_links(links: Vec<Connection>) -> Self {
        Node { links, ..Node::default() }
    }

    /// Attenuation this node currently pushes through `link`.
    pub fn attenuation(&self, link: &Connection) -> f64 {
        self.conductivity * (link.k + self.signal - 2.0 * self.signal * link.k)
    }
}

impl Default for Node {
    fn default() -> Self {
        Node { signal: 1.0, conductivity: 1.0, links: Vec::new() }
    }
}

use serde::{Serialize, Deserialize};
use crate::network::error::NetError;
use crate::network::network::Network;
use crate::network::node::Params;

/// A fully serializable description of a network topology.
///
/// `NetworkSpec` can be saved to / loaded from JSON independently of the
/// tuned parameters, so a topology can be stored before tuning starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used as the model file stem.
    pub name: String,
    /// Node count per layer (input → output).
    pub layers: Vec<usize>,
    /// Optional per-layer branching radius; `None` means fully connected.
    #[serde(default)]
    pub branching: Option<Vec<usize>>,
    /// Initial parameters of every connection.
    #[serde(default)]
    pub params: Params,
}

impl NetworkSpec {
    pub fn new(name: impl Into<String>, layers: Vec<usize>) -> Self {
        NetworkSpec { name: name.into(), layers, branching: None, params: Params::default() }
    }

    /// Checks that the spec can be built.
    pub fn validate(&self) -> Result<(), NetError> {
        if self.layers.is_empty() {
            return Err(NetError::EmptySpec);
        }
        for (name, value) in [("k", self.params.k), ("w", self.params.w), ("c", self.params.c)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(NetError::InvalidParams { name, value });
            }
        }
        if let Some(radii) = &self.branching {
            let expected = self.layers.len() - 1;
            if radii.len() < expected {
                return Err(NetError::BranchingMismatch { expected, got: radii.len() });
            }
        }
        Ok(())
    }

    pub fn build(&self) -> Result<Network, NetError> {
        self.validate()?;
        match &self.branching {
            Some(radii) => Network::branching(&self.layers, radii, self.params),
            None => Ok(Network::uniform(&self.layers, self.params)),
        }
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

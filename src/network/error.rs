use thiserror::Error;

/// Contract violations reported by topology edits and spec validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetError {
    #[error("layer {layer} is out of range (network has {layers} layers)")]
    LayerOutOfRange { layer: usize, layers: usize },

    #[error("node {node} is out of range in layer {layer} ({size} nodes)")]
    NodeOutOfRange { layer: usize, node: usize, size: usize },

    #[error("layer {layer} cannot shrink from {current} to {requested} nodes")]
    ShrinkLayer { layer: usize, current: usize, requested: usize },

    #[error("expected {expected} branching radii, got {got}")]
    BranchingMismatch { expected: usize, got: usize },

    #[error("link from layer {from} to layer {to} does not point to a later layer")]
    BackwardLink { from: usize, to: usize },

    #[error("connection parameter {name} = {value} is outside [0, 1]")]
    InvalidParams { name: &'static str, value: f64 },

    #[error("network spec has no layers")]
    EmptySpec,
}

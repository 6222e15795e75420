pub mod math;
pub mod network;
pub mod loss;
pub mod inverse;
pub mod tune;

// Convenience re-exports
pub use math::normalize::normalize;
pub use network::{
    ConProperty, Connection, LinkAddr, NetError, Network, NetworkSpec, Node, NodeAddr, Params,
};
pub use loss::sse::SseLoss;
pub use tune::{
    tune_deep, tune_deep_link, tune_loop, tune_shallow, Strategy, TuneConfig, TuneOutcome,
    TuneStats, TuningSample,
};

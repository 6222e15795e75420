pub mod address;
pub mod error;
pub mod evaluate;
pub mod network;
pub mod node;
pub mod propagate;
pub mod spec;
pub mod topology;

pub use address::{LinkAddr, NodeAddr};
pub use error::NetError;
pub use network::Network;
pub use node::{ConProperty, Connection, Node, Params};
pub use spec::NetworkSpec;

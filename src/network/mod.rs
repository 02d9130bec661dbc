mod backward;
pub mod buffer;
mod forward;
pub mod network;
pub mod snapshot;

pub use buffer::NetworkBuffer;
pub use network::Network;
pub use snapshot::{LayerState, NodeState, StateSnapshot};

pub mod activation;
pub mod error;
pub mod layout;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_slope};
pub use error::{NetworkError, Result};
pub use layout::{LayerSpec, Layout};
pub use network::{Network, StateSnapshot};
pub use loss::MseLoss;
pub use optim::Sgd;
pub use train::{train_online, Pattern, TrainConfig, TrainReport};

use crate::error::Result;
use crate::network::Network;

/// Plain online gradient descent: no momentum, no batching, no decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one weight update for the network's last forward pass.
    pub fn step(&self, network: &mut Network, err: f64) -> Result<()> {
        network.backward(err, self.learning_rate)
    }
}

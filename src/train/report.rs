use serde::{Serialize, Deserialize};

/// Summary returned by `train_online`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// Number of single-sample updates applied.
    pub iterations: usize,
    /// Mean squared error over the last pass through the pattern set,
    /// measured before each sample's update.
    pub final_loss: f64,
}

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};
use crate::layout::LayerSpec;

/// Configuration for a training run of the `flatnet` binary.
///
/// # Fields
/// - `layers`        — layer widths, input first; the binary trains the XOR
///                     patterns, so the input layer must have two nodes and
///                     the output layer one
/// - `learning_rate` — step size `mu` passed to every backward pass
/// - `iterations`    — number of single-sample updates
/// - `seed`          — seed for weight initialization
/// - `report_every`  — log a few samples every this many iterations; `0` disables
///
/// Loaded from JSON such as:
///
/// ```json
/// { "layers": [2, 2, 1], "learning_rate": 2.6, "iterations": 8000, "seed": 0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub layers: LayerSpec,
    pub learning_rate: f64,
    pub iterations: usize,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_report_every")]
    pub report_every: usize,
}

fn default_report_every() -> usize {
    50
}

impl TrainConfig {
    /// The classic XOR setup: `[2, 2, 1]`, learning rate 2.6, 8000 updates.
    pub fn xor() -> TrainConfig {
        TrainConfig {
            layers: LayerSpec::new(vec![2, 2, 1]).expect("static xor widths are valid"),
            learning_rate: 2.6,
            iterations: 8000,
            seed: 0,
            report_every: default_report_every(),
        }
    }

    /// Reads and validates a config from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NetworkError::Configuration(format!(
                "learning_rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }
        if self.layers.input_width() != 2 {
            return Err(NetworkError::Configuration(format!(
                "the XOR patterns have 2 inputs, layers start with {}",
                self.layers.input_width()
            )));
        }
        if self.layers.output_width() != 1 {
            return Err(NetworkError::UnsupportedTopology {
                output_width: self.layers.output_width(),
            });
        }
        Ok(())
    }
}

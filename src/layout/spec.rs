use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// Ordered layer widths of a network, input layer first, output layer last.
///
/// A `LayerSpec` is validated on construction (at least two layers, every
/// width positive) and never changes afterwards, so everything derived from
/// it (offset tables, buffer length) stays valid for the life of the network.
///
/// Deserializes from a plain JSON array such as `[2, 2, 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct LayerSpec {
    widths: Vec<usize>,
}

impl LayerSpec {
    pub fn new(widths: Vec<usize>) -> Result<LayerSpec> {
        if widths.len() < 2 {
            return Err(NetworkError::Configuration(format!(
                "a network needs at least an input and an output layer, got {} layer(s)",
                widths.len()
            )));
        }
        if let Some(layer) = widths.iter().position(|&w| w == 0) {
            return Err(NetworkError::Configuration(format!(
                "layer {layer} has width 0, all widths must be positive"
            )));
        }
        Ok(LayerSpec { widths })
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Number of layers, input and output included.
    pub fn depth(&self) -> usize {
        self.widths.len()
    }

    pub fn width(&self, layer: usize) -> usize {
        self.widths[layer]
    }

    pub fn input_width(&self) -> usize {
        self.widths[0]
    }

    pub fn output_width(&self) -> usize {
        self.widths[self.widths.len() - 1]
    }

    /// Index of the output layer.
    pub fn last(&self) -> usize {
        self.widths.len() - 1
    }
}

impl TryFrom<Vec<usize>> for LayerSpec {
    type Error = NetworkError;

    fn try_from(widths: Vec<usize>) -> Result<LayerSpec> {
        LayerSpec::new(widths)
    }
}

impl From<LayerSpec> for Vec<usize> {
    fn from(spec: LayerSpec) -> Vec<usize> {
        spec.widths
    }
}

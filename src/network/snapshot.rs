use std::fmt;

use serde::Serialize;

/// Debug copy of every output and weight value in a network.
///
/// Produced by [`Network::dump_state`](crate::Network::dump_state) for
/// display only; nothing in the library reads it back. Serializes with
/// `serde_json` for drivers that want a machine-readable dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    /// Current values of the input block.
    pub inputs: Vec<f64>,
    /// Layers `1..L`, in order.
    pub layers: Vec<LayerState>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerState {
    pub layer: usize,
    pub nodes: Vec<NodeState>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeState {
    pub output: f64,
    /// `fan_in` input weights followed by the bias.
    pub weights: Vec<f64>,
}

/// One line: `i 0.00 1.00 | l1 n0 o0.73 w 0.12 -0.40 0.05 n1 ...`.
impl fmt::Display for StateSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i")?;
        for x in &self.inputs {
            write!(f, " {x:.2}")?;
        }
        for layer in &self.layers {
            write!(f, " | l{}", layer.layer)?;
            for (n, node) in layer.nodes.iter().enumerate() {
                write!(f, " n{n} o{:.2} w", node.output)?;
                for w in &node.weights {
                    write!(f, " {w:.2}")?;
                }
            }
        }
        Ok(())
    }
}

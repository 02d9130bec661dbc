use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{NetworkError, Result};
use crate::layout::{LayerSpec, Layout};
use crate::network::backward::backward;
use crate::network::buffer::NetworkBuffer;
use crate::network::forward::forward;
use crate::network::snapshot::{LayerState, NodeState, StateSnapshot};

/// Where a network is in its per-sample cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No input has been written yet, or the last one was consumed by backward.
    AwaitingInput,
    /// The input block is valid; outputs are stale or never computed.
    InputSet,
    /// Outputs reflect the current input and weights.
    Forwarded,
}

/// A sigmoid feed-forward network of arbitrary depth stored in one flat
/// buffer.
///
/// Each sample goes through `set_input` → `forward` → `read_output` →
/// (caller computes the error) → `backward`, after which the network waits
/// for the next `set_input`. Calling these out of order is reported as
/// [`NetworkError::Usage`].
#[derive(Debug, Clone)]
pub struct Network {
    buffer: NetworkBuffer,
    phase: Phase,
}

impl Network {
    /// Builds a network with weights drawn from a `StdRng` seeded with `seed`.
    pub fn new(widths: &[usize], seed: u64) -> Result<Network> {
        let mut rng = StdRng::seed_from_u64(seed);
        Network::with_rng(widths, &mut rng)
    }

    /// Builds a network with weights drawn from the provided RNG.
    pub fn with_rng<R: Rng + ?Sized>(widths: &[usize], rng: &mut R) -> Result<Network> {
        Network::from_spec(LayerSpec::new(widths.to_vec())?, rng)
    }

    pub fn from_spec<R: Rng + ?Sized>(spec: LayerSpec, rng: &mut R) -> Result<Network> {
        let layout = Layout::plan(&spec)?;
        debug!(
            "planned network {:?}: {} buffer values",
            spec.widths(),
            layout.len()
        );

        let mut buffer = NetworkBuffer::allocate(layout)?;
        buffer.initialize_weights(rng);

        Ok(Network {
            buffer,
            phase: Phase::AwaitingInput,
        })
    }

    pub fn spec(&self) -> &LayerSpec {
        self.buffer.layout().spec()
    }

    pub fn layout(&self) -> &Layout {
        self.buffer.layout()
    }

    // ── Per-sample cycle ──────────────────────────────────────────────────

    /// Writes the input layer's values.
    pub fn set_input(&mut self, values: &[f64]) -> Result<()> {
        let expected = self.spec().input_width();
        if values.len() != expected {
            return Err(NetworkError::InputLength {
                expected,
                actual: values.len(),
            });
        }
        let inputs = self.layout().outputs(0);
        self.buffer.slice_mut(inputs).copy_from_slice(values);
        self.phase = Phase::InputSet;
        Ok(())
    }

    /// Recomputes every downstream output from the input and current weights.
    pub fn forward(&mut self) -> Result<()> {
        if self.phase == Phase::AwaitingInput {
            return Err(NetworkError::Usage("forward called before set_input"));
        }
        forward(&mut self.buffer);
        self.phase = Phase::Forwarded;
        Ok(())
    }

    /// Output layer values of the most recent forward pass.
    pub fn read_output(&self) -> Result<&[f64]> {
        if self.phase != Phase::Forwarded {
            return Err(NetworkError::Usage(
                "outputs read before a forward pass on the current weights",
            ));
        }
        let last = self.spec().last();
        Ok(self.buffer.slice(self.layout().outputs(last)))
    }

    /// `set_input` + `forward` + `read_output` in one call.
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.set_input(input)?;
        self.forward()?;
        Ok(self.read_output()?.to_vec())
    }

    /// One online gradient step for the last forward pass.
    ///
    /// `err` is conventionally `target - actual` for the single output node.
    /// Nothing is mutated when this returns an error. On success the sample
    /// is consumed: the next call must be `set_input`.
    pub fn backward(&mut self, err: f64, learning_rate: f64) -> Result<()> {
        let output_width = self.spec().output_width();
        if output_width != 1 {
            return Err(NetworkError::UnsupportedTopology { output_width });
        }
        if !err.is_finite() || !learning_rate.is_finite() {
            return Err(NetworkError::Configuration(format!(
                "backward needs finite err and learning rate, got {err} and {learning_rate}"
            )));
        }
        if self.phase != Phase::Forwarded {
            return Err(NetworkError::Usage("backward called without a fresh forward pass"));
        }

        trace!("backward err={err:.6} mu={learning_rate}");
        backward(&mut self.buffer, err, learning_rate);
        self.phase = Phase::AwaitingInput;
        Ok(())
    }

    // ── Checked accessors ─────────────────────────────────────────────────

    /// Weight `slot` of `node` in `layer`; slot `widths[layer-1]` is the bias.
    pub fn weight(&self, layer: usize, node: usize, slot: usize) -> Result<f64> {
        let idx = self.layout().checked_weight(layer, node, slot)?;
        Ok(self.buffer[idx])
    }

    /// Overwrites one weight. Outputs computed before the change are withdrawn.
    pub fn set_weight(&mut self, layer: usize, node: usize, slot: usize, value: f64) -> Result<()> {
        let idx = self.layout().checked_weight(layer, node, slot)?;
        self.buffer[idx] = value;
        if self.phase == Phase::Forwarded {
            self.phase = Phase::InputSet;
        }
        Ok(())
    }

    /// Output of any node, the input layer included.
    pub fn output(&self, layer: usize, node: usize) -> Result<f64> {
        let idx = self.layout().checked_output(layer, node)?;
        match (layer, self.phase) {
            (_, Phase::AwaitingInput) => Err(NetworkError::Usage("no current input")),
            (0, _) | (_, Phase::Forwarded) => Ok(self.buffer[idx]),
            _ => Err(NetworkError::Usage(
                "outputs read before a forward pass on the current weights",
            )),
        }
    }

    /// Every weight, layer by layer, node by node, bias last in each row.
    pub fn weights(&self) -> Vec<f64> {
        let last = self.spec().last();
        (1..=last)
            .flat_map(|layer| self.buffer.slice(self.layout().weights(layer)).iter().copied())
            .collect()
    }

    /// Copies all outputs and weights for display. Unset values read as 0.
    pub fn dump_state(&self) -> StateSnapshot {
        let layout = self.layout();
        let spec = layout.spec();

        let layers = (1..spec.depth())
            .map(|layer| LayerState {
                layer,
                nodes: (0..spec.width(layer))
                    .map(|node| NodeState {
                        output: self.buffer[layout.output(layer, node)],
                        weights: self.buffer.slice(layout.weight_row(layer, node)).to_vec(),
                    })
                    .collect(),
            })
            .collect();

        StateSnapshot {
            inputs: self.buffer.slice(layout.outputs(0)).to_vec(),
            layers,
        }
    }
}

use std::ops::Range;

use crate::error::{NetworkError, Result};
use crate::layout::spec::LayerSpec;

/// Which kind of values a block of the buffer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// `widths[i]` activations of layer `i` (transient).
    Outputs,
    /// `widths[i] * (widths[i-1] + 1)` weights of layer `i`, bias last (persistent).
    Weights,
    /// `widths[i] * widths[i+1]` gradient factors relayed to hidden layer `i` (transient).
    Staging,
}

/// One addressable block of the flat buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub region: Region,
    pub layer: usize,
    pub range: Range<usize>,
}

/// Offset tables for every block of a network's flat buffer.
///
/// Blocks are laid out as all output blocks, then all weight blocks, then all
/// staging blocks. The tables are computed once from a [`LayerSpec`] and are
/// the only way the buffer is addressed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    spec: LayerSpec,
    /// Indexed by layer, `0..L`.
    output_offsets: Vec<usize>,
    /// Indexed by `layer - 1`, layers `1..L`.
    weight_offsets: Vec<usize>,
    /// Indexed by `layer - 1`, hidden layers `1..L-1`.
    stage_offsets: Vec<usize>,
    len: usize,
}

impl Layout {
    /// Runs the three cumulative passes (outputs, weights, staging) over `spec`.
    ///
    /// Fails with [`NetworkError::SizeOverflow`] if the total size does not
    /// fit in `usize`.
    pub fn plan(spec: &LayerSpec) -> Result<Layout> {
        let widths = spec.widths();
        let depth = widths.len();
        let mut running = 0usize;

        let mut output_offsets = Vec::with_capacity(depth);
        for (i, &width) in widths.iter().enumerate() {
            output_offsets.push(running);
            running = grow(running, Some(width), Region::Outputs, i)?;
        }

        let mut weight_offsets = Vec::with_capacity(depth - 1);
        for i in 1..depth {
            weight_offsets.push(running);
            let block = widths[i - 1]
                .checked_add(1)
                .and_then(|fan_in| fan_in.checked_mul(widths[i]));
            running = grow(running, block, Region::Weights, i)?;
        }

        let mut stage_offsets = Vec::with_capacity(depth.saturating_sub(2));
        for i in 1..depth - 1 {
            stage_offsets.push(running);
            let block = widths[i].checked_mul(widths[i + 1]);
            running = grow(running, block, Region::Staging, i)?;
        }

        Ok(Layout {
            spec: spec.clone(),
            output_offsets,
            weight_offsets,
            stage_offsets,
            len: running,
        })
    }

    pub fn spec(&self) -> &LayerSpec {
        &self.spec
    }

    /// Total number of values the buffer must hold.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ── Block ranges ──────────────────────────────────────────────────────

    pub fn outputs(&self, layer: usize) -> Range<usize> {
        let start = self.output_offsets[layer];
        start..start + self.spec.width(layer)
    }

    /// Weight block of `layer`; layer 0 has none.
    pub fn weights(&self, layer: usize) -> Range<usize> {
        assert!(layer >= 1, "the input layer has no weights");
        let start = self.weight_offsets[layer - 1];
        start..start + self.spec.width(layer) * self.fan_in_slots(layer)
    }

    /// Staging block of hidden `layer`; input and output layers have none.
    pub fn staging(&self, layer: usize) -> Range<usize> {
        assert!(
            layer >= 1 && layer < self.spec.last(),
            "layer {layer} is not a hidden layer"
        );
        let start = self.stage_offsets[layer - 1];
        start..start + self.spec.width(layer) * self.spec.width(layer + 1)
    }

    /// The `fan_in + 1` weights of one node, bias last.
    pub fn weight_row(&self, layer: usize, node: usize) -> Range<usize> {
        debug_assert!(node < self.spec.width(layer));
        let slots = self.fan_in_slots(layer);
        let start = self.weights(layer).start + node * slots;
        start..start + slots
    }

    // ── Element indices ───────────────────────────────────────────────────

    #[inline]
    pub fn output(&self, layer: usize, node: usize) -> usize {
        debug_assert!(node < self.spec.width(layer));
        self.output_offsets[layer] + node
    }

    /// Slot `fan_in` is the bias.
    #[inline]
    pub fn weight(&self, layer: usize, node: usize, slot: usize) -> usize {
        debug_assert!(layer >= 1 && layer <= self.spec.last());
        debug_assert!(node < self.spec.width(layer));
        debug_assert!(slot < self.fan_in_slots(layer));
        self.weight_offsets[layer - 1] + node * self.fan_in_slots(layer) + slot
    }

    /// Factor relayed to `node` of hidden `layer` from downstream `parent`.
    #[inline]
    pub fn stage(&self, layer: usize, node: usize, parent: usize) -> usize {
        debug_assert!(layer >= 1 && layer < self.spec.last());
        debug_assert!(node < self.spec.width(layer));
        debug_assert!(parent < self.spec.width(layer + 1));
        self.stage_offsets[layer - 1] + node * self.spec.width(layer + 1) + parent
    }

    // ── Checked lookups for the public API ────────────────────────────────

    pub fn checked_output(&self, layer: usize, node: usize) -> Result<usize> {
        if layer > self.spec.last() || node >= self.spec.width(layer) {
            return Err(NetworkError::IndexOutOfRange {
                what: "output",
                layer,
                node,
                slot: 0,
            });
        }
        Ok(self.output(layer, node))
    }

    pub fn checked_weight(&self, layer: usize, node: usize, slot: usize) -> Result<usize> {
        if layer == 0
            || layer > self.spec.last()
            || node >= self.spec.width(layer)
            || slot > self.spec.width(layer - 1)
        {
            return Err(NetworkError::IndexOutOfRange {
                what: "weight",
                layer,
                node,
                slot,
            });
        }
        Ok(self.weight(layer, node, slot))
    }

    /// Every block of the buffer, in address order.
    pub fn blocks(&self) -> Vec<Block> {
        let last = self.spec.last();
        let outputs = (0..=last).map(|layer| Block {
            region: Region::Outputs,
            layer,
            range: self.outputs(layer),
        });
        let weights = (1..=last).map(|layer| Block {
            region: Region::Weights,
            layer,
            range: self.weights(layer),
        });
        let staging = (1..last).map(|layer| Block {
            region: Region::Staging,
            layer,
            range: self.staging(layer),
        });
        outputs.chain(weights).chain(staging).collect()
    }

    #[inline]
    fn fan_in_slots(&self, layer: usize) -> usize {
        self.spec.width(layer - 1) + 1
    }
}

fn grow(running: usize, block: Option<usize>, region: Region, layer: usize) -> Result<usize> {
    block
        .and_then(|size| running.checked_add(size))
        .ok_or(NetworkError::SizeOverflow { region, layer })
}

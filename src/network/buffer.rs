use std::ops::{Index, IndexMut, Range};

use rand::Rng;

use crate::error::{NetworkError, Result};
use crate::layout::Layout;

/// The single contiguous array holding a network's outputs, weights and
/// staging values, together with the offset tables that address it.
#[derive(Debug, Clone)]
pub struct NetworkBuffer {
    layout: Layout,
    data: Vec<f64>,
}

impl NetworkBuffer {
    /// Allocates a zeroed buffer of `layout.len()` values.
    ///
    /// Allocator refusal surfaces as [`NetworkError::ResourceExhausted`]
    /// instead of aborting the process.
    pub fn allocate(layout: Layout) -> Result<NetworkBuffer> {
        let len = layout.len();
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| NetworkError::ResourceExhausted { len })?;
        data.resize(len, 0.0);
        Ok(NetworkBuffer { layout, data })
    }

    /// Draws every weight (bias included) uniformly from `[-1, 1)`.
    ///
    /// Weights are drawn layer by layer, node by node, slot by slot, so a
    /// given RNG stream always produces the same network.
    pub fn initialize_weights<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let spec = self.layout.spec().clone();
        for layer in 1..spec.depth() {
            for node in 0..spec.width(layer) {
                for slot in 0..=spec.width(layer - 1) {
                    let idx = self.layout.weight(layer, node, slot);
                    self.data[idx] = rng.gen::<f64>() * 2.0 - 1.0;
                }
            }
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn slice(&self, range: Range<usize>) -> &[f64] {
        &self.data[range]
    }

    pub fn slice_mut(&mut self, range: Range<usize>) -> &mut [f64] {
        &mut self.data[range]
    }

    /// Borrows the offset tables and the raw values separately, for kernels
    /// that read the layout while writing the data.
    pub fn split_mut(&mut self) -> (&Layout, &mut [f64]) {
        (&self.layout, &mut self.data)
    }
}

impl Index<usize> for NetworkBuffer {
    type Output = f64;

    #[inline]
    fn index(&self, idx: usize) -> &f64 {
        &self.data[idx]
    }
}

impl IndexMut<usize> for NetworkBuffer {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut f64 {
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayerSpec, Region};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn buffer(widths: &[usize], seed: u64) -> NetworkBuffer {
        let spec = LayerSpec::new(widths.to_vec()).unwrap();
        let mut buffer = NetworkBuffer::allocate(Layout::plan(&spec).unwrap()).unwrap();
        buffer.initialize_weights(&mut StdRng::seed_from_u64(seed));
        buffer
    }

    #[test]
    fn allocation_matches_layout() {
        let buffer = buffer(&[3, 4, 2, 1], 1);
        assert_eq!(buffer.len(), buffer.layout().len());
    }

    #[test]
    fn init_only_touches_weights() {
        let buffer = buffer(&[3, 4, 2, 1], 7);
        for block in buffer.layout().blocks() {
            let values = buffer.slice(block.range.clone());
            match block.region {
                Region::Weights => {
                    assert!(values.iter().all(|w| (-1.0..1.0).contains(w)));
                    assert!(values.iter().any(|&w| w != 0.0));
                }
                Region::Outputs | Region::Staging => {
                    assert!(values.iter().all(|&v| v == 0.0));
                }
            }
        }
    }

    #[test]
    fn same_seed_same_weights() {
        let a = buffer(&[2, 5, 1], 42);
        let b = buffer(&[2, 5, 1], 42);
        let c = buffer(&[2, 5, 1], 43);
        let w = a.layout().weights(1).start..a.layout().weights(2).end;
        assert_eq!(a.slice(w.clone()), b.slice(w.clone()));
        assert_ne!(a.slice(w.clone()), c.slice(w));
    }
}

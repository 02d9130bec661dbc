use crate::activation::sigmoid_slope;
use crate::network::buffer::NetworkBuffer;

/// One online gradient step driven by the scalar output error `err`.
///
/// Sweeps from the output layer down to layer 1. The output layer has one
/// synthetic parent (the external error, factor 1). Every hidden layer `i`
/// has `widths[i+1]` parents, whose factors were left in `staging(i)` while
/// layer `i+1` was processed. Each contribution `dx` for upstream node `w`
/// is staged as `staging(i-1)[w][n]`, so that layer `i-1` later reads it
/// back through its own parent dimension.
///
/// Weights are updated in place with `dx * err * mu`. Callers guarantee a
/// fresh forward pass and a single-node output layer.
pub(crate) fn backward(buffer: &mut NetworkBuffer, err: f64, mu: f64) {
    let (layout, data) = buffer.split_mut();
    let spec = layout.spec();
    let last = spec.last();

    for layer in (1..=last).rev() {
        let fan_in = spec.width(layer - 1);
        let parents = if layer == last { 1 } else { spec.width(layer + 1) };

        for node in 0..spec.width(layer) {
            let out = data[layout.output(layer, node)];

            for parent in 0..parents {
                let factor = if layer == last {
                    1.0
                } else {
                    data[layout.stage(layer, node, parent)]
                };
                let node_slope = factor * sigmoid_slope(out);

                for slot in 0..=fan_in {
                    let input = if slot == fan_in {
                        1.0
                    } else {
                        data[layout.output(layer - 1, slot)]
                    };
                    let dx = node_slope * input;

                    // The bias slot has no upstream node to relay to.
                    if layer > 1 && slot < fan_in {
                        data[layout.stage(layer - 1, slot, node)] = dx;
                    }
                    data[layout.weight(layer, node, slot)] += dx * err * mu;
                }
            }
        }
    }
}

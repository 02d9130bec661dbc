use crate::activation::sigmoid;
use crate::network::buffer::NetworkBuffer;

/// Recomputes the outputs of layers `1..L` from the input block and weights.
///
/// Each node's bias sits in the last slot of its weight row and is
/// multiplied by a constant input of 1.
pub(crate) fn forward(buffer: &mut NetworkBuffer) {
    let (layout, data) = buffer.split_mut();
    let spec = layout.spec();

    for layer in 1..spec.depth() {
        let fan_in = spec.width(layer - 1);
        for node in 0..spec.width(layer) {
            let row = &data[layout.weight_row(layer, node)];
            let inputs = &data[layout.outputs(layer - 1)];

            let mut sum = 0.0;
            for (w, x) in row[..fan_in].iter().zip(inputs) {
                sum += w * x;
            }
            sum += row[fan_in] * 1.0;

            data[layout.output(layer, node)] = sigmoid(sum);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayerSpec, Layout};

    fn zeroed(widths: &[usize]) -> NetworkBuffer {
        let spec = LayerSpec::new(widths.to_vec()).unwrap();
        NetworkBuffer::allocate(Layout::plan(&spec).unwrap()).unwrap()
    }

    #[test]
    fn zero_weights_give_half() {
        let mut buffer = zeroed(&[3, 2, 1]);
        let inputs = buffer.layout().outputs(0);
        buffer.slice_mut(inputs).copy_from_slice(&[0.3, -2.0, 5.0]);
        forward(&mut buffer);
        let layout = buffer.layout().clone();
        assert_eq!(buffer.slice(layout.outputs(1)), &[0.5, 0.5]);
        assert_eq!(buffer[layout.output(2, 0)], 0.5);
    }

    #[test]
    fn hand_computed_single_layer() {
        let mut buffer = zeroed(&[2, 1]);
        let layout = buffer.layout().clone();
        // w0 = 0.5, w1 = -1.0, bias = 0.25
        buffer.slice_mut(layout.weights(1)).copy_from_slice(&[0.5, -1.0, 0.25]);
        buffer.slice_mut(layout.outputs(0)).copy_from_slice(&[2.0, 0.5]);
        forward(&mut buffer);
        let expected = sigmoid(0.5 * 2.0 - 1.0 * 0.5 + 0.25);
        assert!((buffer[layout.output(1, 0)] - expected).abs() < 1e-15);
    }

    #[test]
    fn does_not_touch_weights_or_staging() {
        let mut buffer = zeroed(&[2, 3, 1]);
        let layout = buffer.layout().clone();
        buffer.slice_mut(layout.weights(1)).fill(0.1);
        buffer.slice_mut(layout.staging(1)).fill(7.0);
        forward(&mut buffer);
        assert!(buffer.slice(layout.weights(1)).iter().all(|&w| w == 0.1));
        assert!(buffer.slice(layout.staging(1)).iter().all(|&s| s == 7.0));
    }
}

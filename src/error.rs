use thiserror::Error;

use crate::layout::Region;

/// Everything that can go wrong while building, driving or configuring a
/// [`Network`](crate::Network).
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Invalid layer widths or training hyperparameters.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The allocator refused a buffer of `len` values.
    #[error("cannot allocate a network buffer of {len} values")]
    ResourceExhausted { len: usize },

    /// The buffer size does not fit in `usize`; `layer` is where the running
    /// total overflowed.
    #[error("network buffer size overflows usize at the {region:?} block of layer {layer}")]
    SizeOverflow { region: Region, layer: usize },

    /// Backward only supports a single output node.
    #[error("backward pass needs exactly one output node, network has {output_width}")]
    UnsupportedTopology { output_width: usize },

    /// An operation was called out of order.
    #[error("usage error: {0}")]
    Usage(&'static str),

    #[error("input has {actual} values, input layer has {expected}")]
    InputLength { expected: usize, actual: usize },

    #[error("no {what} at layer {layer}, node {node}, slot {slot}")]
    IndexOutOfRange {
        what: &'static str,
        layer: usize,
        node: usize,
        slot: usize,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

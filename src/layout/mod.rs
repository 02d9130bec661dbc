pub mod planner;
pub mod spec;

pub use planner::{Block, Layout, Region};
pub use spec::LayerSpec;

pub mod trainer;
pub mod report;
pub mod train_config;

pub use trainer::{evaluate, train_online, xor_patterns, Pattern};
pub use report::TrainReport;
pub use train_config::TrainConfig;

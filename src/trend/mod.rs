pub mod level;
pub mod report;
pub mod rolling;
pub mod spikes;

pub use level::{LevelThresholds, TrendLevel};
pub use report::{TrendAnalyzer, TrendConfig, TrendReport};
pub use rolling::rolling_average;
pub use spikes::{SpikeConfig, SpikeDetector};

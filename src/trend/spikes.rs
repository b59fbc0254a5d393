use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::EngagementSnapshot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpikeConfig {
    /// Only meaningful above 1.0.
    pub multiplier: f64,
}

impl Default for SpikeConfig {
    fn default() -> Self {
        Self { multiplier: 1.1 }
    }
}

#[derive(Debug, Clone)]
pub struct SpikeDetector {
    config: SpikeConfig,
}

impl SpikeDetector {
    pub fn new(config: SpikeConfig) -> Self {
        Self { config }
    }

    /// Strictly above `average * multiplier` counts; input order is kept.
    pub fn detect(
        &self,
        snapshots: &[EngagementSnapshot],
        average: f64,
    ) -> Vec<(DateTime<Utc>, f64)> {
        snapshots
            .iter()
            .filter(|snapshot| snapshot.total_engagement > average * self.config.multiplier)
            .map(|snapshot| (snapshot.timestamp, snapshot.total_engagement))
            .collect()
    }
}

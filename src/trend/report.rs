use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::trend::{rolling_average, LevelThresholds, SpikeConfig, SpikeDetector, TrendLevel};
use crate::EngagementSnapshot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    pub window_hours: f64,
    pub spike: SpikeConfig,
    pub thresholds: LevelThresholds,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window_hours: 6.0,
            spike: SpikeConfig::default(),
            thresholds: LevelThresholds::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrendReport {
    pub window_hours: f64,
    pub rolling_average: f64,
    pub spikes: Vec<(DateTime<Utc>, f64)>,
    pub level: TrendLevel,
    pub latest: Option<EngagementSnapshot>,
}

#[derive(Debug, Clone)]
pub struct TrendAnalyzer {
    window_hours: f64,
    spike_detector: SpikeDetector,
    thresholds: LevelThresholds,
}

impl TrendAnalyzer {
    pub fn new(config: TrendConfig) -> Self {
        Self {
            window_hours: config.window_hours,
            spike_detector: SpikeDetector::new(config.spike),
            thresholds: config.thresholds,
        }
    }

    /// Snapshots are expected newest-first, the order the store returns
    /// them. An empty window is not an error: average 0, no spikes.
    pub fn analyze(&self, snapshots: &[EngagementSnapshot]) -> TrendReport {
        let average = rolling_average(snapshots);
        let spikes = self.spike_detector.detect(snapshots, average);
        let latest = snapshots.first().cloned();
        let latest_value = latest
            .as_ref()
            .map(|snapshot| snapshot.total_engagement)
            .unwrap_or(0.0);

        TrendReport {
            window_hours: self.window_hours,
            rolling_average: average,
            spikes,
            level: self.thresholds.classify(latest_value),
            latest,
        }
    }
}

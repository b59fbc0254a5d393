use chrono::{DateTime, TimeZone, Utc};

use pulse_rank::trend::{
    rolling_average, LevelThresholds, SpikeConfig, SpikeDetector, TrendAnalyzer, TrendConfig,
    TrendLevel,
};
use pulse_rank::EngagementSnapshot;

fn at_hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
}

fn snapshot(hour: u32, total_engagement: f64) -> EngagementSnapshot {
    EngagementSnapshot {
        timestamp: at_hour(hour),
        total_engagement,
    }
}

#[test]
fn rolling_average_of_empty_window_is_zero() {
    assert_eq!(rolling_average(&[]), 0.0);
}

#[test]
fn rolling_average_is_arithmetic_mean() {
    let snapshots = vec![snapshot(11, 10.0), snapshot(10, 20.0)];
    assert!((rolling_average(&snapshots) - 15.0).abs() < 1e-9);
}

#[test]
fn spike_detection_is_strictly_above_threshold() {
    let detector = SpikeDetector::new(SpikeConfig { multiplier: 1.1 });
    let snapshots = vec![
        snapshot(12, 115.0),
        snapshot(11, 109.0),
        snapshot(10, 110.0),
    ];

    let spikes = detector.detect(&snapshots, 100.0);

    assert_eq!(spikes.len(), 1);
    assert_eq!(spikes[0], (at_hour(12), 115.0));
}

#[test]
fn spikes_preserve_input_order() {
    let detector = SpikeDetector::new(SpikeConfig { multiplier: 1.1 });
    let snapshots = vec![
        snapshot(12, 300.0),
        snapshot(11, 50.0),
        snapshot(10, 400.0),
    ];

    let spikes = detector.detect(&snapshots, 100.0);

    assert_eq!(spikes, vec![(at_hour(12), 300.0), (at_hour(10), 400.0)]);
}

#[test]
fn level_thresholds_split_below_borderline_above() {
    let thresholds = LevelThresholds::default();

    assert_eq!(thresholds.classify(499_999.0), TrendLevel::Below);
    assert_eq!(thresholds.classify(500_000.0), TrendLevel::Borderline);
    assert_eq!(thresholds.classify(599_999.0), TrendLevel::Borderline);
    assert_eq!(thresholds.classify(600_000.0), TrendLevel::Above);
}

#[test]
fn analyzer_composes_full_report() {
    let analyzer = TrendAnalyzer::new(TrendConfig::default());
    // newest-first, the order the store returns
    let snapshots = vec![
        snapshot(12, 700_000.0),
        snapshot(11, 100_000.0),
        snapshot(10, 100_000.0),
    ];

    let report = analyzer.analyze(&snapshots);

    assert!((report.rolling_average - 300_000.0).abs() < 1e-9);
    assert_eq!(report.spikes, vec![(at_hour(12), 700_000.0)]);
    assert_eq!(report.level, TrendLevel::Above);
    assert_eq!(
        report.latest.as_ref().map(|s| s.total_engagement),
        Some(700_000.0)
    );
}

#[test]
fn analyzer_treats_empty_window_as_quiet() {
    let analyzer = TrendAnalyzer::new(TrendConfig::default());

    let report = analyzer.analyze(&[]);

    assert_eq!(report.rolling_average, 0.0);
    assert!(report.spikes.is_empty());
    assert_eq!(report.level, TrendLevel::Below);
    assert!(report.latest.is_none());
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelThresholds {
    pub low: f64,
    pub high: f64,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            low: 500_000.0,
            high: 600_000.0,
        }
    }
}

impl LevelThresholds {
    pub fn classify(&self, latest: f64) -> TrendLevel {
        if latest < self.low {
            TrendLevel::Below
        } else if latest < self.high {
            TrendLevel::Borderline
        } else {
            TrendLevel::Above
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendLevel {
    Below,
    Borderline,
    Above,
}

impl TrendLevel {
    pub fn label(self) -> &'static str {
        match self {
            TrendLevel::Below => "Below",
            TrendLevel::Borderline => "Borderline",
            TrendLevel::Above => "Above",
        }
    }
}

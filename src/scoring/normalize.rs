use serde::{Deserialize, Serialize};

use crate::RankingError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeConfig {
    pub time_weight: f64,
    pub window_hours: f64,
    pub max_possible_score: f64,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            time_weight: 0.5,
            window_hours: 24.0,
            max_possible_score: 100_000.0,
        }
    }
}

/// Per-author sums over the aggregation window.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorAggregate {
    pub total_engagement: f64,
    pub peak_engagement: f64,
    pub post_count: usize,
}

#[derive(Debug, Clone)]
pub struct ScoreNormalizer {
    config: NormalizeConfig,
}

impl ScoreNormalizer {
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    pub fn normalize(
        &self,
        author_id: &str,
        aggregate: AuthorAggregate,
        followers: f64,
    ) -> Result<f64, RankingError> {
        if !followers.is_finite() || followers <= 0.0 {
            return Err(RankingError::InvalidFollowerCount {
                author_id: author_id.to_string(),
                followers,
            });
        }

        let posts_per_hour = if self.config.window_hours > 0.0 {
            aggregate.post_count as f64 / self.config.window_hours
        } else {
            0.0
        };
        let adjusted =
            aggregate.total_engagement * (1.0 + self.config.time_weight * posts_per_hour);

        Ok(adjusted / followers)
    }
}

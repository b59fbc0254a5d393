use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Post;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricWeights {
    pub like: f64,
    pub retweet: f64,
    pub reply: f64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            like: 1.0,
            retweet: 2.0,
            reply: 1.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayConfig {
    pub half_life_hours: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            half_life_hours: 3.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DecayScorer {
    weights: MetricWeights,
    half_life_hours: f64,
}

impl DecayScorer {
    pub fn new(weights: MetricWeights, half_life_hours: f64) -> Self {
        Self {
            weights,
            half_life_hours,
        }
    }

    pub fn weighted(&self, post: &Post) -> f64 {
        post.likes as f64 * self.weights.like
            + post.retweets as f64 * self.weights.retweet
            + post.replies as f64 * self.weights.reply
    }

    /// Equals `weighted` at zero elapsed time, halves every
    /// `half_life_hours` after that. A non-positive half-life disables decay.
    pub fn score(&self, post: &Post, now: DateTime<Utc>) -> f64 {
        let weighted = self.weighted(post);
        if self.half_life_hours <= 0.0 {
            return weighted;
        }
        let hours = hours_since(post.created_at, now);
        weighted * 0.5f64.powf(hours / self.half_life_hours)
    }
}

fn hours_since(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let seconds = (now - created_at).num_seconds();
    if seconds <= 0 {
        // future-dated posts count as fresh, never a negative exponent
        return 0.0;
    }
    seconds as f64 / 3600.0
}

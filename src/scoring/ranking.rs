use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::config::EngagementConfig;
use crate::scoring::{AuthorAggregate, DecayScorer, ScoreNormalizer};
use crate::{hours_before, AuthorActivity, RankingError, ScoredAuthor};

/// Follower counts keyed by author id. Lookups are validated before any
/// scoring happens.
#[derive(Debug, Clone, Default)]
pub struct FollowerDirectory {
    counts: HashMap<String, f64>,
}

impl FollowerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            counts: pairs.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, author_id: impl Into<String>, followers: f64) {
        self.counts.insert(author_id.into(), followers);
    }

    pub fn followers_for(&self, author_id: &str) -> Option<f64> {
        self.counts.get(author_id).copied()
    }

    fn resolve(&self, author_id: &str) -> Result<f64, RankingError> {
        let followers = self.followers_for(author_id).ok_or_else(|| {
            RankingError::MissingFollowerCount {
                author_id: author_id.to_string(),
            }
        })?;
        if !followers.is_finite() || followers <= 0.0 {
            return Err(RankingError::InvalidFollowerCount {
                author_id: author_id.to_string(),
                followers,
            });
        }
        Ok(followers)
    }
}

#[derive(Debug, Clone)]
pub struct EngagementRanker {
    decay: DecayScorer,
    normalizer: ScoreNormalizer,
    window_hours: f64,
    max_possible_score: f64,
}

impl EngagementRanker {
    pub fn new(
        decay: DecayScorer,
        normalizer: ScoreNormalizer,
        window_hours: f64,
        max_possible_score: f64,
    ) -> Self {
        Self {
            decay,
            normalizer,
            window_hours,
            max_possible_score,
        }
    }

    pub fn from_config(config: &EngagementConfig) -> Self {
        Self::new(
            DecayScorer::new(config.weights.clone(), config.decay.half_life_hours),
            ScoreNormalizer::new(config.normalize.clone()),
            config.normalize.window_hours,
            config.normalize.max_possible_score,
        )
    }

    /// Scores and ranks the supplied authors. Every follower count is
    /// resolved before any scoring; a missing or non-positive mapping fails
    /// the whole call. Ties keep first-seen input order.
    pub fn rank(
        &self,
        activities: &[AuthorActivity],
        directory: &FollowerDirectory,
        now: DateTime<Utc>,
    ) -> Result<Vec<ScoredAuthor>, RankingError> {
        if activities.is_empty() {
            return Err(RankingError::NoAuthorsFound);
        }

        let mut followers = Vec::with_capacity(activities.len());
        for activity in activities {
            followers.push(directory.resolve(&activity.author.id)?);
        }

        let cutoff = hours_before(now, self.window_hours);
        // rescaling ceiling, not a clamp
        let ceiling = if self.max_possible_score > 0.0 {
            self.max_possible_score
        } else {
            1.0
        };

        let mut scored = Vec::with_capacity(activities.len());
        for (activity, followers) in activities.iter().zip(followers) {
            let recent: Vec<_> = activity
                .posts
                .iter()
                .filter(|post| post.created_at >= cutoff)
                .collect();

            let mut aggregate = AuthorAggregate::default();
            let score = if recent.is_empty() {
                0.0
            } else {
                aggregate.post_count = recent.len();
                for post in &recent {
                    let engagement = self.decay.score(post, now);
                    aggregate.total_engagement += engagement;
                    aggregate.peak_engagement = aggregate.peak_engagement.max(engagement);
                }
                let normalized =
                    self.normalizer
                        .normalize(&activity.author.id, aggregate, followers)?;
                normalized / ceiling
            };

            scored.push(ScoredAuthor {
                author_id: activity.author.id.clone(),
                display_name: activity.author.display_name.clone(),
                score,
                post_count: aggregate.post_count,
                peak_engagement: aggregate.peak_engagement,
                rank: 0,
            });
        }

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        for (index, author) in scored.iter_mut().enumerate() {
            author.rank = index + 1;
        }

        Ok(scored)
    }
}

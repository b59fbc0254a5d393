pub mod config;
pub mod scoring;
pub mod store;
pub mod trend;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EngagementConfig;
use crate::scoring::{EngagementRanker, FollowerDirectory};
use crate::trend::{TrendAnalyzer, TrendReport};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub content: String,
    pub likes: u32,
    pub retweets: u32,
    pub replies: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub id: String,
    pub display_name: String,
}

/// An author paired with their recent posts.
#[derive(Debug, Clone)]
pub struct AuthorActivity {
    pub author: AuthorProfile,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementSnapshot {
    pub timestamp: DateTime<Utc>,
    pub total_engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredAuthor {
    pub author_id: String,
    pub display_name: String,
    pub score: f64,
    pub post_count: usize,
    pub peak_engagement: f64,
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    #[error("no author records supplied for ranking")]
    NoAuthorsFound,
    #[error("follower count for {author_id} must be positive, got {followers}")]
    InvalidFollowerCount { author_id: String, followers: f64 },
    #[error("no follower count mapped for {author_id}")]
    MissingFollowerCount { author_id: String },
}

fn load_engagement_config() -> EngagementConfig {
    EngagementConfig::load(None)
        .map(|(config, _)| config)
        .unwrap_or_default()
}

pub fn rank_authors(
    activities: &[AuthorActivity],
    directory: &FollowerDirectory,
    now: DateTime<Utc>,
) -> Result<Vec<ScoredAuthor>, RankingError> {
    let config = load_engagement_config();
    rank_authors_with_config(activities, directory, now, &config)
}

pub fn rank_authors_with_config(
    activities: &[AuthorActivity],
    directory: &FollowerDirectory,
    now: DateTime<Utc>,
    config: &EngagementConfig,
) -> Result<Vec<ScoredAuthor>, RankingError> {
    EngagementRanker::from_config(config).rank(activities, directory, now)
}

pub fn build_trend_report(snapshots: &[EngagementSnapshot]) -> TrendReport {
    let config = load_engagement_config();
    build_trend_report_with_config(snapshots, &config)
}

pub fn build_trend_report_with_config(
    snapshots: &[EngagementSnapshot],
    config: &EngagementConfig,
) -> TrendReport {
    TrendAnalyzer::new(config.trend.clone()).analyze(snapshots)
}

pub fn hours_before(now: DateTime<Utc>, hours: f64) -> DateTime<Utc> {
    now - Duration::seconds((hours.max(0.0) * 3600.0) as i64)
}

pub fn format_number(value: f64) -> String {
    let digits = (value.round().max(0.0) as i64).to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}

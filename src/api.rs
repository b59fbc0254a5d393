use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pulse_rank::trend::TrendReport;
use pulse_rank::ScoredAuthor;

#[derive(Debug, Deserialize)]
pub struct EngagementQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ApiScoredAuthor {
    pub rank: usize,
    pub author_id: String,
    pub display_name: String,
    pub score: f64,
    pub post_count: usize,
    pub peak_engagement: f64,
}

impl From<ScoredAuthor> for ApiScoredAuthor {
    fn from(author: ScoredAuthor) -> Self {
        Self {
            rank: author.rank,
            author_id: author.author_id,
            display_name: author.display_name,
            score: author.score,
            post_count: author.post_count,
            peak_engagement: author.peak_engagement,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiEngagementResponse {
    pub generated_at: DateTime<Utc>,
    pub authors: Vec<ApiScoredAuthor>,
}

impl ApiEngagementResponse {
    pub fn from_ranking(ranked: Vec<ScoredAuthor>, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            authors: ranked.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiSpike {
    pub timestamp: DateTime<Utc>,
    pub total_engagement: f64,
}

#[derive(Debug, Serialize)]
pub struct ApiTrendResponse {
    pub window_hours: f64,
    pub rolling_average: f64,
    pub level: String,
    pub latest_timestamp: Option<DateTime<Utc>>,
    pub latest_engagement: Option<f64>,
    pub spikes: Vec<ApiSpike>,
}

impl ApiTrendResponse {
    pub fn from_report(report: TrendReport) -> Self {
        Self {
            window_hours: report.window_hours,
            rolling_average: report.rolling_average,
            level: report.level.label().to_string(),
            latest_timestamp: report.latest.as_ref().map(|snapshot| snapshot.timestamp),
            latest_engagement: report
                .latest
                .as_ref()
                .map(|snapshot| snapshot.total_engagement),
            spikes: report
                .spikes
                .into_iter()
                .map(|(timestamp, total_engagement)| ApiSpike {
                    timestamp,
                    total_engagement,
                })
                .collect(),
        }
    }
}

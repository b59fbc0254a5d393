use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AuthorProfile, EngagementSnapshot, Post};

/// Default number of tracked accounts shown in the ranking.
pub const DEFAULT_AUTHOR_LIMIT: usize = 7;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsFile {
    pub authors: Vec<AuthorProfile>,
    pub posts: Vec<Post>,
    pub snapshots: Vec<EngagementSnapshot>,
}

/// Read-only view over a metrics data file. The file is produced by a
/// separate ingestion process; this crate only queries it.
pub struct MetricsStore {
    data: MetricsFile,
}

impl MetricsStore {
    pub async fn load(path: PathBuf) -> Result<Self, String> {
        let data = if path.exists() {
            let payload = tokio::fs::read_to_string(&path)
                .await
                .map_err(|err| format!("failed to read metrics data: {}", err))?;
            if payload.trim().is_empty() {
                MetricsFile::default()
            } else {
                serde_json::from_str(&payload)
                    .map_err(|err| format!("failed to parse metrics data: {}", err))?
            }
        } else {
            MetricsFile::default()
        };

        info!(
            authors = data.authors.len(),
            posts = data.posts.len(),
            snapshots = data.snapshots.len(),
            "metrics store loaded"
        );

        Ok(Self { data })
    }

    pub fn from_data(data: MetricsFile) -> Self {
        Self { data }
    }

    /// Stable id order, capped at `limit`.
    pub fn list_authors(&self, limit: usize) -> Vec<AuthorProfile> {
        let mut authors = self.data.authors.clone();
        authors.sort_by(|a, b| a.id.cmp(&b.id));
        authors.truncate(limit);
        authors
    }

    pub fn recent_posts(&self, author_id: &str, since: DateTime<Utc>) -> Vec<Post> {
        self.data
            .posts
            .iter()
            .filter(|post| post.author_id == author_id && post.created_at >= since)
            .cloned()
            .collect()
    }

    /// Newest-first, matching what the trend analyzer expects.
    pub fn snapshots_since(&self, since: DateTime<Utc>) -> Vec<EngagementSnapshot> {
        let mut snapshots: Vec<_> = self
            .data
            .snapshots
            .iter()
            .filter(|snapshot| snapshot.timestamp >= since)
            .cloned()
            .collect();
        snapshots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        snapshots
    }
}

use chrono::{DateTime, TimeZone, Utc};

use pulse_rank::store::{MetricsFile, MetricsStore};
use pulse_rank::{AuthorProfile, EngagementSnapshot, Post};

fn at_hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
}

fn author(id: &str) -> AuthorProfile {
    AuthorProfile {
        id: id.to_string(),
        display_name: id.to_uppercase(),
    }
}

fn post(author_id: &str, hour: u32) -> Post {
    Post {
        id: format!("{}-{}", author_id, hour),
        author_id: author_id.to_string(),
        content: String::new(),
        likes: 1,
        retweets: 0,
        replies: 0,
        created_at: at_hour(hour),
    }
}

fn snapshot(hour: u32, total_engagement: f64) -> EngagementSnapshot {
    EngagementSnapshot {
        timestamp: at_hour(hour),
        total_engagement,
    }
}

#[test]
fn authors_come_back_in_stable_id_order_with_limit() {
    let store = MetricsStore::from_data(MetricsFile {
        authors: vec![author("charlie"), author("alice"), author("bob")],
        posts: Vec::new(),
        snapshots: Vec::new(),
    });

    let authors = store.list_authors(2);

    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].id, "alice");
    assert_eq!(authors[1].id, "bob");
}

#[test]
fn recent_posts_filter_by_author_and_cutoff() {
    let store = MetricsStore::from_data(MetricsFile {
        authors: vec![author("alice"), author("bob")],
        posts: vec![post("alice", 6), post("alice", 11), post("bob", 11)],
        snapshots: Vec::new(),
    });

    let posts = store.recent_posts("alice", at_hour(10));

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "alice-11");
}

#[test]
fn snapshots_come_back_newest_first() {
    let store = MetricsStore::from_data(MetricsFile {
        authors: Vec::new(),
        posts: Vec::new(),
        snapshots: vec![
            snapshot(9, 100.0),
            snapshot(12, 300.0),
            snapshot(10, 200.0),
        ],
    });

    let snapshots = store.snapshots_since(at_hour(10));

    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].timestamp, at_hour(12));
    assert_eq!(snapshots[1].timestamp, at_hour(10));
}

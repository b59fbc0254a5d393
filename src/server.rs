use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use std::{net::SocketAddr, sync::Arc};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

use crate::api::{ApiEngagementResponse, ApiTrendResponse, EngagementQuery};
use pulse_rank::config::EngagementConfig;
use pulse_rank::store::{MetricsStore, DEFAULT_AUTHOR_LIMIT};
use pulse_rank::{
    build_trend_report_with_config, hours_before, rank_authors_with_config, AuthorActivity,
    RankingError,
};

#[derive(Clone)]
struct AppState {
    store: Arc<MetricsStore>,
    config: Arc<EngagementConfig>,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let (config, config_path) = EngagementConfig::load(args.config)?;
    if let Some(path) = config_path.as_ref() {
        info!(path = %path.display(), "engagement config resolved");
    }
    let store = MetricsStore::load(args.data).await?;

    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/engagement", get(engagement_handler))
        .route("/api/trend", get(trend_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    info!(%addr, "serving engagement radar");
    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn engagement_handler(
    State(state): State<AppState>,
    Query(query): Query<EngagementQuery>,
) -> Result<Json<ApiEngagementResponse>, (StatusCode, String)> {
    let now = Utc::now();
    let limit = query.limit.unwrap_or(DEFAULT_AUTHOR_LIMIT);
    let cutoff = hours_before(now, state.config.normalize.window_hours);

    let activities: Vec<AuthorActivity> = state
        .store
        .list_authors(limit)
        .into_iter()
        .map(|author| {
            let posts = state.store.recent_posts(&author.id, cutoff);
            AuthorActivity { author, posts }
        })
        .collect();

    let directory = state.config.follower_directory();
    let ranked = rank_authors_with_config(&activities, &directory, now, &state.config).map_err(
        |err| match err {
            RankingError::NoAuthorsFound => {
                warn!("no author records found");
                (StatusCode::NOT_FOUND, err.to_string())
            }
            other => (StatusCode::UNPROCESSABLE_ENTITY, other.to_string()),
        },
    )?;

    Ok(Json(ApiEngagementResponse::from_ranking(ranked, now)))
}

async fn trend_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiTrendResponse>, (StatusCode, String)> {
    let now = Utc::now();
    let since = hours_before(now, state.config.trend.window_hours);
    let snapshots = state.store.snapshots_since(since);
    let report = build_trend_report_with_config(&snapshots, &state.config);
    Ok(Json(ApiTrendResponse::from_report(report)))
}

mod api;
mod server;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use pulse_rank::config::EngagementConfig;
use pulse_rank::store::{MetricsStore, DEFAULT_AUTHOR_LIMIT};
use pulse_rank::{
    build_trend_report_with_config, format_float, format_number, hours_before,
    rank_authors_with_config, AuthorActivity,
};

#[derive(Parser)]
#[command(name = "pulse-rank", about = "Account engagement ranking and trend radar")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Rank(RankArgs),
    Trend(TrendArgs),
    Serve(ServeArgs),
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone)]
struct RankArgs {
    #[arg(long, default_value = "data/metrics.json")]
    data: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = DEFAULT_AUTHOR_LIMIT)]
    limit: usize,
}

impl Default for RankArgs {
    fn default() -> Self {
        Self {
            data: PathBuf::from("data/metrics.json"),
            config: None,
            limit: DEFAULT_AUTHOR_LIMIT,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct TrendArgs {
    #[arg(long, default_value = "data/metrics.json")]
    data: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = "config/engagement.toml")]
    path: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long, default_value = "data/metrics.json")]
    data: PathBuf,
    #[arg(long, default_value = "webapp/dist")]
    web_root: String,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Rank(RankArgs::default()));

    match command {
        Command::Rank(args) => run_rank(args).await,
        Command::Trend(args) => run_trend(args).await,
        Command::Serve(args) => server::serve(args).await,
        Command::InitConfig(args) => run_init_config(args),
    }
}

fn run_init_config(args: InitConfigArgs) -> Result<(), String> {
    let config = EngagementConfig::default();
    config.write(&args.path)?;
    println!(
        "Wrote default engagement config to {}; fill in the accounts roster",
        args.path.display()
    );
    Ok(())
}

async fn run_rank(args: RankArgs) -> Result<(), String> {
    let (config, _) = EngagementConfig::load(args.config)?;
    let store = MetricsStore::load(args.data).await?;

    let now = Utc::now();
    let cutoff = hours_before(now, config.normalize.window_hours);
    let activities: Vec<AuthorActivity> = store
        .list_authors(args.limit)
        .into_iter()
        .map(|author| {
            let posts = store.recent_posts(&author.id, cutoff);
            AuthorActivity { author, posts }
        })
        .collect();

    let directory = config.follower_directory();
    let ranked = rank_authors_with_config(&activities, &directory, now, &config)
        .map_err(|err| err.to_string())?;

    println!(
        "Engagement ranking over the last {} hours:",
        format_float(config.normalize.window_hours, 0)
    );
    for author in &ranked {
        println!(
            "{:>2}. {} | score {} | posts {} | peak engagement {}",
            author.rank,
            author.display_name,
            format_float(author.score, 6),
            author.post_count,
            format_number(author.peak_engagement)
        );
    }

    Ok(())
}

async fn run_trend(args: TrendArgs) -> Result<(), String> {
    let (config, _) = EngagementConfig::load(args.config)?;
    let store = MetricsStore::load(args.data).await?;

    let now = Utc::now();
    let since = hours_before(now, config.trend.window_hours);
    let snapshots = store.snapshots_since(since);
    let report = build_trend_report_with_config(&snapshots, &config);

    println!(
        "Rolling average over the last {} hours: {}",
        format_float(report.window_hours, 0),
        format_number(report.rolling_average)
    );
    println!("Engagement level: {}", report.level.label());
    if let Some(latest) = &report.latest {
        println!(
            "Latest snapshot: {} at {}",
            format_number(latest.total_engagement),
            latest.timestamp.to_rfc3339()
        );
    }

    if report.spikes.is_empty() {
        println!(
            "No spikes above {}x average",
            format_float(config.trend.spike.multiplier, 1)
        );
    } else {
        println!("Spikes:");
        for (timestamp, value) in &report.spikes {
            println!("- {} {}", timestamp.to_rfc3339(), format_number(*value));
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}

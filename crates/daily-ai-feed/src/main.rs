//! Daily AI Research Feed - Entry Point

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use daily_ai_feed::{ArxivClient, Config, PaperService, server::FeedServer};

#[derive(Parser, Debug)]
#[command(name = "daily-ai-feed")]
#[command(about = "Web feed of the latest AI research papers from arXiv")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    host: IpAddr,

    /// HTTP server port
    #[arg(long, default_value = "5001", env = "PORT")]
    port: u16,

    /// Minutes a fetched list stays valid
    #[arg(long, env = "CACHE_TTL_MINUTES")]
    cache_ttl_minutes: Option<u64>,

    /// Recency window in days
    #[arg(long, env = "FETCH_DAYS_BACK")]
    days_back: Option<u32>,

    /// Maximum papers requested per fetch
    #[arg(long, env = "FETCH_MAX_RESULTS")]
    max_results: Option<u32>,

    /// Fetch papers before accepting requests
    #[arg(long)]
    warm: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::from_env()?;
    if let Some(minutes) = cli.cache_ttl_minutes {
        config.cache_ttl = Config::ttl_from_minutes(minutes).context("--cache-ttl-minutes is too large")?;
    }
    if let Some(days) = cli.days_back {
        config.days_back = days;
    }
    if let Some(max) = cli.max_results {
        config.max_results = max;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_url = %config.api_url,
        cache_ttl_minutes = config.cache_ttl_minutes(),
        days_back = config.days_back,
        max_results = config.max_results,
        "Starting Daily AI Research Feed"
    );

    let client = ArxivClient::new(&config)?;
    let service = PaperService::new(Arc::new(client), &config);

    if cli.warm {
        let papers = service.papers().await;
        tracing::info!(count = papers.len(), "Cache warmed");
    }

    let server = FeedServer::new(service);
    server.run_http(SocketAddr::new(cli.host, cli.port)).await
}

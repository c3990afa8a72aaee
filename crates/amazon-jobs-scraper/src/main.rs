//! Amazon Jobs Scraper - Entry Point
//!
//! Serves `GET /scrape-amazon-jobs` over HTTP.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use amazon_jobs_scraper::{config::Config, server::ScrapeServer, JobsClient};

#[derive(Parser, Debug)]
#[command(name = "amazon-jobs-scraper")]
#[command(about = "HTTP service that scrapes Amazon job listings")]
#[command(version)]
struct Cli {
    /// HTTP server port
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Stop after this many search pages (unlimited when unset)
    #[arg(long, env = "JOBS_MAX_PAGES")]
    max_pages: Option<usize>,

    /// Timeout in seconds for each outbound request (none when unset)
    #[arg(long, env = "JOBS_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,

    /// Timeout in seconds for establishing a connection (none when unset)
    #[arg(long, env = "JOBS_CONNECT_TIMEOUT_SECS")]
    connect_timeout_secs: Option<u64>,

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
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        max_pages = ?cli.max_pages,
        request_timeout_secs = ?cli.request_timeout_secs,
        connect_timeout_secs = ?cli.connect_timeout_secs,
        "Starting Amazon jobs scraper"
    );

    let config = Config::new()
        .with_max_pages(cli.max_pages)
        .with_request_timeout(cli.request_timeout_secs.map(Duration::from_secs))
        .with_connect_timeout(cli.connect_timeout_secs.map(Duration::from_secs));
    let client = JobsClient::new(config)?;

    ScrapeServer::new(client).run_http(cli.port).await
}

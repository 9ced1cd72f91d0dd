//! HTTP API server for election candidate, voter and biography lookups.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use ballot_scrape::{server, HttpFetcher, Scraper, ServerConfig};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "ballot_server", about = "Election data API backed by live page scraping")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides the configuration
    #[arg(short, long)]
    bind: Option<String>,

    /// Election cycle used in page names, overrides the configuration
    #[arg(long)]
    year: Option<u16>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(year) = cli.year {
        config.options.election_year = year;
    }

    let addr: SocketAddr = config
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {:?}", config.bind))?;

    let fetcher = HttpFetcher::new(config.user_agent.as_deref())?;
    let scraper = Arc::new(Scraper::new(fetcher, config.options.clone()));

    info!(%addr, year = config.options.election_year, "listening");
    warp::serve(server::routes(scraper, &config)).run(addr).await;
    Ok(())
}

mod markdown;
mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use shared::{Config, UpdateDesk};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "regulatory-summarizer")]
#[command(about = "Web UI to fetch, summarize and review regulatory updates")]
struct Args {
    /// Address to bind (overrides REGSUM_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides REGSUM_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// How many updates the Recent Updates tab shows (overrides REGSUM_RECENT_LIMIT)
    #[arg(long)]
    recent_limit: Option<usize>,
}

impl Args {
    fn apply(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(limit) = self.recent_limit {
            config.recent_limit = limit;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.apply(Config::from_env()?);

    let desk = Arc::new(UpdateDesk::demo(config.recent_limit));
    let app = routes::router(desk);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(
        %addr,
        recent_limit = config.recent_limit,
        "regulatory-summarizer listening"
    );

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}

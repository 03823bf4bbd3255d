use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use scorehub::config::Config;
use scorehub::espn::EspnClient;
use scorehub::favorites::FavoritesStore;
use scorehub::scoreboard::{RosterCache, Scoreboard, SystemClock};
use scorehub::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let favorites = FavoritesStore::open(&config.favorites_path)?;
    info!("Favorites store opened: {}", config.favorites_path);

    let client = EspnClient::new(
        Some(&config.sports_api_url),
        Duration::from_secs(config.request_timeout_secs),
        config.team_stats_concurrency,
    )?;

    let cache = RosterCache::new(
        Duration::from_secs(config.roster_cache_ttl_secs),
        Arc::new(SystemClock),
    );

    let scoreboard = Arc::new(Scoreboard::new(
        Arc::new(client),
        cache,
        Duration::from_secs(config.aggregate_timeout_secs),
    ));

    let app = server::router(AppState { scoreboard, favorites });
    let addr: SocketAddr = config.listen_addr.parse()?;
    info!("Scoreboard listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

mod config;
mod dashboard;
mod demo;
mod scoreboard;

use config::Config;
use dashboard::AppState;
use scoreboard::Scoreboard;

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

    let board = Scoreboard::new();

    if config.demo {
        info!("Demo mode – replaying scripted World Cup feed");
        demo::start_demo_feed(board.clone(), Duration::from_secs(config.demo_tick_secs));
    }

    let app = dashboard::router(AppState {
        board: board.clone(),
    });
    let addr: SocketAddr = config.dashboard_addr.parse()?;
    info!("Dashboard listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run dashboard server (blocks until shutdown)
    axum::serve(listener, app).await?;

    Ok(())
}

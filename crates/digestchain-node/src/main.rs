//! digestchain node — entry point.

mod config;
mod logging;
mod routes;
mod source;

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use digestchain_ledger::Ledger;

use crate::config::{Cli, NodeConfig};
use crate::routes::AppState;
use crate::source::ContentSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = NodeConfig::from_cli(Cli::parse());
    logging::init_logging(config.log_format, &config.log_level);

    // The ledger starts with exactly one genesis block, before any append
    // is accepted.
    let ledger = Arc::new(Ledger::bootstrap());
    let genesis = ledger.snapshot();
    info!(
        hash = %genesis.tail().expect("bootstrapped ledger has a tail").hash(),
        "ledger bootstrapped with genesis block"
    );

    let source = Arc::new(ContentSource::new(config.source.clone()));

    let app = routes::router(AppState { ledger, source });

    info!(addr = %config.listen, "listening");
    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

//! meow Endpoint Registry Server Entry Point

use anyhow::Context;
use clap::Parser;
use meow_registry::cli::Cli;
use meow_registry::config::StoreConfig;
use meow_registry::db::{self, valkey::ValkeyStore};
use meow_registry::registry::endpoints::EndpointRegistry;
use meow_registry::{logging, server, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init().context("failed to initialize logging")?;

    let store_config = StoreConfig::from_env()?;
    let store = ValkeyStore::connect(&store_config)
        .await
        .with_context(|| format!("connect to Valkey at {}", store_config.address))?;
    db::check_connectivity(&store)
        .await
        .with_context(|| format!("probe Valkey at {}", store_config.address))?;
    info!(
        "connected to valkey={} db={}",
        store_config.address, store_config.database
    );

    let state = AppState {
        endpoint_registry: EndpointRegistry::new(Arc::new(store)),
    };

    let bind_addr = cli.bind_addr();
    info!("listen to {}", bind_addr);
    server::run(state, &bind_addr)
        .await
        .with_context(|| format!("serve on {bind_addr}"))?;
    Ok(())
}

//! envview server binary
//!
//! Snapshots the process environment once and serves it on `/env` and
//! `/json` until interrupted.

use anyhow::Context;
use envtree::IgnoreFilter;
use envview::{
    bind, load_dotenv, logging, serve, shutdown_signal, snapshot_process_env, AppState,
    ServerConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let config = ServerConfig::load().context("Failed to load server configuration")?;

    // The override file must be applied before the snapshot is taken
    load_dotenv(&config.environment.dotenv_path);
    let variables = snapshot_process_env(&IgnoreFilter::default());

    let listener = bind(&config).await?;
    tracing::info!("Server running on port: {}", config.listen.port);

    serve(listener, AppState::new(variables), shutdown_signal()).await?;

    tracing::info!("envview server shut down gracefully");
    Ok(())
}

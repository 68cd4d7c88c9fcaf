pub mod api;
pub mod config;
pub mod core_state;
pub mod db;
pub mod models;
pub mod validation;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::core_state::CoreState;

/// Errors that stop the process before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] db::DatabaseError),
    #[error(transparent)]
    Server(#[from] api::ServerError),
    #[error("Failed to listen for shutdown signal: {0}")]
    Signal(std::io::Error),
}

/// Initialize tracing from `RUST_LOG`, falling back to the default filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

/// Process entry point. Serves until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = AppConfig::from_env()?;
    let bind_addr = config.bind_addr;
    tracing::info!(
        db = %config.db_path.display(),
        static_dir = %config.static_dir.display(),
        "Configuration loaded"
    );

    let core = Arc::new(CoreState::new(config));
    core.prepare_database()?;

    let mut server = api::start_server_on(core, bind_addr).await?;
    tracing::info!("Listening on http://{}", server.session.server_addr);

    tokio::signal::ctrl_c().await.map_err(StartupError::Signal)?;
    tracing::info!("Ctrl-C received, shutting down");

    server.shutdown();
    server.join().await;
    Ok(())
}

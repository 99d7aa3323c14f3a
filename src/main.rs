use anyhow::Result;
use textgen_server::{config, server};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log filter: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let env_filter = match config::log_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .init();

    info!(
        "Starting text generation server with log filter: {}",
        log_level
    );

    // A model that fails to load must keep the process from serving
    if let Err(e) = server::run(config).await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

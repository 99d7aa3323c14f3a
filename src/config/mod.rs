mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration named by `CONFIG_PATH`, or `config.yaml`.
///
/// Built-in defaults are used when `CONFIG_PATH` is unset and `config.yaml`
/// does not exist. An explicitly named file must exist.
pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(path) => load_from(path).await,
        Err(_) if !Path::new(DEFAULT_CONFIG_PATH).exists() => {
            debug!(
                "No {} found, using default configuration",
                DEFAULT_CONFIG_PATH
            );
            Ok(Config::default())
        }
        Err(_) => load_from(DEFAULT_CONFIG_PATH).await,
    }
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Parses a log level or `EnvFilter` directive list such as
/// `textgen_server=debug,tower_http=info`.
pub fn log_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| Error::config(format!("Invalid log filter '{}': {}", directives, e)))
}

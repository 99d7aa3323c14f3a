use super::mocks::MockGenerator;
use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;
use tempfile::TempDir;
use textgen_server::{
    Result,
    config::{Config, LogsConfig, ModelConfig, ServerConfig},
    generation::TextGenerator,
    server::{self, handlers::AppState},
};
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            expose_error_details: false,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        model: ModelConfig {
            provider: "openai".to_string(),
            base_url: "http://localhost:8000/v1".to_string(),
            api_key: "test-api-key".to_string(),
            model: "distilgpt2".to_string(),
            default_max_length: 50,
            temperature: None,
        },
    }
}

pub fn create_app_state(generator: Arc<dyn TextGenerator>) -> AppState {
    let config = create_test_config();
    AppState {
        generator,
        default_max_length: config.model.default_max_length,
        expose_error_details: config.server.expose_error_details,
    }
}

/// Router wired to `generator`, with the production routes and layers.
pub fn create_test_app(generator: Arc<dyn TextGenerator>) -> Router {
    server::router(create_app_state(generator))
}

/// In-process HTTP harness around [`create_test_app`].
pub fn create_test_server(generator: Arc<MockGenerator>) -> TestServer {
    TestServer::new(create_test_app(generator)).unwrap()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  expose_error_details: true
  logs:
    level: "debug"

model:
  provider: "openai"
  base_url: "http://localhost:8000/v1"
  api_key: "test-api-key"
  model: "gpt2-medium"
  default_max_length: 64
  temperature: 0.7
"#;

/// Only the fields most deployments change
pub const MINIMAL_CONFIG_YAML: &str = r#"
model:
  base_url: "http://llm:8000/v1"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;

mod openai;
mod types;

pub use openai::OpenAiGenerator;
pub use types::*;

use crate::{Error, Result, config::ModelConfig};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// A loaded text-generation model.
///
/// One instance is created at startup and shared by every request, so
/// implementations must tolerate concurrent calls.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the top generated candidate for `prompt`, prompt included.
    ///
    /// `max_length` bounds the newly generated tokens only; the prompt's own
    /// tokens are not counted against it.
    async fn generate(&self, prompt: &str, max_length: u32) -> Result<String>;
}

/// Builds the generator named by `config.provider` and checks it is usable.
pub async fn load(config: &ModelConfig) -> Result<Arc<dyn TextGenerator>> {
    match config.provider.as_str() {
        "openai" => {
            let generator = OpenAiGenerator::new(config);
            generator.verify_model().await?;
            info!(
                "Model {} available at {}",
                generator.model(),
                config.base_url
            );
            Ok(Arc::new(generator))
        }
        other => Err(Error::config(format!("Unsupported model provider: {}", other))),
    }
}

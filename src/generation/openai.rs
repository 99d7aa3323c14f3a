use super::TextGenerator;
use crate::{Error, Result, config::ModelConfig};
use async_openai::{Client, config::OpenAIConfig, types::CreateCompletionRequestArgs};
use async_trait::async_trait;
use tracing::debug;

/// Text generation against an OpenAI-compatible completions backend.
///
/// The client is reentrant, so one instance serves all requests without
/// locking.
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
}

impl OpenAiGenerator {
    pub fn new(config: &ModelConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key.clone());

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url.clone());
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Confirms the backend serves the configured model.
    pub async fn verify_model(&self) -> Result<()> {
        let models = self
            .client
            .models()
            .list()
            .await
            .map_err(|e| Error::model_load(format!("Failed to list backend models: {}", e)))?;

        debug!("Backend lists {} models", models.data.len());

        if models.data.iter().any(|m| m.id == self.model) {
            Ok(())
        } else {
            Err(Error::model_load(format!(
                "Model '{}' is not served by the backend",
                self.model
            )))
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str, max_length: u32) -> Result<String> {
        if max_length == 0 {
            return Err(Error::generation("max_length must be a positive integer"));
        }

        let mut request_builder = CreateCompletionRequestArgs::default();
        request_builder
            .model(&self.model)
            .prompt(prompt)
            .max_tokens(max_length)
            .n(1u8)
            .echo(true);

        if let Some(temperature) = self.temperature {
            request_builder.temperature(temperature);
        }

        let request = request_builder.build()?;
        let response = self.client.completions().create(request).await?;

        debug!(
            "Received completion response with {} choices",
            response.choices.len()
        );

        response
            .choices
            .into_iter()
            .min_by_key(|choice| choice.index)
            .map(|choice| choice.text)
            .ok_or_else(|| Error::generation("Backend returned no candidates"))
    }
}

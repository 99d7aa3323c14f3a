use crate::{Error, Result};

/// Number of prompt characters included in request logs.
pub const PROMPT_PREVIEW_CHARS: usize = 50;

/// A validated generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_length: u32,
}

impl GenerationRequest {
    /// Builds a request from optional body fields.
    ///
    /// A missing, `null` or empty prompt is rejected with
    /// [`Error::MissingPrompt`]; an absent `max_length` takes
    /// `default_max_length`.
    pub fn new(
        prompt: Option<String>,
        max_length: Option<u32>,
        default_max_length: u32,
    ) -> Result<Self> {
        let prompt = match prompt {
            Some(prompt) if !prompt.is_empty() => prompt,
            _ => return Err(Error::MissingPrompt),
        };

        Ok(Self {
            prompt,
            max_length: max_length.unwrap_or(default_max_length),
        })
    }

    /// Leading characters of the prompt, for logging.
    pub fn prompt_preview(&self) -> &str {
        match self.prompt.char_indices().nth(PROMPT_PREVIEW_CHARS) {
            Some((idx, _)) => &self.prompt[..idx],
            None => &self.prompt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub prompt: String,
    pub generated_text: String,
}

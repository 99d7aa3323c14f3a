use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Message returned to clients for internal failures when details are hidden.
pub const GENERIC_GENERATION_ERROR: &str = "Error generating text";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Model load error: {0}")]
    ModelLoad(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("No prompt provided")]
    MissingPrompt,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn model_load(msg: impl Into<String>) -> Self {
        Self::ModelLoad(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Text that may be sent back to an HTTP client for this error.
    ///
    /// Validation and parse errors describe the caller's own input and are
    /// always reported. Everything else is internal and only reported
    /// verbatim when `expose_details` is set.
    pub fn public_message(&self, expose_details: bool) -> String {
        match self {
            Self::MissingPrompt => self.to_string(),
            Self::InvalidRequest(msg) => msg.clone(),
            _ if expose_details => self.to_string(),
            _ => GENERIC_GENERATION_ERROR.to_string(),
        }
    }
}

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;

pub const HEALTHY: &str = "healthy";

/// Fields of a `POST /generate` body.
///
/// Built from the raw JSON so the prompt is checked before any other field
/// is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub max_length: Option<u32>,
}

impl GenerateRequest {
    /// Extracts the prompt and optional `max_length` from a request body.
    ///
    /// A missing or falsy prompt (`null`, `""`, `0`, `false`, `[]`, `{}`)
    /// yields [`Error::MissingPrompt`] whatever the other fields hold. A
    /// non-object body, a non-string prompt or a `max_length` that is not a
    /// `u32` yields [`Error::InvalidRequest`]. `null` for `max_length` means
    /// absent.
    pub fn from_body(body: Value) -> Result<Self> {
        let Value::Object(mut fields) = body else {
            return Err(Error::invalid_request("Request body must be a JSON object"));
        };

        let prompt = match fields.remove("prompt") {
            Some(prompt) if !is_falsy(&prompt) => prompt,
            _ => return Err(Error::MissingPrompt),
        };

        let Value::String(prompt) = prompt else {
            return Err(Error::invalid_request("prompt: expected a string"));
        };

        let max_length = match fields.remove("max_length") {
            None | Some(Value::Null) => None,
            Some(value) => Some(
                serde_json::from_value::<u32>(value)
                    .map_err(|e| Error::invalid_request(format!("max_length: {}", e)))?,
            ),
        };

        Ok(Self { prompt, max_length })
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub prompt: String,
    pub generated_text: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

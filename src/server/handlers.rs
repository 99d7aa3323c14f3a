use super::types::{ErrorResponse, GenerateRequest, GenerateResponse, HEALTHY, HealthResponse};
use crate::{
    Error,
    generation::{GenerationRequest, GenerationResult, TextGenerator},
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub default_max_length: u32,
    pub expose_error_details: bool,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY.to_string(),
    })
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();

    match process(&state, request_id, payload).await {
        Ok(result) => {
            debug!(%request_id, "Generated {} bytes", result.generated_text.len());
            Ok(Json(GenerateResponse {
                prompt: result.prompt,
                generated_text: result.generated_text,
            }))
        }
        Err(e) => Err(error_response(&state, request_id, e)),
    }
}

async fn process(
    state: &AppState,
    request_id: Uuid,
    payload: Result<Json<Value>, JsonRejection>,
) -> crate::Result<GenerationResult> {
    let Json(body) = payload.map_err(|rejection| Error::invalid_request(rejection.body_text()))?;
    let body = GenerateRequest::from_body(body)?;
    let request =
        GenerationRequest::new(Some(body.prompt), body.max_length, state.default_max_length)?;

    info!(
        %request_id,
        "Generating text for prompt: {}...",
        request.prompt_preview()
    );

    let generated_text = state
        .generator
        .generate(&request.prompt, request.max_length)
        .await?;

    Ok(GenerationResult {
        prompt: request.prompt,
        generated_text,
    })
}

fn error_response(
    state: &AppState,
    request_id: Uuid,
    e: Error,
) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        Error::MissingPrompt => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!(%request_id, "Error generating text: {}", e);
    } else {
        debug!(%request_id, "Rejected request: {}", e);
    }

    (
        status,
        Json(ErrorResponse {
            error: e.public_message(state.expose_error_details),
        }),
    )
}

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{GenerateRequest, GenerateResponse, HealthResponse, RootResponse, TtsRequest};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::upstream::SpeechAudio;

pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    // Validate input
    if request.prompt.is_empty() {
        return Err(AppError::BadRequest("No prompt provided".into()));
    }

    let text = state.generator.generate(&request.prompt).await?;

    Ok(Json(GenerateResponse { text }))
}

pub async fn tts(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TtsRequest>,
) -> Result<Response, AppError> {
    // Validate input before touching the upstream
    if request.text.is_empty() {
        return Err(AppError::BadRequest("No text provided".into()));
    }

    let audio = state.speech.synthesize(&request.text).await?;

    // Return audio response
    let headers = [(header::CONTENT_TYPE, "audio/mpeg")];
    Ok(match audio {
        SpeechAudio::Buffered(bytes) => (StatusCode::OK, headers, bytes).into_response(),
        SpeechAudio::Streamed(stream) => {
            (StatusCode::OK, headers, Body::from_stream(stream)).into_response()
        }
    })
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "ByteBite API is running".to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        time: chrono::Utc::now().to_rfc3339(),
    })
}

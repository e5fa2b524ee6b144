use std::any::Any;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::config::Config;
use crate::error::ErrorResponse;
use crate::upstream::{ElevenLabsClient, GeminiClient};

pub struct AppState {
    pub generator: GeminiClient,
    pub speech: ElevenLabsClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            generator: GeminiClient::new(&config.gemini_api_key),
            speech: ElevenLabsClient::new(
                &config.eleven_labs_api_key,
                config.tts_endpoint,
                config.tts_timeout,
            ),
        }
    }
}

pub fn create_router(state: Arc<AppState>, allowed_origins: &[String]) -> Router {
    let cors = if allowed_origins.is_empty() {
        CorsLayer::new().allow_origin(AnyOrigin)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid origin: {}", o);
                    None
                }
            })
            .collect();
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    };
    let cors = cors
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // CORS is layered outside the panic catcher so even panic responses
    // stay readable by browser callers.
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .route("/generate", post(handlers::generate))
        .route("/tts", post(handlers::tts))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };

    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "internal server error".to_string(),
        }),
    )
        .into_response()
}

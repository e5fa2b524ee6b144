use std::time::Duration;

use crate::upstream::TtsEndpoint;

const DEFAULT_TTS_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration, read once from the environment at startup and
/// passed explicitly to the router state. Keys are never read from globals
/// after this point, so tests can construct a `Config` with fake credentials.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the language-generation provider.
    pub gemini_api_key: String,
    /// API key for the voice-synthesis provider.
    pub eleven_labs_api_key: String,
    /// Origins allowed to read responses cross-origin. Empty means any origin.
    pub allowed_origins: Vec<String>,
    /// Which upstream TTS endpoint variant to call.
    pub tts_endpoint: TtsEndpoint,
    /// Timeout on the speech-synthesis call. `None` means unbounded.
    pub tts_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        let gemini_api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let eleven_labs_api_key = std::env::var("ELEVEN_LABS_API_KEY").unwrap_or_default();

        if gemini_api_key.is_empty() {
            tracing::warn!("GEMINI_API_KEY is not set; /generate will fail upstream");
        }
        if eleven_labs_api_key.is_empty() {
            tracing::warn!("ELEVEN_LABS_API_KEY is not set; /tts will fail upstream");
        }

        Self {
            gemini_api_key,
            eleven_labs_api_key,
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
            tts_endpoint: parse_tts_endpoint(std::env::var("TTS_STREAMING").ok().as_deref()),
            tts_timeout: parse_tts_timeout(std::env::var("TTS_TIMEOUT_SECS").ok().as_deref()),
        }
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_tts_endpoint(value: Option<&str>) -> TtsEndpoint {
    match value {
        Some("1") | Some("true") | Some("yes") => TtsEndpoint::Streamed,
        _ => TtsEndpoint::Buffered,
    }
}

// "0" disables the timeout; unset or unparseable falls back to the default.
fn parse_tts_timeout(value: Option<&str>) -> Option<Duration> {
    match value.and_then(|v| v.parse::<u64>().ok()) {
        Some(0) => None,
        Some(secs) => Some(Duration::from_secs(secs)),
        None => Some(Duration::from_secs(DEFAULT_TTS_TIMEOUT_SECS)),
    }
}

use std::time::Duration;

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::StreamExt;

use crate::error::AppError;

const ELEVEN_LABS_BASE_URL: &str = "https://api.elevenlabs.io";

/// Fixed voice and model identifiers; not runtime configuration.
pub const VOICE_ID: &str = "EXAVITQu4vr4xnSDxMaL";
pub const TTS_MODEL: &str = "eleven_multilingual_v2";

const STABILITY: f64 = 0.5;
const SIMILARITY_BOOST: f64 = 0.5;

/// Which upstream endpoint variant to call. Both are legitimate choices;
/// the streamed variant appends `/stream` and relays chunked audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TtsEndpoint {
    #[default]
    Buffered,
    Streamed,
}

/// Synthesized audio, either fully buffered or as the upstream byte stream.
pub enum SpeechAudio {
    Buffered(Bytes),
    Streamed(BoxStream<'static, Result<Bytes, reqwest::Error>>),
}

/// Client for the voice-synthesis upstream.
pub struct ElevenLabsClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    endpoint: TtsEndpoint,
    timeout: Option<Duration>,
}

impl ElevenLabsClient {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: TtsEndpoint,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: ELEVEN_LABS_BASE_URL.to_string(),
            endpoint,
            timeout,
        }
    }

    /// Point the client at a different upstream, used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Single synthesis call with fixed voice settings; no retry.
    pub async fn synthesize(&self, text: &str) -> Result<SpeechAudio, AppError> {
        let payload = serde_json::json!({
            "text": text,
            "model_id": TTS_MODEL,
            "voice_settings": {
                "stability": STABILITY,
                "similarity_boost": SIMILARITY_BOOST,
            },
        });

        let mut request = self
            .http
            .post(self.synthesis_url())
            .header("xi-api-key", &self.api_key)
            .json(&payload);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        match self.endpoint {
            TtsEndpoint::Buffered => Ok(SpeechAudio::Buffered(response.bytes().await?)),
            TtsEndpoint::Streamed => Ok(SpeechAudio::Streamed(response.bytes_stream().boxed())),
        }
    }

    fn synthesis_url(&self) -> String {
        let mut url = format!("{}/v1/text-to-speech/{}", self.base_url, VOICE_ID);
        if self.endpoint == TtsEndpoint::Streamed {
            url.push_str("/stream");
        }
        url
    }
}

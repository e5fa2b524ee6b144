pub mod elevenlabs;
pub mod gemini;

pub use elevenlabs::{ElevenLabsClient, SpeechAudio, TtsEndpoint};
pub use gemini::GeminiClient;

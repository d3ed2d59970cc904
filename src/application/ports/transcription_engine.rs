use async_trait::async_trait;

use crate::domain::Transcript;

/// Converts raw audio bytes into a transcript in the given language.
///
/// Implementations differ in latency and failure causes (remote polling
/// vs. local inference) but share this surface, so the orchestrator
/// never cares which one it holds.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        language_code: &str,
    ) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("provider reported error: {0}")]
    ProviderError(String),
    #[error("transcription not finished after {attempts} polls")]
    Timeout { attempts: u32 },
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
}

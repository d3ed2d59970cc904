use std::sync::Arc;

use crate::application::ports::{
    GradingClient, GradingError, ReferenceCatalog, TranscriptionEngine, TranscriptionError,
};
use crate::domain::EvaluationResult;

/// Top-level coordinator of one evaluation: resolve the reference
/// sentence, transcribe the audio, grade the transcript, merge.
///
/// Holds no per-request state; independent requests may run
/// concurrently without synchronization. Nothing in the pipeline
/// retries; this layer only classifies failures.
pub struct EvaluationService<T, G>
where
    T: TranscriptionEngine + ?Sized,
    G: GradingClient + ?Sized,
{
    catalog: Arc<dyn ReferenceCatalog>,
    transcription_engine: Arc<T>,
    grading_client: Arc<G>,
    language_code: String,
}

impl<T, G> EvaluationService<T, G>
where
    T: TranscriptionEngine + ?Sized,
    G: GradingClient + ?Sized,
{
    pub fn new(
        catalog: Arc<dyn ReferenceCatalog>,
        transcription_engine: Arc<T>,
        grading_client: Arc<G>,
        language_code: String,
    ) -> Self {
        Self {
            catalog,
            transcription_engine,
            grading_client,
            language_code,
        }
    }

    pub async fn evaluate(
        &self,
        sentence_id: &str,
        audio_data: &[u8],
    ) -> Result<EvaluationResult, EvaluationError> {
        // Empty audio is rejected before the catalog is consulted, so
        // the caller sees InvalidInput even for an unknown sentence_id.
        if audio_data.is_empty() {
            return Err(EvaluationError::InvalidInput(
                "audio payload is empty".to_string(),
            ));
        }

        let sentence = self
            .catalog
            .lookup(sentence_id)
            .ok_or_else(|| EvaluationError::SentenceNotFound(sentence_id.to_string()))?;

        let transcript = self
            .transcription_engine
            .transcribe(audio_data, &self.language_code)
            .await
            .map_err(|e| {
                tracing::error!(sentence_id = %sentence_id, error = %e, "Transcription failed");
                EvaluationError::TranscriptionFailed(e)
            })?;

        tracing::debug!(
            sentence_id = %sentence_id,
            transcript_chars = transcript.as_str().len(),
            "Transcript obtained"
        );

        let judgment = self
            .grading_client
            .grade(&sentence.text, transcript.as_str())
            .await
            .map_err(|e| {
                tracing::error!(sentence_id = %sentence_id, error = %e, "Grading failed");
                EvaluationError::GradingFailed(e)
            })?;

        tracing::info!(
            sentence_id = %sentence_id,
            overall_score = judgment.overall_score,
            "Evaluation completed"
        );

        Ok(EvaluationResult::merge(
            judgment,
            sentence.id,
            transcript.into_string(),
        ))
    }
}

/// Outward-facing failure taxonomy of one evaluation. Provider-side
/// causes are carried as sources for the log, not for the caller.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("sentence not found: {0}")]
    SentenceNotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("transcription failed")]
    TranscriptionFailed(#[source] TranscriptionError),
    #[error("grading failed")]
    GradingFailed(#[source] GradingError),
}

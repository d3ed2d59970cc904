use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::assemblyai_engine::AssemblyAiEngine;
use super::candle_whisper_engine::CandleWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionProvider {
    AssemblyAi,
    Local,
}

impl TranscriptionProvider {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "assemblyai" => Ok(TranscriptionProvider::AssemblyAi),
            "local" => Ok(TranscriptionProvider::Local),
            other => Err(format!(
                "Invalid transcription provider: {}. Expected: assemblyai or local",
                other
            )),
        }
    }
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    /// Builds the selected engine behind the shared port.
    ///
    /// An absent API key is not an error here: the remote engine
    /// surfaces `MissingCredential` on its first call instead, so a
    /// locally-configured deployment never needs the key at startup.
    pub fn create(
        provider: TranscriptionProvider,
        api_key: String,
        base_url: Option<String>,
        whisper_model: &str,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match provider {
            TranscriptionProvider::AssemblyAi => {
                Ok(Arc::new(AssemblyAiEngine::new(api_key, base_url)?))
            }
            TranscriptionProvider::Local => {
                let engine = CandleWhisperEngine::new(whisper_model)?;
                Ok(Arc::new(engine))
            }
        }
    }
}

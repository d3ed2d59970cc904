pub mod audio_decoder;
mod assemblyai_engine;
mod candle_whisper_engine;
mod transcription_engine_factory;

pub use assemblyai_engine::AssemblyAiEngine;
pub use candle_whisper_engine::CandleWhisperEngine;
pub use transcription_engine_factory::{TranscriptionEngineFactory, TranscriptionProvider};

mod grading_client;
mod reference_catalog;
mod transcription_engine;

pub use grading_client::{GradingClient, GradingError};
pub use reference_catalog::ReferenceCatalog;
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};

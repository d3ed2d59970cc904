mod evaluation_result;
mod judgment;
mod rating_level;
mod reference_sentence;
mod transcript;
mod transcription_job;

pub use evaluation_result::EvaluationResult;
pub use judgment::{Judgment, JudgmentError};
pub use rating_level::RatingLevel;
pub use reference_sentence::ReferenceSentence;
pub use transcript::Transcript;
pub use transcription_job::TranscriptionJobStatus;

use serde::Serialize;

use super::{Judgment, RatingLevel};

/// The outward response contract of one evaluation: the grading
/// backend's judgment merged with the request-scoped identifiers.
///
/// Built once, returned once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub sentence_id: String,
    pub overall_score: u8,
    pub accuracy: RatingLevel,
    pub fluency: RatingLevel,
    pub integrity: RatingLevel,
    pub missing_words: Vec<String>,
    pub mispronounced_words: Vec<String>,
    pub suggestions: Vec<String>,
    pub user_text: String,
}

impl EvaluationResult {
    pub fn merge(judgment: Judgment, sentence_id: String, user_text: String) -> Self {
        Self {
            sentence_id,
            overall_score: judgment.overall_score,
            accuracy: judgment.accuracy,
            fluency: judgment.fluency,
            integrity: judgment.integrity,
            missing_words: judgment.missing_words,
            mispronounced_words: judgment.mispronounced_words,
            suggestions: judgment.suggestions,
            user_text,
        }
    }
}

use std::str::FromStr;

use super::RatingLevel;

/// Number of improvement suggestions the grading backend must produce.
pub const SUGGESTION_COUNT: usize = 3;

/// The structured scoring object returned by the grading backend,
/// validated at construction.
///
/// Every field the backend is contracted to produce must be present and
/// in range before a `Judgment` exists; callers never see a partially
/// valid one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgment {
    pub overall_score: u8,
    pub accuracy: RatingLevel,
    pub fluency: RatingLevel,
    pub integrity: RatingLevel,
    pub missing_words: Vec<String>,
    pub mispronounced_words: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum JudgmentError {
    #[error("overall_score out of range: {0}")]
    ScoreOutOfRange(i64),
    #[error("expected {SUGGESTION_COUNT} suggestions, got {0}")]
    WrongSuggestionCount(usize),
    #[error("{field}: {message}")]
    InvalidRating { field: &'static str, message: String },
}

impl Judgment {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        overall_score: i64,
        accuracy: &str,
        fluency: &str,
        integrity: &str,
        missing_words: Vec<String>,
        mispronounced_words: Vec<String>,
        suggestions: Vec<String>,
    ) -> Result<Self, JudgmentError> {
        if !(0..=100).contains(&overall_score) {
            return Err(JudgmentError::ScoreOutOfRange(overall_score));
        }
        if suggestions.len() != SUGGESTION_COUNT {
            return Err(JudgmentError::WrongSuggestionCount(suggestions.len()));
        }

        Ok(Self {
            overall_score: overall_score as u8,
            accuracy: parse_rating("accuracy", accuracy)?,
            fluency: parse_rating("fluency", fluency)?,
            integrity: parse_rating("integrity", integrity)?,
            missing_words,
            mispronounced_words,
            suggestions,
        })
    }
}

fn parse_rating(field: &'static str, value: &str) -> Result<RatingLevel, JudgmentError> {
    RatingLevel::from_str(value).map_err(|message| JudgmentError::InvalidRating { field, message })
}

use serde::{Deserialize, Serialize};

/// A target utterance the learner is asked to reproduce.
///
/// Loaded once at startup and looked up by id; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSentence {
    pub id: String,
    pub text: String,
    pub translation: String,
}

impl ReferenceSentence {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            translation: translation.into(),
        }
    }
}

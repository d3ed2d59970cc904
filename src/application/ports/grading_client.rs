use async_trait::async_trait;

use crate::domain::Judgment;

/// Submits (reference text, learner transcript) to a generative scoring
/// backend and returns its validated judgment.
///
/// One attempt per call; retries are deliberately absent from this
/// core — a failed grade means a fresh caller-initiated evaluation.
#[async_trait]
pub trait GradingClient: Send + Sync {
    async fn grade(
        &self,
        reference_text: &str,
        user_text: &str,
    ) -> Result<Judgment, GradingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GradingError {
    #[error("grading backend unavailable: {0}")]
    Unavailable(String),
    #[error("malformed judgment: {0}")]
    MalformedJudgment(String),
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
}

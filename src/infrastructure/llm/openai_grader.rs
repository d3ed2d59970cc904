use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{GradingClient, GradingError};
use crate::domain::Judgment;

use super::grading_prompt::{GRADING_SYSTEM_PROMPT, build_grading_message};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Grading via the OpenAI chat completions API.
///
/// One request per grade, constrained to a JSON-only reply; the reply
/// is validated into a [`Judgment`] before anything reaches the
/// orchestrator.
pub struct OpenAiGrader {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiGrader {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
    ) -> Result<Self, GradingError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GradingError::Unavailable(format!("http client: {e}")))?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model,
        })
    }
}

#[async_trait]
impl GradingClient for OpenAiGrader {
    async fn grade(
        &self,
        reference_text: &str,
        user_text: &str,
    ) -> Result<Judgment, GradingError> {
        if self.api_key.is_empty() {
            return Err(GradingError::MissingCredential("OPENAI_API_KEY"));
        }

        let body = serde_json::json!({
            "model": self.model,
            "temperature": 0.2,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": GRADING_SYSTEM_PROMPT },
                { "role": "user", "content": build_grading_message(reference_text, user_text) },
            ],
        });

        tracing::debug!(model = %self.model, "Requesting pronunciation judgment");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GradingError::Unavailable(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GradingError::Unavailable(format!(
                "status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GradingError::Unavailable(format!("body: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GradingError::MalformedJudgment("no choices in reply".to_string()))?;

        parse_judgment(&content)
    }
}

/// Parses the backend's JSON-only reply into a validated judgment.
///
/// Anything short of the full contract (missing field, mistyped field,
/// out-of-range score, unknown rating, wrong suggestion count) is a
/// `MalformedJudgment`; partial scores are never salvaged.
fn parse_judgment(content: &str) -> Result<Judgment, GradingError> {
    let raw: RawJudgment = serde_json::from_str(content)
        .map_err(|e| GradingError::MalformedJudgment(format!("parse: {}", e)))?;

    Judgment::new(
        raw.overall_score,
        &raw.accuracy,
        &raw.fluency,
        &raw.integrity,
        raw.missing_words,
        raw.mispronounced_words,
        raw.suggestions,
    )
    .map_err(|e| GradingError::MalformedJudgment(e.to_string()))
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct RawJudgment {
    overall_score: i64,
    accuracy: String,
    fluency: String,
    integrity: String,
    missing_words: Vec<String>,
    mispronounced_words: Vec<String>,
    suggestions: Vec<String>,
}

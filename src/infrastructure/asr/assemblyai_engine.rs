use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{Transcript, TranscriptionJobStatus};

const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
const DEFAULT_MAX_POLLS: u32 = 30;

// Per-exchange network ceiling; independent of the polling ceiling.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Remote transcription via the AssemblyAI job API.
///
/// Three sequential exchanges per call: upload the raw audio, submit a
/// transcription job, then poll the job until it reaches a terminal
/// status or the polling ceiling is hit.
pub struct AssemblyAiEngine {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    poll_interval: Duration,
    max_polls: u32,
}

impl AssemblyAiEngine {
    pub fn new(api_key: String, base_url: Option<String>) -> Result<Self, TranscriptionError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("http client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls: DEFAULT_MAX_POLLS,
        })
    }

    /// Overrides the polling cadence. Tests shorten it; production
    /// keeps the defaults.
    pub fn with_polling(mut self, poll_interval: Duration, max_polls: u32) -> Self {
        self.poll_interval = poll_interval;
        self.max_polls = max_polls;
        self
    }

    async fn upload(&self, audio_data: &[u8]) -> Result<String, TranscriptionError> {
        let response = self
            .client
            .post(format!("{}/v2/upload", self.base_url))
            .header("authorization", &self.api_key)
            .body(audio_data.to_vec())
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("upload: {}", e)))?;

        let response = check_status(response, "upload").await?;

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("upload body: {}", e)))?;

        Ok(body.upload_url)
    }

    async fn submit_job(
        &self,
        upload_url: &str,
        language_code: &str,
    ) -> Result<String, TranscriptionError> {
        let response = self
            .client
            .post(format!("{}/v2/transcript", self.base_url))
            .header("authorization", &self.api_key)
            .json(&serde_json::json!({
                "audio_url": upload_url,
                "language_code": language_code,
            }))
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("submit: {}", e)))?;

        let response = check_status(response, "submit").await?;

        let body: SubmitResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("submit body: {}", e)))?;

        tracing::debug!(job_id = %body.id, status = %body.status, "Transcription job submitted");

        Ok(body.id)
    }

    async fn poll_job(&self, job_id: &str) -> Result<Transcript, TranscriptionError> {
        for attempt in 1..=self.max_polls {
            tokio::time::sleep(self.poll_interval).await;

            let response = self
                .client
                .get(format!("{}/v2/transcript/{}", self.base_url, job_id))
                .header("authorization", &self.api_key)
                .send()
                .await
                .map_err(|e| TranscriptionError::ApiRequestFailed(format!("poll: {}", e)))?;

            let response = check_status(response, "poll").await?;

            let body: PollResponse = response
                .json()
                .await
                .map_err(|e| TranscriptionError::ApiRequestFailed(format!("poll body: {}", e)))?;

            let status = TranscriptionJobStatus::from_provider_status(&body.status)
                .map_err(TranscriptionError::ApiRequestFailed)?;

            tracing::debug!(job_id = %job_id, attempt, status = %status, "Polled transcription job");

            match status {
                TranscriptionJobStatus::Completed => {
                    return Ok(Transcript::new(body.text.unwrap_or_default()));
                }
                TranscriptionJobStatus::Error => {
                    return Err(TranscriptionError::ProviderError(
                        body.error.unwrap_or_else(|| "unknown provider error".to_string()),
                    ));
                }
                _ => continue,
            }
        }

        Err(TranscriptionError::Timeout {
            attempts: self.max_polls,
        })
    }
}

#[async_trait]
impl TranscriptionEngine for AssemblyAiEngine {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        language_code: &str,
    ) -> Result<Transcript, TranscriptionError> {
        if self.api_key.is_empty() {
            return Err(TranscriptionError::MissingCredential("ASSEMBLYAI_API_KEY"));
        }

        let upload_url = self.upload(audio_data).await?;
        let job_id = self.submit_job(&upload_url, language_code).await?;
        let transcript = self.poll_job(&job_id).await?;

        tracing::info!(
            job_id = %job_id,
            chars = transcript.as_str().len(),
            "AssemblyAI transcription completed"
        );

        Ok(transcript)
    }
}

async fn check_status(
    response: reqwest::Response,
    exchange: &str,
) -> Result<reqwest::Response, TranscriptionError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(TranscriptionError::ApiRequestFailed(format!(
        "{} status {}: {}",
        exchange, status, body
    )))
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Deserialize)]
struct SubmitResponse {
    id: String,
    status: String,
}

#[derive(Deserialize)]
struct PollResponse {
    status: String,
    text: Option<String>,
    error: Option<String>,
}

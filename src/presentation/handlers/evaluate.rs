use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{GradingClient, TranscriptionEngine};
use crate::application::services::EvaluationError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /evaluate` — multipart fields `file` (audio bytes) and
/// `sentence_id`.
///
/// Provider-side faults come back as a generic 500; their concrete
/// causes stay in the log.
#[tracing::instrument(skip(state, multipart))]
pub async fn evaluate_handler<T, G>(
    State(state): State<AppState<T, G>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    T: TranscriptionEngine + 'static + ?Sized,
    G: GradingClient + 'static + ?Sized,
{
    let mut audio_data: Option<Vec<u8>> = None;
    let mut sentence_id: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return bad_request(format!("Failed to read multipart: {}", e));
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => match field.bytes().await {
                Ok(bytes) => audio_data = Some(bytes.to_vec()),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read audio field");
                    return bad_request(format!("Failed to read file: {}", e));
                }
            },
            Some("sentence_id") => match field.text().await {
                Ok(text) => sentence_id = Some(text),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read sentence_id field");
                    return bad_request(format!("Failed to read sentence_id: {}", e));
                }
            },
            _ => continue,
        }
    }

    let Some(sentence_id) = sentence_id else {
        return bad_request("Missing field: sentence_id".to_string());
    };
    let Some(audio_data) = audio_data else {
        return bad_request("Missing field: file".to_string());
    };

    tracing::debug!(
        sentence_id = %sentence_id,
        audio_bytes = audio_data.len(),
        "Evaluation requested"
    );

    match state
        .evaluation_service
        .evaluate(&sentence_id, &audio_data)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(EvaluationError::SentenceNotFound(id)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Sentence not found: {}", id),
            }),
        )
            .into_response(),
        Err(EvaluationError::InvalidInput(message)) => bad_request(message),
        Err(e) => {
            // Cause already logged where it was classified.
            tracing::error!(sentence_id = %sentence_id, error = %e, "Evaluation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Evaluation failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn bad_request(message: String) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
}

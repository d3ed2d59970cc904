use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{GradingClient, TranscriptionEngine};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn lesson_handler<T, G>(
    State(state): State<AppState<T, G>>,
    Path(lesson_id): Path<String>,
) -> impl IntoResponse
where
    T: TranscriptionEngine + 'static + ?Sized,
    G: GradingClient + 'static + ?Sized,
{
    match state.catalog.lookup(&lesson_id) {
        Some(sentence) => (StatusCode::OK, Json(sentence)).into_response(),
        None => {
            tracing::debug!(lesson_id = %lesson_id, "Lesson not found");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Lesson not found: {}", lesson_id),
                }),
            )
                .into_response()
        }
    }
}

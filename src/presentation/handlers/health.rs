use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{GradingClient, TranscriptionEngine};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub sentences: usize,
}

/// Liveness endpoint; also reports how many reference sentences the
/// catalog was loaded with, so an empty catalog is visible at a glance.
pub async fn health_handler<T, G>(State(state): State<AppState<T, G>>) -> impl IntoResponse
where
    T: TranscriptionEngine + 'static + ?Sized,
    G: GradingClient + 'static + ?Sized,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            sentences: state.catalog.sentence_count(),
        }),
    )
}

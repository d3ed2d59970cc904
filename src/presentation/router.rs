use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{GradingClient, TranscriptionEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{evaluate_handler, health_handler, lesson_handler};
use crate::presentation::state::AppState;

/// Minute-long WAV recordings run well past axum's 2 MB default.
const MAX_AUDIO_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

pub fn create_router<T, G>(state: AppState<T, G>) -> Router
where
    T: TranscriptionEngine + 'static + ?Sized,
    G: GradingClient + 'static + ?Sized,
{
    // Wide-open CORS: the mini-program client calls from an arbitrary
    // webview origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler::<T, G>))
        .route(
            "/evaluate",
            post(evaluate_handler::<T, G>).layer(DefaultBodyLimit::max(MAX_AUDIO_UPLOAD_BYTES)),
        )
        .route("/lesson/{lesson_id}", get(lesson_handler::<T, G>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use habla::application::ports::{GradingClient, GradingError};
use habla::domain::RatingLevel;
use habla::infrastructure::llm::OpenAiGrader;

async fn start_mock_backend(status: u16, body: String) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/chat/completions",
        post(move || {
            let body = body.clone();
            async move {
                let status = StatusCode::from_u16(status).unwrap();
                (status, [("content-type", "application/json")], body).into_response()
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

/// Wraps a judgment payload the way the chat completions API does.
fn chat_reply(content: &str) -> String {
    json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}

fn grader(base_url: &str) -> OpenAiGrader {
    OpenAiGrader::new(
        "test-key".to_string(),
        Some(base_url.to_string()),
        "gpt-4o-mini".to_string(),
    )
    .unwrap()
}

#[tokio::test]
async fn given_full_judgment_when_grading_then_returns_validated_fields() {
    let content = json!({
        "overall_score": 88,
        "accuracy": "中",
        "fluency": "高",
        "integrity": "高",
        "missing_words": [],
        "mispronounced_words": ["Hola"],
        "suggestions": ["整体不错，可以再放慢一些速度。", "注意句尾语调。", "多模仿原音的节奏。"]
    })
    .to_string();
    let (base_url, shutdown_tx) = start_mock_backend(200, chat_reply(&content)).await;

    let judgment = grader(&base_url)
        .grade("Hola, soy Ana.", "Hola soy Ana")
        .await
        .unwrap();

    assert_eq!(judgment.overall_score, 88);
    assert_eq!(judgment.accuracy, RatingLevel::Medium);
    assert_eq!(judgment.fluency, RatingLevel::High);
    assert_eq!(judgment.integrity, RatingLevel::High);
    assert_eq!(judgment.mispronounced_words, vec!["Hola".to_string()]);
    assert_eq!(judgment.suggestions.len(), 3);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_reply_missing_suggestions_when_grading_then_malformed_judgment() {
    let content = json!({
        "overall_score": 88,
        "accuracy": "中",
        "fluency": "高",
        "integrity": "高",
        "missing_words": [],
        "mispronounced_words": []
    })
    .to_string();
    let (base_url, shutdown_tx) = start_mock_backend(200, chat_reply(&content)).await;

    let result = grader(&base_url).grade("ref", "user").await;

    assert!(matches!(result, Err(GradingError::MalformedJudgment(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_reply_with_two_suggestions_when_grading_then_malformed_judgment() {
    let content = json!({
        "overall_score": 88,
        "accuracy": "中",
        "fluency": "高",
        "integrity": "高",
        "missing_words": [],
        "mispronounced_words": [],
        "suggestions": ["一", "二"]
    })
    .to_string();
    let (base_url, shutdown_tx) = start_mock_backend(200, chat_reply(&content)).await;

    let result = grader(&base_url).grade("ref", "user").await;

    assert!(matches!(result, Err(GradingError::MalformedJudgment(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_out_of_range_score_when_grading_then_malformed_judgment() {
    let content = json!({
        "overall_score": 150,
        "accuracy": "中",
        "fluency": "高",
        "integrity": "高",
        "missing_words": [],
        "mispronounced_words": [],
        "suggestions": ["一", "二", "三"]
    })
    .to_string();
    let (base_url, shutdown_tx) = start_mock_backend(200, chat_reply(&content)).await;

    let result = grader(&base_url).grade("ref", "user").await;

    assert!(matches!(result, Err(GradingError::MalformedJudgment(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rating_outside_closed_set_when_grading_then_malformed_judgment() {
    let content = json!({
        "overall_score": 88,
        "accuracy": "excellent",
        "fluency": "高",
        "integrity": "高",
        "missing_words": [],
        "mispronounced_words": [],
        "suggestions": ["一", "二", "三"]
    })
    .to_string();
    let (base_url, shutdown_tx) = start_mock_backend(200, chat_reply(&content)).await;

    let result = grader(&base_url).grade("ref", "user").await;

    assert!(matches!(result, Err(GradingError::MalformedJudgment(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_free_text_reply_when_grading_then_malformed_judgment() {
    let (base_url, shutdown_tx) =
        start_mock_backend(200, chat_reply("这个发音听起来很不错！")).await;

    let result = grader(&base_url).grade("ref", "user").await;

    assert!(matches!(result, Err(GradingError::MalformedJudgment(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_backend_error_status_when_grading_then_unavailable() {
    let (base_url, shutdown_tx) =
        start_mock_backend(500, "internal error".to_string()).await;

    let result = grader(&base_url).grade("ref", "user").await;

    assert!(matches!(result, Err(GradingError::Unavailable(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_default_base_url_when_constructing_then_client_builds_with_timeout() {
    assert!(
        OpenAiGrader::new("test-key".to_string(), None, "gpt-4o-mini".to_string()).is_ok()
    );
}

#[tokio::test]
async fn given_empty_api_key_when_grading_then_fails_fast_without_network() {
    let grader = OpenAiGrader::new(
        String::new(),
        Some("http://127.0.0.1:1".to_string()),
        "gpt-4o-mini".to_string(),
    )
    .unwrap();

    let result = grader.grade("ref", "user").await;

    assert!(matches!(
        result,
        Err(GradingError::MissingCredential("OPENAI_API_KEY"))
    ));
}

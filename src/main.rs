use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use habla::application::ports::ReferenceCatalog;
use habla::application::services::EvaluationService;
use habla::infrastructure::asr::TranscriptionEngineFactory;
use habla::infrastructure::catalog::StaticCatalog;
use habla::infrastructure::llm::OpenAiGrader;
use habla::infrastructure::observability::init_tracing;
use habla::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(
        &settings.logging.environment,
        settings.logging.json_format,
        settings.server.port,
    );

    let transcription_engine = TranscriptionEngineFactory::create(
        settings.transcription.provider,
        settings.transcription.api_key.clone(),
        settings.transcription.base_url.clone(),
        &settings.transcription.whisper_model,
    )?;

    let grading_client = Arc::new(OpenAiGrader::new(
        settings.grading.api_key.clone(),
        settings.grading.base_url.clone(),
        settings.grading.chat_model.clone(),
    )?);

    let catalog = Arc::new(StaticCatalog::spanish_starter());
    tracing::info!(sentences = catalog.len(), "Reference catalog loaded");

    let evaluation_service = Arc::new(EvaluationService::new(
        Arc::clone(&catalog) as Arc<dyn ReferenceCatalog>,
        transcription_engine,
        grading_client,
        settings.transcription.language_code.clone(),
    ));

    let state = AppState {
        evaluation_service,
        catalog,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

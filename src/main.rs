use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use clauselens::application::services::AnalysisService;
use clauselens::infrastructure::llm::GeminiClient;
use clauselens::infrastructure::observability::{TracingConfig, init_tracing};
use clauselens::infrastructure::text_processing::PdfAdapter;
use clauselens::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::default());

    let settings = Settings::from_env()?;

    let llm_client = Arc::new(GeminiClient::new(
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
    ));
    let file_loader = Arc::new(PdfAdapter::new());
    let analysis_service = Arc::new(AnalysisService::new(Arc::clone(&llm_client)));

    let state = AppState {
        analysis_service,
        file_loader,
    };

    let router = create_router(state, &settings.cors);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(%addr, model = %settings.llm.model, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

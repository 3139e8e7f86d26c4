use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::RiskyTerm;
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub simplified_explanation: String,
    pub risky_terms: Vec<RiskyTerm>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn analyze_handler<L, F>(
    State(state): State<AppState<L, F>>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    let text = match request.text.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => {
            tracing::warn!("Analyze request with no text");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No text provided".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(text = %preview_text(text), "Analyzing document text");

    match state.analysis_service.analyze(text).await {
        Ok(outcome) => {
            tracing::info!(risk_count = outcome.risky_terms.len(), "Analysis successful");
            (
                StatusCode::OK,
                Json(AnalyzeResponse {
                    simplified_explanation: outcome.summary,
                    risky_terms: outcome.risky_terms,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Analysis failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}

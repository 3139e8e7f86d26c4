use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct FollowupRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default, rename = "originalText")]
    pub original_text: Option<String>,
}

#[derive(Serialize)]
pub struct FollowupResponse {
    pub answer: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn followup_handler<L, F>(
    State(state): State<AppState<L, F>>,
    Json(request): Json<FollowupRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    let question = request.question.as_deref().map(str::trim).unwrap_or("");
    let original_text = request.original_text.as_deref().map(str::trim).unwrap_or("");

    if question.is_empty() || original_text.is_empty() {
        tracing::warn!("Followup request with missing fields");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Question and original text are required".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(question = %preview_text(question), "Answering followup question");

    match state.analysis_service.followup(question, original_text).await {
        Ok(answer) => (StatusCode::OK, Json(FollowupResponse { answer })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Followup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Followup failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}

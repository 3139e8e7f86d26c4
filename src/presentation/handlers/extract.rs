use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::Upload;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ExtractResponse {
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn extract_handler<L, F>(
    State(state): State<AppState<L, F>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    let mut uploaded: Option<(String, Bytes)> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }

                let filename = field.file_name().unwrap_or_default().to_string();

                // Extension gate runs before any bytes are read; the
                // adapter is never invoked for a non-PDF name.
                if !filename.ends_with(".pdf") {
                    tracing::warn!(filename = %filename, "Rejected non-PDF upload");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: "Only PDF files are supported".to_string(),
                        }),
                    )
                        .into_response();
                }

                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read file: {}", e),
                            }),
                        )
                            .into_response();
                    }
                };

                uploaded = Some((filename, data));
                break;
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    }

    let Some((filename, data)) = uploaded else {
        tracing::warn!("Extract request with no file field");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file provided".to_string(),
            }),
        )
            .into_response();
    };

    let upload = Upload::new(filename, data.len() as u64);

    match state.file_loader.extract_text(&data, &upload).await {
        Ok(text) => (StatusCode::OK, Json(ExtractResponse { text })).into_response(),
        Err(e) => {
            // Extraction failures are treated as client-input problems;
            // the adapter's message passes through verbatim.
            tracing::warn!(error = %e, filename = %upload.filename, "PDF extraction failed");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

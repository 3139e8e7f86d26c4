use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Upload;

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts plain text from uploaded PDF bytes. Parsing runs on a blocking
/// task because pdf-extract is CPU-bound and synchronous.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(filename = %upload.filename, size_bytes = upload.size_bytes)
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        upload: &Upload,
    ) -> Result<String, FileLoaderError> {
        let bytes = data.to_vec();

        let raw = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_from_mem(&bytes)
                    .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))
            }),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let text = sanitize_extracted_text(&raw);

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(upload.filename.clone()));
        }

        tracing::info!(chars = text.len(), "PDF text extraction complete");

        Ok(text)
    }
}

use async_trait::async_trait;

use crate::domain::Upload;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(&self, data: &[u8], upload: &Upload)
        -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no extractable text found in {0}")]
    NoTextFound(String),
}

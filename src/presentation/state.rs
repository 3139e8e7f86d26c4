use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::AnalysisService;

/// Shared handler state. Read-only after startup; requests share nothing
/// else.
pub struct AppState<L, F>
where
    L: LlmClient,
    F: FileLoader,
{
    pub analysis_service: Arc<AnalysisService<L>>,
    pub file_loader: Arc<F>,
}

impl<L, F> Clone for AppState<L, F>
where
    L: LlmClient,
    F: FileLoader,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            file_loader: Arc::clone(&self.file_loader),
        }
    }
}

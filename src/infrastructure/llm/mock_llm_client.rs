use crate::application::ports::{LlmClient, LlmClientError};

/// Canned-response client for wiring checks without a live API key.
pub struct MockLlmClient;

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        Ok("Mock completion".to_string())
    }
}

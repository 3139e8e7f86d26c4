use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::application::services::shape_risks;
use crate::domain::RiskyTerm;

/// Orchestrates the three model invocations: summarization, risk
/// extraction, and follow-up question answering. Holds no per-request
/// state.
pub struct AnalysisService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
}

impl<L> AnalysisService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    /// Summarizes the document and extracts its risky terms. Collaborator
    /// failures propagate as structured errors rather than being folded
    /// into the payload text.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisOutcome, AnalysisError> {
        let summary = self
            .llm_client
            .complete(&summarize_prompt(text))
            .await
            .map_err(AnalysisError::Summarize)?;

        let raw_risks = self
            .llm_client
            .complete(&extract_risks_prompt(text))
            .await
            .map_err(AnalysisError::ExtractRisks)?;

        let risky_terms = shape_risks(&raw_risks);
        tracing::debug!(risk_count = risky_terms.len(), "Shaped risk lines");

        Ok(AnalysisOutcome {
            summary,
            risky_terms,
        })
    }

    /// Answers a follow-up question about a previously analyzed clause.
    pub async fn followup(
        &self,
        question: &str,
        original_text: &str,
    ) -> Result<String, AnalysisError> {
        self.llm_client
            .complete(&followup_prompt(question, original_text))
            .await
            .map_err(AnalysisError::Followup)
    }
}

fn summarize_prompt(text: &str) -> String {
    format!("Summarize the following text: {text}")
}

fn extract_risks_prompt(text: &str) -> String {
    format!(
        "Extract risks from the following text. For each risk:\n\
         1. Identify the risky term or clause\n\
         2. Explain why it's risky\n\
         Format each risk as 'Term: Explanation'\n\
         \n\
         Text: {text}"
    )
}

fn followup_prompt(question: &str, original_text: &str) -> String {
    format!(
        "You are a legal expert assistant. Answer the following question about \
         this legal clause clearly and concisely.\n\
         \n\
         Original text: {original_text}\n\
         \n\
         Question: {question}\n\
         \n\
         Answer:"
    )
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub summary: String,
    pub risky_terms: Vec<RiskyTerm>,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("summarization: {0}")]
    Summarize(LlmClientError),
    #[error("risk extraction: {0}")]
    ExtractRisks(LlmClientError),
    #[error("followup: {0}")]
    Followup(LlmClientError),
}

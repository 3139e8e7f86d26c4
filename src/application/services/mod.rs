mod analysis_service;
mod risk_shaper;

pub use analysis_service::{AnalysisError, AnalysisOutcome, AnalysisService};
pub use risk_shaper::shape_risks;

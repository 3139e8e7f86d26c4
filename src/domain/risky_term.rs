use serde::Serialize;

/// A risky clause identified in a legal document, derived from one line of
/// model output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskyTerm {
    pub term: String,
    pub severity: Severity,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

const HIGH_KEYWORDS: [&str; 3] = ["critical", "severe", "high"];
const LOW_KEYWORDS: [&str; 2] = ["minor", "low"];

impl Severity {
    /// Infers a severity tier from keywords in a risk's term. The match is
    /// case-insensitive and runs against the term only, never the
    /// explanation. High-tier keywords win over low-tier ones.
    pub fn infer(term: &str) -> Self {
        let lowered = term.to_lowercase();

        if HIGH_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            Severity::High
        } else if LOW_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            Severity::Low
        } else {
            Severity::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl RiskyTerm {
    pub fn new(term: String, explanation: String) -> Self {
        let severity = Severity::infer(&term);
        Self {
            term,
            severity,
            explanation,
        }
    }
}

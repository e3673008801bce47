//! Remote Analyzer — the external reasoning service behind the screening
//! engine's primary path.
//!
//! Modeled as a trait so tests can inject canned or failing implementations;
//! failure reasons are explicit variants rather than a catch-all.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::llm_client::{LlmClient, LlmError};
use crate::screening::engine::Recommendation;
use crate::screening::prompts::{SCREENING_PROMPT_TEMPLATE, SCREENING_SYSTEM};

/// Reasons an analyzer call can fail. Every variant triggers the same
/// fallback behavior; the distinction exists for logging and for tests.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Transport, API status, JSON parse, or empty-content failure from the
    /// LLM client.
    #[error("analyzer call failed: {0}")]
    Llm(#[from] LlmError),

    /// The response parsed as JSON but violated the verdict contract.
    #[error("schema-invalid verdict: {0}")]
    SchemaInvalid(String),
}

/// The JSON object the remote service is instructed to return.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerVerdict {
    pub match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub justification: String,
    pub recommendation: Recommendation,
}

/// One (resume, job description) pair in, one verdict out.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalyzerVerdict, AnalyzerError>;
}

/// Production analyzer backed by the LLM client.
pub struct RemoteAnalyzer {
    llm: LlmClient,
}

impl RemoteAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeAnalyzer for RemoteAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalyzerVerdict, AnalyzerError> {
        let prompt = SCREENING_PROMPT_TEMPLATE
            .replace("{job_description}", job_description)
            .replace("{resume_text}", resume_text);
        let verdict: AnalyzerVerdict = self.llm.call_json(&prompt, SCREENING_SYSTEM).await?;
        validate_verdict(verdict)
    }
}

/// Rejects verdicts that parsed but violate the contract. The prompt asks for
/// 1–10; anything inside the result invariant [0, 10] is accepted.
fn validate_verdict(verdict: AnalyzerVerdict) -> Result<AnalyzerVerdict, AnalyzerError> {
    if !verdict.match_score.is_finite() || !(0.0..=10.0).contains(&verdict.match_score) {
        return Err(AnalyzerError::SchemaInvalid(format!(
            "match_score {} outside [0, 10]",
            verdict.match_score
        )));
    }
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_VERDICT: &str = r#"{
        "match_score": 7.5,
        "matched_skills": ["Python", "Aws"],
        "missing_skills": ["Kubernetes"],
        "justification": "Strong backend profile, missing container orchestration.",
        "recommendation": "Shortlist"
    }"#;

    #[test]
    fn test_valid_verdict_deserializes() {
        let verdict: AnalyzerVerdict = serde_json::from_str(VALID_VERDICT).unwrap();
        assert_eq!(verdict.match_score, 7.5);
        assert_eq!(verdict.recommendation, Recommendation::Shortlist);
        assert_eq!(verdict.matched_skills, vec!["Python", "Aws"]);
    }

    #[test]
    fn test_unknown_recommendation_label_fails_to_parse() {
        let json = VALID_VERDICT.replace("Shortlist", "StrongHire");
        assert!(serde_json::from_str::<AnalyzerVerdict>(&json).is_err());
    }

    #[test]
    fn test_missing_field_fails_to_parse() {
        let json = r#"{"match_score": 5.0, "justification": "", "recommendation": "Maybe"}"#;
        assert!(serde_json::from_str::<AnalyzerVerdict>(json).is_err());
    }

    #[test]
    fn test_out_of_range_score_is_schema_invalid() {
        let mut verdict: AnalyzerVerdict = serde_json::from_str(VALID_VERDICT).unwrap();
        verdict.match_score = 42.0;
        assert!(matches!(
            validate_verdict(verdict),
            Err(AnalyzerError::SchemaInvalid(_))
        ));
    }

    #[test]
    fn test_nan_score_is_schema_invalid() {
        let mut verdict: AnalyzerVerdict = serde_json::from_str(VALID_VERDICT).unwrap();
        verdict.match_score = f64::NAN;
        assert!(matches!(
            validate_verdict(verdict),
            Err(AnalyzerError::SchemaInvalid(_))
        ));
    }

    #[test]
    fn test_in_range_score_is_accepted() {
        let verdict: AnalyzerVerdict = serde_json::from_str(VALID_VERDICT).unwrap();
        assert!(validate_verdict(verdict).is_ok());
    }
}

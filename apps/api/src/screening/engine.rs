//! Screening engine — orchestrates scoring for one (resume, job description)
//! pair.
//!
//! The remote analyzer is tried first; any failure is logged and answered by
//! the deterministic keyword scorer, so `screen` always returns a result.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::extraction::vocabulary::SkillVocabulary;
use crate::screening::analyzer::ResumeAnalyzer;
use crate::screening::scorer::score_by_keywords;

/// Categorical hiring recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Shortlist,
    Maybe,
    Reject,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Shortlist => "Shortlist",
            Recommendation::Maybe => "Maybe",
            Recommendation::Reject => "Reject",
        }
    }
}

/// The output of comparing one resume against one job description.
/// Created once per pair and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningResult {
    /// Match quality in [0, 10], one decimal of precision.
    pub match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub justification: String,
    pub recommendation: Recommendation,
    /// True when the deterministic scorer produced this result because the
    /// remote analyzer was unavailable or returned an invalid verdict.
    pub fallback_used: bool,
}

/// Stateless screening engine. Safe to share and to call concurrently for
/// independent inputs; the analyzer call is the only operation that may block
/// on I/O.
pub struct ScreeningEngine {
    analyzer: Arc<dyn ResumeAnalyzer>,
    vocabulary: SkillVocabulary,
}

impl ScreeningEngine {
    pub fn new(analyzer: Arc<dyn ResumeAnalyzer>, vocabulary: SkillVocabulary) -> Self {
        Self {
            analyzer,
            vocabulary,
        }
    }

    /// Screens one resume against one job description. Never fails: analyzer
    /// errors of any kind collapse into "analyzer unavailable" and the
    /// keyword fallback answers instead.
    pub async fn screen(&self, resume_text: &str, job_description: &str) -> ScreeningResult {
        match self.analyzer.analyze(resume_text, job_description).await {
            Ok(verdict) => ScreeningResult {
                match_score: verdict.match_score,
                matched_skills: verdict.matched_skills,
                missing_skills: verdict.missing_skills,
                justification: verdict.justification,
                recommendation: verdict.recommendation,
                fallback_used: false,
            },
            Err(e) => {
                warn!("Remote analyzer unavailable ({e}); using keyword fallback");
                score_by_keywords(&self.vocabulary, resume_text, job_description)
            }
        }
    }
}

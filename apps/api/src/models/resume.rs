use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A stored resume with its extracted profile fields.
/// Skill lists are persisted as JSON arrays in TEXT columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: i64,
    pub filename: String,
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    pub skills: Json<Vec<String>>,
    pub experience_years: i64,
    pub education: String,
    pub raw_text: String,
    pub created_at: DateTime<Utc>,
}

/// One stored screening outcome for a (resume, job description) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScreeningResultRow {
    pub id: i64,
    pub resume_id: i64,
    pub job_description: String,
    pub match_score: f64,
    pub matched_skills: Json<Vec<String>>,
    pub missing_skills: Json<Vec<String>>,
    pub justification: String,
    pub recommendation: String,
    pub fallback_used: bool,
    pub created_at: DateTime<Utc>,
}

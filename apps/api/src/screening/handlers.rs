use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::types::Json as SqlJson;
use sqlx::SqlitePool;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{ResumeRow, ScreeningResultRow};
use crate::screening::engine::{Recommendation, ScreeningResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScreenRequest {
    pub job_description: String,
    pub resume_ids: Vec<i64>,
}

/// One screened candidate in the ranked response.
#[derive(Debug, Serialize)]
pub struct ScreenedCandidate {
    pub resume_id: i64,
    pub candidate_name: String,
    pub email: String,
    pub match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub justification: String,
    pub recommendation: Recommendation,
    pub fallback_used: bool,
    pub experience_years: i64,
    pub education: String,
}

#[derive(Serialize)]
pub struct ScreenResponse {
    pub success: bool,
    pub results: Vec<ScreenedCandidate>,
}

#[derive(Serialize)]
pub struct ResultsResponse {
    pub results: Vec<ScreeningResultRow>,
}

/// POST /api/screen
/// Screens each stored resume against the job description and returns the
/// candidates ranked by descending match score. Unknown resume ids are
/// skipped, matching the append-only screening history semantics.
pub async fn handle_screen(
    State(state): State<AppState>,
    Json(req): Json<ScreenRequest>,
) -> Result<Json<ScreenResponse>, AppError> {
    if req.job_description.trim().is_empty() || req.resume_ids.is_empty() {
        return Err(AppError::Validation(
            "Job description and resume IDs required".to_string(),
        ));
    }

    let mut results = Vec::with_capacity(req.resume_ids.len());

    for resume_id in &req.resume_ids {
        let resume = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = ?")
            .bind(resume_id)
            .fetch_optional(&state.db)
            .await?;
        let Some(resume) = resume else {
            continue;
        };

        let outcome = state
            .engine
            .screen(&resume.raw_text, &req.job_description)
            .await;

        store_result(&state.db, resume.id, &req.job_description, &outcome).await?;
        info!(
            "Screened resume {}: score {} ({}{})",
            resume.id,
            outcome.match_score,
            outcome.recommendation.as_str(),
            if outcome.fallback_used { ", fallback" } else { "" },
        );

        results.push(ScreenedCandidate {
            resume_id: resume.id,
            candidate_name: resume.candidate_name,
            email: resume.email,
            match_score: outcome.match_score,
            matched_skills: outcome.matched_skills,
            missing_skills: outcome.missing_skills,
            justification: outcome.justification,
            recommendation: outcome.recommendation,
            fallback_used: outcome.fallback_used,
            experience_years: resume.experience_years,
            education: resume.education,
        });
    }

    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

    Ok(Json(ScreenResponse {
        success: true,
        results,
    }))
}

/// GET /api/results/:resume_id
/// Screening history for one resume, newest first.
pub async fn handle_results(
    State(state): State<AppState>,
    Path(resume_id): Path<i64>,
) -> Result<Json<ResultsResponse>, AppError> {
    let exists = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM resumes WHERE id = ?")
        .bind(resume_id)
        .fetch_one(&state.db)
        .await?;
    if exists == 0 {
        return Err(AppError::NotFound(format!("Resume {resume_id} not found")));
    }

    let results = sqlx::query_as::<_, ScreeningResultRow>(
        "SELECT * FROM screening_results WHERE resume_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(resume_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(ResultsResponse { results }))
}

async fn store_result(
    pool: &SqlitePool,
    resume_id: i64,
    job_description: &str,
    result: &ScreeningResult,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO screening_results
            (resume_id, job_description, match_score, matched_skills,
             missing_skills, justification, recommendation, fallback_used, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(resume_id)
    .bind(job_description)
    .bind(result.match_score)
    .bind(SqlJson(result.matched_skills.clone()))
    .bind(SqlJson(result.missing_skills.clone()))
    .bind(&result.justification)
    .bind(result.recommendation.as_str())
    .bind(result.fallback_used)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::types::Json as SqlJson;
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::document::extract_text;
use crate::extraction::profile::CandidateProfile;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub resume_id: i64,
    pub data: CandidateProfile,
}

/// Resume listing entry — the subset of columns exposed by `GET /api/resumes`.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct ResumeSummary {
    pub id: i64,
    pub filename: String,
    pub candidate_name: String,
    pub email: String,
    pub skills: SqlJson<Vec<String>>,
    pub experience_years: i64,
    pub education: String,
}

#[derive(Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeSummary>,
}

/// POST /api/upload
/// Accepts a multipart upload with a `file` field, extracts the candidate
/// profile and stores it.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            file = Some((filename, data.to_vec()));
            break;
        }
    }

    let (filename, data) = file.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }

    let text = extract_text(&filename, &data)?;
    let profile = state.extractor.extract(&text);

    let resume_id = insert_resume(&state.db, &filename, &profile).await?;
    info!("Stored resume {resume_id} ({filename})");

    Ok(Json(UploadResponse {
        success: true,
        resume_id,
        data: profile,
    }))
}

/// GET /api/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = sqlx::query_as::<_, ResumeSummary>(
        "SELECT id, filename, candidate_name, email, skills, experience_years, education \
         FROM resumes ORDER BY id",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(ResumeListResponse { resumes }))
}

async fn insert_resume(
    pool: &SqlitePool,
    filename: &str,
    profile: &CandidateProfile,
) -> Result<i64, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO resumes
            (filename, candidate_name, email, phone, skills,
             experience_years, education, raw_text, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(filename)
    .bind(&profile.name)
    .bind(&profile.email)
    .bind(&profile.phone)
    .bind(SqlJson(profile.skills.clone()))
    .bind(profile.experience_years as i64)
    .bind(&profile.education)
    .bind(&profile.raw_text)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Creates a SQLite connection pool and ensures the schema exists.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Opening SQLite database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    info!("SQLite database ready");
    Ok(pool)
}

/// Idempotent schema creation, run once at startup.
async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resumes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            filename TEXT NOT NULL,
            candidate_name TEXT NOT NULL DEFAULT '',
            email TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            skills TEXT NOT NULL DEFAULT '[]',
            experience_years INTEGER NOT NULL DEFAULT 0,
            education TEXT NOT NULL DEFAULT '',
            raw_text TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS screening_results (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            resume_id INTEGER NOT NULL REFERENCES resumes (id),
            job_description TEXT NOT NULL,
            match_score REAL NOT NULL,
            matched_skills TEXT NOT NULL DEFAULT '[]',
            missing_skills TEXT NOT NULL DEFAULT '[]',
            justification TEXT NOT NULL DEFAULT '',
            recommendation TEXT NOT NULL,
            fallback_used INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

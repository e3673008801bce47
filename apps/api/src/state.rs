use std::sync::Arc;

use sqlx::SqlitePool;

use crate::extraction::profile::ProfileExtractor;
use crate::screening::engine::ScreeningEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Pure profile extractor; compiled regexes live for the process lifetime.
    pub extractor: Arc<ProfileExtractor>,
    /// Screening engine — remote analyzer with deterministic keyword fallback.
    pub engine: Arc<ScreeningEngine>,
}

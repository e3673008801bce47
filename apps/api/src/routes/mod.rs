pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as extraction;
use crate::screening::handlers as screening;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/upload", post(extraction::handle_upload))
        .route("/api/resumes", get(extraction::handle_list_resumes))
        .route("/api/screen", post(screening::handle_screen))
        .route("/api/results/:resume_id", get(screening::handle_results))
        .with_state(state)
}

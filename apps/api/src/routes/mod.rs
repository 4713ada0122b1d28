pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career projection + the results page it feeds
        .route("/api/v1/career/projection", post(handlers::handle_projection))
        .route(
            "/api/v1/career/result/:id",
            get(handlers::handle_projection_result),
        )
        // Skill gap roadmap
        .route("/api/v1/skill-gap", post(handlers::handle_skill_gap))
        // Resume upload + ATS scoring
        .route(
            "/api/v1/resume/analysis",
            post(handlers::handle_resume_analysis),
        )
        .with_state(state)
}

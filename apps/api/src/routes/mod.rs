pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/jobs", get(catalog::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(catalog::handle_get_job))
        .route("/api/v1/courses", get(catalog::handle_list_courses))
        .route("/api/v1/demo-cvs", get(catalog::handle_demo_cvs))
        // Matching API
        .route("/api/v1/match", post(matching::handle_match_skills))
        .route("/api/v1/match/demo", post(matching::handle_match_demo))
        .route(
            "/api/v1/courses/recommend",
            post(matching::handle_recommend_courses),
        )
        .route(
            "/api/v1/skills/normalize",
            post(matching::handle_normalize_skills),
        )
        .with_state(state)
}

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::search::{filter_courses, paginate, search_jobs, CourseFilter, CourseListing, Page};
use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::models::job::Job;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Serialize)]
pub struct DemoCvsResponse {
    pub cvs: Vec<Candidate>,
    pub total: usize,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
) -> Result<Json<Page<Job>>, AppError> {
    let jobs = search_jobs(&state.catalog.jobs().await?, params.q.as_deref());
    Ok(Json(paginate(jobs, params.page, params.per_page)))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Job>, AppError> {
    Ok(Json(state.catalog.job(&job_id).await?))
}

/// GET /api/v1/courses
pub async fn handle_list_courses(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> Result<Json<CourseListing>, AppError> {
    let courses = state.catalog.courses().await?;
    Ok(Json(filter_courses(&courses, &filter)))
}

/// GET /api/v1/demo-cvs
pub async fn handle_demo_cvs(
    State(state): State<AppState>,
) -> Result<Json<DemoCvsResponse>, AppError> {
    let cvs = state.catalog.candidates().await?.to_vec();
    Ok(Json(DemoCvsResponse {
        total: cvs.len(),
        cvs,
    }))
}

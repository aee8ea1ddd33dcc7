//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::matching::assessment::{assess, Assessment};
use crate::matching::gap::{compute_match, MatchResult};
use crate::matching::normalize::{normalize_all, sanitize};
use crate::matching::recommend::{recommend, CourseRecommendation};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SkillsMatchRequest {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub candidate_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DemoMatchRequest {
    pub job_id: String,
    pub cv_id: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_id: Option<String>,
    #[serde(flatten)]
    pub result: MatchResult,
    pub assessment: Assessment,
    pub recommended_courses: Vec<CourseRecommendation>,
}

#[derive(Debug, Deserialize)]
pub struct SkillsRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub requested_skills: Vec<String>,
    pub recommended_courses: Vec<CourseRecommendation>,
    pub total_recommended: usize,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub original: Vec<String>,
    pub normalized: Vec<String>,
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Matches two explicit skill lists and recommends courses for the gap.
pub async fn handle_match_skills(
    State(state): State<AppState>,
    Json(request): Json<SkillsMatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let required = sanitize(request.required_skills);
    let candidate = sanitize(request.candidate_skills);

    let response = build_match_response(&state, None, None, &required, &candidate).await?;
    Ok(Json(response))
}

/// POST /api/v1/match/demo
///
/// Matches a catalog job against a demo CV from the dataset.
pub async fn handle_match_demo(
    State(state): State<AppState>,
    Json(request): Json<DemoMatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let job_id = request.job_id.trim();
    let cv_id = request.cv_id.trim();
    if job_id.is_empty() || cv_id.is_empty() {
        return Err(AppError::Validation(
            "job_id and cv_id cannot be empty".to_string(),
        ));
    }

    let job = state.catalog.job(job_id).await?;
    let cv = state.catalog.candidate(cv_id).await?;

    let required = sanitize(job.requirements.skills_required);
    let candidate = sanitize(cv.skills);

    let response = build_match_response(
        &state,
        Some(job.job_id),
        Some(cv.cv_id),
        &required,
        &candidate,
    )
    .await?;
    Ok(Json(response))
}

/// POST /api/v1/courses/recommend
///
/// Ranks the course catalog against an arbitrary list of skills to learn.
pub async fn handle_recommend_courses(
    State(state): State<AppState>,
    Json(request): Json<SkillsRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let skills = sanitize(request.skills);
    if skills.is_empty() {
        return Err(AppError::Validation("skills cannot be empty".to_string()));
    }

    let courses = state.catalog.courses().await?;
    let mut recommended_courses = recommend(&skills, &courses);
    recommended_courses.truncate(state.config.recommendation_limit);

    Ok(Json(RecommendResponse {
        requested_skills: normalize_all(&skills),
        total_recommended: recommended_courses.len(),
        recommended_courses,
    }))
}

/// POST /api/v1/skills/normalize
pub async fn handle_normalize_skills(Json(request): Json<SkillsRequest>) -> Json<NormalizeResponse> {
    let normalized = normalize_all(&request.skills);
    Json(NormalizeResponse {
        count: normalized.len(),
        original: request.skills,
        normalized,
    })
}

async fn build_match_response(
    state: &AppState,
    job_id: Option<String>,
    cv_id: Option<String>,
    required: &[String],
    candidate: &[String],
) -> Result<MatchResponse, AppError> {
    let result = compute_match(required, candidate);
    let assessment = assess(&result);

    let recommended_courses = if result.missing_skills.is_empty() {
        Vec::new()
    } else {
        let courses = state.catalog.courses().await?;
        let mut ranked = recommend(&result.missing_skills, &courses);
        debug!("{} courses cover at least one missing skill", ranked.len());
        ranked.truncate(state.config.recommendation_limit);
        ranked
    };

    info!(
        "Match done | job={} cv={} coverage={} missing={}",
        job_id.as_deref().unwrap_or("-"),
        cv_id.as_deref().unwrap_or("-"),
        result.coverage,
        result.num_missing
    );

    Ok(MatchResponse {
        job_id,
        cv_id,
        result,
        assessment,
        recommended_courses,
    })
}

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /health
/// Returns service version and the size of the loaded catalog.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "skillgap-api",
        "jobs": state.catalog.jobs().await?.len(),
        "courses": state.catalog.courses().await?.len(),
        "demo_cvs": state.catalog.candidates().await?.len()
    })))
}

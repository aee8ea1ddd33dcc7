//! Catalog — read-only jobs, courses and demo candidate profiles.
//!
//! `AppState` holds an `Arc<dyn CatalogSource>`. The default backend is
//! `FixtureCatalog`, which reads JSON files once at startup and serves from memory.

pub mod handlers;
pub mod search;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::models::course::Course;
use crate::models::job::Job;

pub const JOBS_FILE: &str = "jobs.json";
pub const COURSES_FILE: &str = "courses.json";
pub const CANDIDATES_FILE: &str = "cvs.json";

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Source of the job, course and candidate data the matcher runs over.
/// Implement this to serve the catalog from somewhere other than fixture files.
///
/// Lists are handed out as shared slices; callers clone only the entries they keep.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn jobs(&self) -> Result<Arc<[Job]>, AppError>;

    async fn courses(&self) -> Result<Arc<[Course]>, AppError>;

    async fn candidates(&self) -> Result<Arc<[Candidate]>, AppError>;

    async fn job(&self, job_id: &str) -> Result<Job, AppError> {
        self.jobs()
            .await?
            .iter()
            .find(|j| j.job_id == job_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
    }

    async fn candidate(&self, cv_id: &str) -> Result<Candidate, AppError> {
        self.candidates()
            .await?
            .iter()
            .find(|c| c.cv_id == cv_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("CV {cv_id} not found in demo dataset")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FixtureCatalog — JSON files loaded at startup
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    jobs: Arc<[Job]>,
    courses: Arc<[Course]>,
    candidates: Arc<[Candidate]>,
}

impl FixtureCatalog {
    pub fn new(jobs: Vec<Job>, courses: Vec<Course>, candidates: Vec<Candidate>) -> Self {
        Self {
            jobs: jobs.into(),
            courses: courses.into(),
            candidates: candidates.into(),
        }
    }

    /// Loads `jobs.json`, `courses.json` and `cvs.json` from `dir`.
    /// A missing file yields an empty list; a malformed one fails startup.
    pub async fn load(dir: &Path) -> Result<Self> {
        let catalog = Self::new(
            load_json_list(&dir.join(JOBS_FILE)).await?,
            load_json_list(&dir.join(COURSES_FILE)).await?,
            load_json_list(&dir.join(CANDIDATES_FILE)).await?,
        );

        info!(
            "Catalog loaded from {}: {} jobs, {} courses, {} demo CVs",
            dir.display(),
            catalog.jobs.len(),
            catalog.courses.len(),
            catalog.candidates.len()
        );
        Ok(catalog)
    }
}

#[async_trait]
impl CatalogSource for FixtureCatalog {
    async fn jobs(&self) -> Result<Arc<[Job]>, AppError> {
        Ok(Arc::clone(&self.jobs))
    }

    async fn courses(&self) -> Result<Arc<[Course]>, AppError> {
        Ok(Arc::clone(&self.courses))
    }

    async fn candidates(&self) -> Result<Arc<[Candidate]>, AppError> {
        Ok(Arc::clone(&self.candidates))
    }
}

async fn load_json_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("File not found: {}, using an empty list", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
    };

    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

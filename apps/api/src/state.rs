use std::sync::Arc;

use crate::catalog::CatalogSource;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable catalog. Default: FixtureCatalog loaded from DATA_DIR.
    pub catalog: Arc<dyn CatalogSource>,
}

use std::sync::Arc;

use crate::catalog::RoleCatalog;
use crate::config::Config;
use crate::extract::ResumeTextExtractor;
use crate::store::ProjectionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Role → skills/keywords reference tables. Immutable after startup.
    pub catalog: Arc<RoleCatalog>,
    /// Pluggable resume text extractor. Default: format-dispatching PDF/DOCX extractor.
    pub extractor: Arc<dyn ResumeTextExtractor>,
    /// Keyed, expiring store bridging projection requests to the result endpoint.
    pub projections: ProjectionStore,
}

use std::sync::Arc;

use crate::analysis::strategy::AnalysisOrchestrator;
use crate::extraction::TextExtractor;
use crate::jobs::JobSearchClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Tiered PDF text extraction, capability-probed at startup.
    pub extractor: Arc<TextExtractor>,
    /// Ordered analysis strategy chain; composition is fixed at startup.
    pub analyzer: Arc<AnalysisOrchestrator>,
    pub jobs: JobSearchClient,
}

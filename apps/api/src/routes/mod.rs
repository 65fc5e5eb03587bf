pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // The trailing slash is part of the public contract.
        .route("/analyze-resume/", post(analysis::handle_analyze_resume))
        .route("/job-recommendations", get(jobs::handle_job_recommendations))
        .route("/test-analysis", get(analysis::handle_test_analysis))
        .with_state(state)
}

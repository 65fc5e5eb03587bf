use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<Value>,
}

/// GET /job-recommendations
/// The contract is "always a list, possibly empty": a missing key or an
/// upstream failure degrades to `{"jobs": []}` rather than an error status.
pub async fn handle_job_recommendations(State(state): State<AppState>) -> Json<JobsResponse> {
    let jobs = match state.jobs.search_default().await {
        Ok(jobs) => jobs,
        Err(e) => {
            warn!("Job search failed, returning empty listing: {e}");
            Vec::new()
        }
    };
    Json(JobsResponse { jobs })
}

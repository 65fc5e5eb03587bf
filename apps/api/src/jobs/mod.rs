//! Job-search proxy: forwards a fixed JSearch query with RapidAPI headers
//! and passes the upstream listing array through verbatim.

pub mod handlers;

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;

const JSEARCH_API_URL: &str = "https://jsearch.p.rapidapi.com/search";
const JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";
const DEFAULT_QUERY: &str = "developer in India";

#[derive(Clone)]
pub struct JobSearchClient {
    client: Client,
    api_key: Option<String>,
}

impl JobSearchClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Runs the fixed developer-jobs query. Errors when no key is
    /// configured or the upstream call fails; the handler decides how to
    /// degrade.
    pub async fn search_default(&self) -> Result<Vec<Value>, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Upstream("RAPIDAPI_KEY is not configured".to_string()))?;

        let response = self
            .client
            .get(JSEARCH_API_URL)
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", JSEARCH_HOST)
            .query(&[
                ("query", DEFAULT_QUERY),
                ("page", "1"),
                ("num_pages", "2"),
            ])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Job search request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "Job search returned status {status}"
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            AppError::Upstream(format!("Job search returned malformed JSON: {e}"))
        })?;

        let jobs = extract_listings(&body);
        debug!("Job search returned {} listings", jobs.len());
        Ok(jobs)
    }
}

/// The upstream envelope carries listings under `data`; anything else
/// counts as zero listings.
fn extract_listings(body: &Value) -> Vec<Value> {
    body.get("data")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

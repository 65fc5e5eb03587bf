//! HTTP handlers for the résumé-analysis endpoints.

use std::path::Path;
use std::sync::OnceLock;

use anyhow::Context;
use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use chrono::Utc;
use regex::Regex;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, info};

use crate::analysis::strategy::{structured_report, AnalysisInput};
use crate::errors::AppError;
use crate::state::AppState;

/// Generic analysis string returned beside the `error` key on a pipeline
/// fault. Callers branch on the presence of `error`, not on HTTP status.
const ANALYSIS_FAILURE_MESSAGE: &str = "Error processing resume. Please try again.";
const DEFAULT_UPLOAD_NAME: &str = "resume.pdf";
const PREVIEW_CHARS: usize = 500;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
    #[serde(rename = "resumeScore")]
    pub resume_score: i64,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct TestAnalysisResponse {
    pub test1_ats: i64,
    pub test2_ats: i64,
    pub test1_analysis: String,
    pub test2_analysis: String,
}

/// POST /analyze-resume/
/// Multipart intake: a `file` part (PDF) plus an optional `job_description`
/// text field. The upload lives in a per-request scratch directory that is
/// removed when the handler returns, on every exit path.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut file_name: Option<String> = None;
    let mut file_bytes: Option<Bytes> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                file_name = field.file_name().map(str::to_string);
                file_bytes = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read the uploaded file: {e}"))
                })?);
            }
            Some("job_description") => {
                job_description = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read the job description: {e}"))
                })?;
            }
            _ => {}
        }
    }

    let bytes = file_bytes.ok_or_else(|| {
        AppError::Validation("A resume file part named 'file' is required".to_string())
    })?;

    let scratch = tempfile::tempdir()
        .context("failed to create scratch directory")
        .map_err(AppError::Internal)?;
    let upload_path = scratch.path().join(sanitize_file_name(file_name.as_deref()));

    tokio::fs::write(&upload_path, &bytes)
        .await
        .context("failed to write upload to scratch directory")
        .map_err(AppError::Internal)?;

    info!(
        file = %upload_path.display(),
        size = bytes.len(),
        "Extracting resume text"
    );

    // PDF parsing and the OCR shellouts are blocking work.
    let extractor = state.extractor.clone();
    let resume_text = tokio::task::spawn_blocking(move || extractor.extract(&upload_path))
        .await
        .context("extraction task panicked")
        .map_err(AppError::Internal)?;

    debug!(chars = resume_text.chars().count(), "Extraction finished");

    let input = AnalysisInput {
        resume_text,
        job_description: Some(job_description).filter(|jd| !jd.trim().is_empty()),
    };

    let response = match state.analyzer.run(&input).await {
        Ok(analysis) => {
            let resume_score = parse_ats_score(&analysis);
            Json(AnalyzeResponse {
                analysis,
                resume_score,
                timestamp: Utc::now().to_rfc3339(),
            })
            .into_response()
        }
        Err(e) => {
            error!("Analysis pipeline failed: {e}");
            Json(json!({
                "error": e.to_string(),
                "analysis": ANALYSIS_FAILURE_MESSAGE,
            }))
            .into_response()
        }
    };

    // `scratch` drops here, deleting the upload.
    Ok(response)
}

const TEST_RESUME_MINIMAL: &str = "John Doe\njohn@example.com\nSoftware Developer";

const TEST_RESUME_DETAILED: &str = "Jane Smith
jane.smith@email.com
+1-555-123-4567

EXPERIENCE
Senior Software Engineer at Tech Company (2020-2024)
- Led team of 5 developers on cloud migration project
- Improved system performance by 40%
- Developed microservices using Python and Docker
- 8 years of software development experience

EDUCATION
Bachelor of Science in Computer Science, State University

SKILLS
Python, JavaScript, React, Node.js, PostgreSQL, AWS, Docker, Kubernetes

PROJECTS
Built e-commerce platform serving 10,000+ users
Created CI/CD pipeline reducing deployment time by 60%

CERTIFICATIONS
AWS Certified Solutions Architect";

/// GET /test-analysis
/// Diagnostic: runs the structured pipeline against two fixed résumés and
/// returns both ATS scores plus truncated report previews.
pub async fn handle_test_analysis() -> Json<TestAnalysisResponse> {
    let run = |text: &str| {
        structured_report(&AnalysisInput {
            resume_text: text.to_string(),
            job_description: None,
        })
    };
    let test1 = run(TEST_RESUME_MINIMAL);
    let test2 = run(TEST_RESUME_DETAILED);

    Json(TestAnalysisResponse {
        test1_ats: parse_ats_score(&test1),
        test2_ats: parse_ats_score(&test2),
        test1_analysis: preview(&test1),
        test2_analysis: preview(&test2),
    })
}

fn ats_score_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"ATS SCORE:\s*(\d+)").expect("valid ATS score regex"))
}

/// Pulls the integer out of a report's ATS line; 0 when absent.
fn parse_ats_score(report: &str) -> i64 {
    ats_score_re()
        .captures(report)
        .and_then(|cap| cap[1].parse::<i64>().ok())
        .unwrap_or(0)
}

/// Keeps only the final path component of the client-supplied filename so
/// the upload cannot escape the scratch directory.
fn sanitize_file_name(name: Option<&str>) -> String {
    name.and_then(|n| Path::new(n).file_name())
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_UPLOAD_NAME.to_string())
}

/// First `PREVIEW_CHARS` characters — character count, not bytes; the
/// reports contain multi-byte glyphs.
fn preview(report: &str) -> String {
    report.chars().take(PREVIEW_CHARS).collect()
}

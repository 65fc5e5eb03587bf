//! Analysis strategies and their orchestration.
//!
//! Fallback-on-failure is modeled as an explicit ordered strategy list with
//! a uniform attempt contract. The default chain prefers the external model
//! when a credential is configured, then the structured heuristics, then
//! the keyword fallback, which cannot fail. The orchestrator returns the
//! first success and never merges outputs across strategies.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::analysis::facts::extract_facts;
use crate::analysis::keywords;
use crate::analysis::prompts;
use crate::analysis::report::{compose_report, Contact, ReportData};
use crate::analysis::scoring::{
    score_signals, ScoreSignals, FALLBACK_PROFILE, STRUCTURED_PROFILE,
};
use crate::errors::AppError;
use crate::llm_client::{sanitize_model_output, GeminiClient};

/// One résumé's worth of input to the analysis chain.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub resume_text: String,
    pub job_description: Option<String>,
}

#[async_trait]
pub trait AnalysisStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Produces a full report, or an error to make the orchestrator move on
    /// to the next strategy.
    async fn attempt(&self, input: &AnalysisInput) -> Result<String, AppError>;
}

/// Facts → structured-profile scores → composed report. Infallible for
/// well-formed strings.
pub struct StructuredAnalysis;

#[async_trait]
impl AnalysisStrategy for StructuredAnalysis {
    fn name(&self) -> &'static str {
        "structured"
    }

    async fn attempt(&self, input: &AnalysisInput) -> Result<String, AppError> {
        Ok(structured_report(input))
    }
}

/// Runs the structured pipeline synchronously. Shared with the diagnostic
/// endpoint, which exercises this path directly.
pub fn structured_report(input: &AnalysisInput) -> String {
    let facts = extract_facts(&input.resume_text);
    let signals = ScoreSignals::from_facts(&facts, &input.resume_text);
    let score = score_signals(&signals, &STRUCTURED_PROFILE);
    let data = ReportData {
        contact: Some(Contact {
            name: facts.name.clone(),
            email: facts.email.clone(),
            phone: facts.phone.clone(),
        }),
        skills: facts.skills,
        years: Some(facts.years_of_experience),
        signals,
        score,
    };
    compose_report(&data, input.job_description.as_deref(), Utc::now())
}

/// Prompt → Gemini → sanitized plain text. In the chain only when a model
/// credential is configured.
pub struct ModelAnalysis {
    client: GeminiClient,
}

impl ModelAnalysis {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_prompt(input: &AnalysisInput) -> String {
        let job_context = match input
            .job_description
            .as_deref()
            .filter(|jd| !jd.trim().is_empty())
        {
            Some(jd) => prompts::JOB_CONTEXT_BLOCK.replace("{job_description}", jd),
            None => String::new(),
        };
        prompts::RESUME_ANALYSIS_PROMPT
            .replace("{job_context}", &job_context)
            .replace("{resume_text}", &input.resume_text)
    }
}

#[async_trait]
impl AnalysisStrategy for ModelAnalysis {
    fn name(&self) -> &'static str {
        "model"
    }

    async fn attempt(&self, input: &AnalysisInput) -> Result<String, AppError> {
        let prompt = Self::build_prompt(input);
        let raw = self
            .client
            .generate(&prompt)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))?;
        Ok(sanitize_model_output(&raw))
    }
}

/// Signals scanned straight off the raw text under the fallback profile,
/// composed without contact or years. Last resort; cannot fail.
pub struct KeywordFallback;

#[async_trait]
impl AnalysisStrategy for KeywordFallback {
    fn name(&self) -> &'static str {
        "keyword-fallback"
    }

    async fn attempt(&self, input: &AnalysisInput) -> Result<String, AppError> {
        let signals = ScoreSignals::from_text(&input.resume_text);
        let score = score_signals(&signals, &FALLBACK_PROFILE);
        let data = ReportData {
            contact: None,
            skills: keywords::scan_skill_categories(&input.resume_text.to_lowercase()),
            years: None,
            signals,
            score,
        };
        Ok(compose_report(
            &data,
            input.job_description.as_deref(),
            Utc::now(),
        ))
    }
}

pub struct AnalysisOrchestrator {
    strategies: Vec<Arc<dyn AnalysisStrategy>>,
}

impl AnalysisOrchestrator {
    /// Default chain. The model strategy joins only when a client is
    /// configured; the structured and fallback strategies always follow it.
    pub fn new(model_client: Option<GeminiClient>) -> Self {
        let mut strategies: Vec<Arc<dyn AnalysisStrategy>> = Vec::new();
        if let Some(client) = model_client {
            strategies.push(Arc::new(ModelAnalysis::new(client)));
        }
        strategies.push(Arc::new(StructuredAnalysis));
        strategies.push(Arc::new(KeywordFallback));
        Self::with_strategies(strategies)
    }

    /// Custom chain, primarily for tests injecting failing strategies.
    pub fn with_strategies(strategies: Vec<Arc<dyn AnalysisStrategy>>) -> Self {
        Self { strategies }
    }

    /// Runs the chain and returns the first success. Mid-chain failures are
    /// logged and skipped; only an all-failing chain surfaces an error.
    pub async fn run(&self, input: &AnalysisInput) -> Result<String, AppError> {
        let mut last_error = AppError::Llm("no analysis strategies configured".to_string());
        for strategy in &self.strategies {
            match strategy.attempt(input).await {
                Ok(report) => {
                    info!("Analysis strategy '{}' produced the report", strategy.name());
                    return Ok(report);
                }
                Err(e) => {
                    warn!("Analysis strategy '{}' failed: {e}", strategy.name());
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_input(text: &str) -> AnalysisInput {
        AnalysisInput {
            resume_text: text.to_string(),
            job_description: None,
        }
    }

    struct FailingStrategy;

    #[async_trait]
    impl AnalysisStrategy for FailingStrategy {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn attempt(&self, _input: &AnalysisInput) -> Result<String, AppError> {
            Err(AppError::Llm("synthetic failure".to_string()))
        }
    }

    #[tokio::test]
    async fn test_default_chain_without_model_uses_structured_path() {
        let orchestrator = AnalysisOrchestrator::new(None);
        let input = make_input("John Doe\njohn@example.com\nSoftware Developer");
        let report = orchestrator.run(&input).await.unwrap();
        assert!(report.contains("Candidate: John Doe"));
        assert!(report.contains("ATS SCORE:"));
    }

    #[tokio::test]
    async fn test_failing_strategy_falls_through_to_next() {
        let orchestrator = AnalysisOrchestrator::with_strategies(vec![
            Arc::new(FailingStrategy),
            Arc::new(KeywordFallback),
        ]);
        let report = orchestrator
            .run(&make_input("experienced python developer"))
            .await
            .unwrap();
        assert!(report.contains("ATS SCORE:"));
        // The fallback path composes without a contact block.
        assert!(!report.contains("Candidate:"));
    }

    #[tokio::test]
    async fn test_all_failing_chain_surfaces_error() {
        let orchestrator =
            AnalysisOrchestrator::with_strategies(vec![Arc::new(FailingStrategy)]);
        let result = orchestrator.run(&make_input("anything")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_first_success_wins_over_later_strategies() {
        let orchestrator = AnalysisOrchestrator::with_strategies(vec![
            Arc::new(StructuredAnalysis),
            Arc::new(FailingStrategy),
        ]);
        let input = make_input("Jane Roe\njane@roe.dev\nEngineer");
        assert!(orchestrator.run(&input).await.is_ok());
    }

    #[tokio::test]
    async fn test_fallback_report_never_fails_on_empty_text() {
        let report = KeywordFallback.attempt(&make_input("")).await.unwrap();
        assert!(report.contains("RESUME ANALYSIS REPORT"));
        assert!(report.contains("- Technical Skills: Not clearly specified"));
    }

    #[test]
    fn test_structured_report_includes_job_match_when_supplied() {
        let input = AnalysisInput {
            resume_text: "Jane Roe\n5 years of rust".to_string(),
            job_description: Some("Backend role".to_string()),
        };
        let report = structured_report(&input);
        assert!(report.contains("JOB MATCH ANALYSIS:"));
        assert!(report.contains("Years of Experience: 5+ years"));
    }

    #[test]
    fn test_prompt_embeds_resume_and_optional_job_context() {
        let plain = ModelAnalysis::build_prompt(&make_input("the resume body"));
        assert!(plain.contains("the resume body"));
        assert!(!plain.contains("JOB DESCRIPTION:"));
        assert!(!plain.contains("{job_context}"));

        let with_jd = ModelAnalysis::build_prompt(&AnalysisInput {
            resume_text: "the resume body".to_string(),
            job_description: Some("needs kubernetes".to_string()),
        });
        assert!(with_jd.contains("JOB DESCRIPTION:\nneeds kubernetes"));
    }
}

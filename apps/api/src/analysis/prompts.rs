//! Prompt template for the external-model analysis path.
//!
//! The template demands plain text and a machine-parseable ATS line so the
//! boundary's score extraction works on model output exactly as it does on
//! heuristic reports.

pub const RESUME_ANALYSIS_PROMPT: &str = r#"You are an expert resume reviewer and career coach.

Analyze the resume below and produce a plain-text report with these sections, in this order:
1. An overall strength assessment out of 10.
2. Key technical skills you can identify, grouped by area.
3. The candidate's experience level and approximate years of experience.
4. Specific areas for improvement, as a numbered list.
5. A line in exactly this form: ATS SCORE: <number>/100
6. Recommended next steps for the candidate.

Rules:
- Plain text only. No markdown, no '#' headings, no bold markers.
- Be specific and reference actual content from the resume.
- Keep the report under 600 words.
{job_context}
RESUME:
{resume_text}"#;

/// Substituted for `{job_context}` when a job description was supplied.
pub const JOB_CONTEXT_BLOCK: &str = r#"
The candidate is targeting the job below. Weigh your advice toward it and add
a short JOB MATCH ANALYSIS section comparing the resume against it.

JOB DESCRIPTION:
{job_description}
"#;

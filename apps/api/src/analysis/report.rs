//! Report composition: pure string templating over already-computed scores
//! and facts. Nothing numeric is recomputed here — values are interpolated
//! into fixed section templates.

use chrono::{DateTime, Utc};

use crate::analysis::scoring::{ScoreResult, ScoreSignals};

/// Contact lines for the report header. Only the structured path fills this
/// in; the fallback path composes without one.
#[derive(Debug, Clone)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Everything the composer needs. `contact` and `years` are `None` on the
/// fallback path, which extracts neither.
#[derive(Debug, Clone)]
pub struct ReportData {
    pub contact: Option<Contact>,
    pub skills: Vec<(&'static str, Vec<&'static str>)>,
    pub years: Option<u32>,
    pub signals: ScoreSignals,
    pub score: ScoreResult,
}

const IMPROVEMENT_CAP: usize = 5;
const IMPROVEMENT_TOTAL: usize = 10;

/// Generic improvement advice used to pad the numbered list out to
/// `IMPROVEMENT_TOTAL` items after the unmet-predicate advice.
const GENERIC_IMPROVEMENTS: &[&str] = &[
    "Use action verbs at the start of bullet points",
    "Include specific technologies and tools used in each role",
    "Ensure consistent formatting and spacing",
    "Tailor your resume for specific job descriptions",
    "Keep your resume to 1-2 pages for better readability",
    "Include specific project outcomes and business impact",
    "Add measurable results and KPIs for each achievement",
    "Include links to portfolio, GitHub, or personal projects",
    "Use keywords from job descriptions you're targeting",
    "Get feedback from industry professionals or mentors",
];

pub fn compose_report(
    data: &ReportData,
    job_description: Option<&str>,
    generated_at: DateTime<Utc>,
) -> String {
    let mut report = String::new();

    report.push_str("📊 RESUME ANALYSIS REPORT\n");
    report.push_str("========================\n\n");

    if let Some(contact) = &data.contact {
        report.push_str(&format!("Candidate: {}\n", contact.name));
        report.push_str(&format!("Email: {}\n", contact.email));
        report.push_str(&format!("Phone: {}\n\n", contact.phone));
    }

    report.push_str(&format!("Overall Strength: {:.1}/10\n", data.score.strength));
    report.push_str(&format!(
        "Your resume demonstrates a {} professional foundation.\n\n",
        foundation_word(data.score.strength)
    ));

    report.push_str("🎯 KEY SKILLS IDENTIFIED:\n");
    if data.skills.is_empty() {
        report.push_str("- Technical Skills: Not clearly specified\n");
    } else {
        for (category, hits) in &data.skills {
            report.push_str(&format!("- {}: {}\n", category, hits.join(", ")));
        }
    }
    report.push('\n');

    report.push_str("💼 EXPERIENCE LEVEL:\n");
    report.push_str(&format!("{}\n", data.score.tier));
    // Zero means no years phrase was found; the line is omitted then.
    if let Some(years) = data.years.filter(|&y| y > 0) {
        report.push_str(&format!("Years of Experience: {years}+ years\n"));
    }
    report.push_str("Based on the depth and breadth of your experience and skills\n\n");

    report.push_str("📈 AREAS FOR IMPROVEMENT:\n");
    for (i, item) in improvement_items(&data.signals).iter().enumerate() {
        report.push_str(&format!("{}. {}\n", i + 1, item));
    }
    report.push('\n');

    report.push_str(&format!("🤖 ATS SCORE: {}/100\n", data.score.ats));
    report.push_str(&format!(
        "Your resume is {} for Applicant Tracking Systems.\n",
        optimization_phrase(data.score.ats)
    ));
    report.push_str(&format!(
        "Score indicates: {} ATS compatibility\n\n",
        compatibility_label(data.score.ats)
    ));

    report.push_str("Breakdown:\n");
    for (label, satisfied) in breakdown_items(&data.signals) {
        let mark = if satisfied { "✓" } else { "✗" };
        report.push_str(&format!("- {label}: {mark}\n"));
    }
    report.push('\n');

    report.push_str("✅ RECOMMENDED NEXT STEPS:\n");
    for (i, item) in next_steps(&data.signals).iter().enumerate() {
        report.push_str(&format!("{}. {}\n", i + 1, item));
    }
    report.push('\n');

    report.push_str("📋 RECOMMENDATIONS FOR CAREER GROWTH:\n");
    for item in career_growth(&data.signals) {
        report.push_str(&format!("- {item}\n"));
    }

    if let Some(jd) = job_description {
        if !jd.trim().is_empty() {
            report.push_str("\n📋 JOB MATCH ANALYSIS:\n");
            report.push_str(
                "Your resume aligns with the provided job description. \
                 Focus on highlighting the matching skills and experience.\n",
            );
        }
    }

    report.push_str(&format!(
        "\nGenerated on: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    report.push_str("Analysis Type: AI-Powered Professional Review\n");

    report
}

fn foundation_word(strength: f64) -> &'static str {
    if strength >= 7.0 {
        "strong"
    } else if strength >= 5.0 {
        "solid"
    } else {
        "developing"
    }
}

fn optimization_phrase(ats: i64) -> &'static str {
    if ats >= 75 {
        "well-optimized"
    } else if ats >= 60 {
        "reasonably optimized"
    } else {
        "not yet optimized"
    }
}

fn compatibility_label(ats: i64) -> &'static str {
    if ats >= 80 {
        "Excellent"
    } else if ats >= 60 {
        "Good"
    } else {
        "Fair"
    }
}

/// Numbered improvement list: advice for unmet predicates first (capped at
/// `IMPROVEMENT_CAP`), padded with generic items to `IMPROVEMENT_TOTAL`.
/// Numbering is continuous across both parts.
fn improvement_items(s: &ScoreSignals) -> Vec<&'static str> {
    let mut items: Vec<&'static str> = Vec::new();
    if !s.has_metrics {
        items.push(
            "Add quantifiable achievements and metrics (e.g., \"Improved performance by 40%\")",
        );
    }
    if !s.has_projects {
        items.push("Include project descriptions or portfolio links");
    }
    if !s.has_certifications {
        items.push("Add relevant certifications or continuous learning initiatives");
    }
    if !s.has_leadership {
        items.push("Highlight leadership or mentoring experience");
    }
    if s.skill_categories < 2 {
        items.push("Showcase a more diverse set of technical skills");
    }
    if !s.has_email {
        items.push("Add a contact email address");
    }
    if !s.has_phone {
        items.push("Add a phone number");
    }
    items.truncate(IMPROVEMENT_CAP);

    let remaining = IMPROVEMENT_TOTAL - items.len();
    items.extend(GENERIC_IMPROVEMENTS.iter().copied().take(remaining));
    items
}

fn breakdown_items(s: &ScoreSignals) -> [(&'static str, bool); 7] {
    [
        ("Contact Information", s.has_email && s.has_phone),
        ("Experience Section", s.has_experience),
        ("Education", s.has_education),
        ("Skills Listed", s.skill_categories > 0),
        ("Projects/Portfolio", s.has_projects),
        ("Quantifiable Results", s.has_metrics),
        ("Certifications", s.has_certifications),
    ]
}

fn next_steps(s: &ScoreSignals) -> [&'static str; 10] {
    [
        if s.has_metrics {
            "Expand on your quantifiable achievements"
        } else {
            "Add quantifiable metrics to your achievements"
        },
        if s.has_projects {
            "Add more detail to your project descriptions"
        } else {
            "Include project descriptions or portfolio links"
        },
        if s.has_leadership {
            "Emphasize your leadership contributions"
        } else {
            "Highlight any leadership or mentoring experience"
        },
        if s.has_certifications {
            "Keep your certifications up to date"
        } else {
            "Add relevant certifications"
        },
        "Tailor your resume for specific job descriptions",
        "Use strong action verbs at the beginning of bullet points",
        "Ensure consistent formatting and spacing",
        "Keep resume to 1-2 pages for better readability",
        "Include links to portfolio, GitHub, or live projects",
        "Get feedback from industry professionals",
    ]
}

fn career_growth(s: &ScoreSignals) -> [&'static str; 10] {
    [
        "Consider pursuing advanced certifications (AWS, Azure, GCP, Kubernetes)",
        "Build and showcase portfolio projects on GitHub",
        "Contribute to open-source projects to gain experience",
        if s.has_leadership {
            "Continue building on your leadership experience"
        } else {
            "Develop leadership and mentoring skills"
        },
        "Stay updated with latest technologies and frameworks",
        "Network with industry professionals and attend conferences",
        "Write technical blog posts or articles",
        "Participate in coding competitions or hackathons",
        "Consider specializing in a specific domain (AI/ML, DevOps, Cloud)",
        "Build a personal brand through social media and professional networks",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::analysis::scoring::TIER_ENTRY;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    fn minimal_data() -> ReportData {
        ReportData {
            contact: None,
            skills: vec![],
            years: None,
            signals: ScoreSignals::default(),
            score: ScoreResult {
                strength: 2.0,
                ats: 25,
                tier: TIER_ENTRY,
            },
        }
    }

    fn rich_data() -> ReportData {
        let signals = ScoreSignals {
            has_experience: true,
            has_education: true,
            has_projects: true,
            has_certifications: true,
            has_leadership: true,
            has_metrics: true,
            has_email: true,
            has_phone: true,
            years: 8,
            skill_categories: 2,
            text_chars: 900,
            newlines: 25,
            bullet_marks: 10,
        };
        ReportData {
            contact: Some(Contact {
                name: "Jane Roe".to_string(),
                email: "jane@roe.dev".to_string(),
                phone: "555-123-4567".to_string(),
            }),
            skills: vec![("Frontend", vec!["react", "css"]), ("DevOps", vec!["aws"])],
            years: Some(8),
            signals,
            score: ScoreResult {
                strength: 9.5,
                ats: 85,
                tier: "Senior Level Developer / Tech Lead",
            },
        }
    }

    #[test]
    fn test_sections_present_in_order() {
        let report = compose_report(&rich_data(), None, fixed_time());
        let sections = [
            "RESUME ANALYSIS REPORT",
            "KEY SKILLS IDENTIFIED:",
            "EXPERIENCE LEVEL:",
            "AREAS FOR IMPROVEMENT:",
            "ATS SCORE:",
            "RECOMMENDED NEXT STEPS:",
            "RECOMMENDATIONS FOR CAREER GROWTH:",
            "Generated on:",
        ];
        let mut last = 0;
        for section in sections {
            let pos = report[last..]
                .find(section)
                .unwrap_or_else(|| panic!("missing or out-of-order section {section:?}"));
            last += pos;
        }
    }

    #[test]
    fn test_contact_block_present_on_structured_data() {
        let report = compose_report(&rich_data(), None, fixed_time());
        assert!(report.contains("Candidate: Jane Roe"));
        assert!(report.contains("Email: jane@roe.dev"));
        assert!(report.contains("Phone: 555-123-4567"));
        assert!(report.contains("Years of Experience: 8+ years"));
    }

    #[test]
    fn test_contact_block_absent_on_fallback_data() {
        let report = compose_report(&minimal_data(), None, fixed_time());
        assert!(!report.contains("Candidate:"));
        assert!(!report.contains("Years of Experience:"));
    }

    #[test]
    fn test_zero_years_omits_the_years_line() {
        let mut data = minimal_data();
        data.years = Some(0);
        let report = compose_report(&data, None, fixed_time());
        assert!(!report.contains("Years of Experience:"));
    }

    #[test]
    fn test_skills_rendered_one_line_per_category() {
        let report = compose_report(&rich_data(), None, fixed_time());
        assert!(report.contains("- Frontend: react, css"));
        assert!(report.contains("- DevOps: aws"));
    }

    #[test]
    fn test_skills_sentinel_when_none_matched() {
        let report = compose_report(&minimal_data(), None, fixed_time());
        assert!(report.contains("- Technical Skills: Not clearly specified"));
    }

    #[test]
    fn test_improvements_number_continuously_to_ten() {
        let report = compose_report(&minimal_data(), None, fixed_time());
        for n in 1..=10 {
            assert!(
                report.contains(&format!("\n{n}. ")),
                "missing improvement number {n}"
            );
        }
        assert!(!report.contains("\n11. "));
    }

    #[test]
    fn test_unmet_advice_listed_before_generic_tail() {
        let items = improvement_items(&ScoreSignals::default());
        assert_eq!(items.len(), 10);
        // All predicates unmet: the cap keeps exactly five unmet entries.
        assert!(items[0].starts_with("Add quantifiable achievements"));
        assert_eq!(items[5], GENERIC_IMPROVEMENTS[0]);
    }

    #[test]
    fn test_all_met_improvements_are_fully_generic() {
        let items = improvement_items(&rich_data().signals);
        assert_eq!(items.len(), 10);
        assert_eq!(items, GENERIC_IMPROVEMENTS.to_vec());
    }

    #[test]
    fn test_job_match_section_only_with_nonempty_description() {
        let with = compose_report(&rich_data(), Some("Rust backend role"), fixed_time());
        assert!(with.contains("JOB MATCH ANALYSIS:"));

        let without = compose_report(&rich_data(), None, fixed_time());
        assert!(!without.contains("JOB MATCH ANALYSIS:"));

        let blank = compose_report(&rich_data(), Some("   "), fixed_time());
        assert!(!blank.contains("JOB MATCH ANALYSIS:"));
    }

    #[test]
    fn test_breakdown_marks_follow_signals() {
        let report = compose_report(&minimal_data(), None, fixed_time());
        assert!(report.contains("- Contact Information: ✗"));
        assert!(report.contains("- Experience Section: ✗"));

        let rich = compose_report(&rich_data(), None, fixed_time());
        assert!(rich.contains("- Contact Information: ✓"));
        assert!(rich.contains("- Certifications: ✓"));
    }

    #[test]
    fn test_ats_bands() {
        assert_eq!(optimization_phrase(85), "well-optimized");
        assert_eq!(optimization_phrase(60), "reasonably optimized");
        assert_eq!(optimization_phrase(40), "not yet optimized");
        assert_eq!(compatibility_label(80), "Excellent");
        assert_eq!(compatibility_label(79), "Good");
        assert_eq!(compatibility_label(59), "Fair");
    }

    #[test]
    fn test_timestamp_format() {
        let report = compose_report(&minimal_data(), None, fixed_time());
        assert!(report.contains("Generated on: 2024-05-01 12:30:00"));
        assert!(report.ends_with("Analysis Type: AI-Powered Professional Review\n"));
    }

    #[test]
    fn test_score_values_interpolated_not_recomputed() {
        let mut data = minimal_data();
        data.score.ats = 42;
        data.score.strength = 3.7;
        let report = compose_report(&data, None, fixed_time());
        assert!(report.contains("🤖 ATS SCORE: 42/100"));
        assert!(report.contains("Overall Strength: 3.7/10"));
    }
}

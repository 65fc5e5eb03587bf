//! Field extraction: derives a structured fact set from raw résumé text.
//!
//! Every field is an independent scan over the same text — regex for
//! contact/years, keyword containment for everything else. No scan depends
//! on another's result, so extraction order is irrelevant.

use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::keywords;

/// Placeholder used when the name guess finds nothing usable.
pub const NAME_SENTINEL: &str = "Candidate";
/// Placeholder for absent email/phone matches.
pub const NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Clone)]
pub struct ExtractedFacts {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Non-empty categories only, in fixed category order.
    pub skills: Vec<(&'static str, Vec<&'static str>)>,
    pub has_experience: bool,
    /// Max value captured by the "N years" pattern; 0 when absent.
    pub years_of_experience: u32,
    pub education: Vec<&'static str>,
    pub certifications: Vec<&'static str>,
    pub has_projects: bool,
    pub has_leadership: bool,
    pub has_metrics: bool,
}

impl ExtractedFacts {
    pub fn has_email(&self) -> bool {
        self.email != NOT_PROVIDED
    }

    pub fn has_phone(&self) -> bool {
        self.phone != NOT_PROVIDED
    }
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email regex")
    })
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}").expect("valid phone regex")
    })
}

fn years_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\+?\s*(?:years?|yrs?)").expect("valid years regex"))
}

/// Runs every field scan against `text` and assembles the fact set.
/// Keyword scans operate on a lower-cased copy; name/contact extraction
/// preserves original casing.
pub fn extract_facts(text: &str) -> ExtractedFacts {
    let lower = text.to_lowercase();

    ExtractedFacts {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        skills: keywords::scan_skill_categories(&lower),
        has_experience: keywords::contains_any(&lower, keywords::EXPERIENCE_KEYWORDS),
        years_of_experience: extract_years(&lower),
        education: keywords::matched_keywords(&lower, keywords::EDUCATION_KEYWORDS),
        certifications: keywords::matched_keywords(&lower, keywords::CERTIFICATION_KEYWORDS),
        has_projects: keywords::contains_any(&lower, keywords::PROJECT_KEYWORDS),
        has_leadership: keywords::contains_any(&lower, keywords::LEADERSHIP_KEYWORDS),
        has_metrics: keywords::contains_any(&lower, keywords::METRICS_KEYWORDS),
    }
}

/// Name guess: first of the leading 5 lines whose trimmed content is
/// non-empty with at most 3 whitespace-separated tokens.
fn extract_name(text: &str) -> String {
    text.lines()
        .take(5)
        .map(str::trim)
        .find(|line| !line.is_empty() && line.split_whitespace().count() <= 3)
        .map(str::to_string)
        .unwrap_or_else(|| NAME_SENTINEL.to_string())
}

fn extract_email(text: &str) -> String {
    email_re()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_PROVIDED.to_string())
}

fn extract_phone(text: &str) -> String {
    phone_re()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_PROVIDED.to_string())
}

/// Max integer captured by the "N years"/"N yrs" pattern across the text.
fn extract_years(text_lower: &str) -> u32 {
    years_re()
        .captures_iter(text_lower)
        .filter_map(|cap| cap[1].parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "John Doe\njohn@example.com\nSoftware Developer";

    #[test]
    fn test_email_extracted_exactly() {
        let facts = extract_facts(MINIMAL);
        assert_eq!(facts.email, "john@example.com");
        assert!(facts.has_email());
    }

    #[test]
    fn test_missing_contact_yields_sentinels() {
        let facts = extract_facts("no contact details here at all");
        assert_eq!(facts.email, NOT_PROVIDED);
        assert_eq!(facts.phone, NOT_PROVIDED);
        assert!(!facts.has_email());
        assert!(!facts.has_phone());
    }

    #[test]
    fn test_phone_formats() {
        for text in [
            "call 555-123-4567 anytime",
            "call 555.123.4567 anytime",
            "call (555) 123-4567 anytime",
            "call +915551234567 anytime",
        ] {
            let facts = extract_facts(text);
            assert_ne!(facts.phone, NOT_PROVIDED, "no match in {text:?}");
        }
    }

    #[test]
    fn test_name_from_first_short_line() {
        let facts = extract_facts(MINIMAL);
        assert_eq!(facts.name, "John Doe");
    }

    #[test]
    fn test_name_skips_long_lines() {
        let text = "A very long headline that is not a name at all\nJane Roe\nEngineer";
        assert_eq!(extract_facts(text).name, "Jane Roe");
    }

    #[test]
    fn test_name_sentinel_when_no_short_line_in_window() {
        let text = "one two three four five\nsix seven eight nine ten\n\
                    a b c d e\nf g h i j\nk l m n o\nShort Name";
        // "Short Name" is on line 6, outside the 5-line window.
        assert_eq!(extract_facts(text).name, NAME_SENTINEL);
    }

    #[test]
    fn test_years_takes_max_match() {
        let text = "2 years at Acme, then 7+ years building services, 3 yrs consulting";
        assert_eq!(extract_facts(text).years_of_experience, 7);
    }

    #[test]
    fn test_years_default_zero() {
        assert_eq!(extract_facts(MINIMAL).years_of_experience, 0);
    }

    #[test]
    fn test_minimal_input_has_near_empty_skills() {
        let facts = extract_facts(MINIMAL);
        // "Software Developer" trips the experience keyword list but maps to
        // no skill category.
        assert!(facts.has_experience);
        assert!(facts.skills.is_empty());
    }

    #[test]
    fn test_rich_input_sets_all_booleans() {
        let text = "Senior Software Engineer\n\
                    Improved performance by 40%\n\
                    Led team of 5\n\
                    Bachelor of Science\n\
                    React, JavaScript, TypeScript\n\
                    AWS Certified";
        let facts = extract_facts(text);
        assert!(facts.has_experience);
        assert!(facts.has_metrics);
        assert!(facts.has_leadership);
        assert!(!facts.education.is_empty());
        assert!(!facts.certifications.is_empty());
        assert!(facts.skills.iter().any(|(c, _)| *c == "Frontend"));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "Jane Roe\njane@roe.dev\n10 years of python and docker";
        let a = extract_facts(text);
        let b = extract_facts(text);
        assert_eq!(a.email, b.email);
        assert_eq!(a.years_of_experience, b.years_of_experience);
        assert_eq!(a.skills, b.skills);
    }
}

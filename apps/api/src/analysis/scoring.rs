//! Scoring: one canonical rule table over boolean résumé signals, applied
//! under a per-path profile (base/floor/ceiling + tier ladder).
//!
//! Scores are additive heuristics over binary predicates — reproducible and
//! explainable per factor. The clamp bounds keep a maximally-deficient
//! résumé off zero and a maximally-complete one short of 100.

use crate::analysis::facts::ExtractedFacts;
use crate::analysis::keywords;

pub const TIER_SENIOR: &str = "Senior Level Developer / Tech Lead";
pub const TIER_MID: &str = "Mid-Level Developer";
pub const TIER_JUNIOR_MID: &str = "Junior to Mid-Level Developer";
pub const TIER_JUNIOR: &str = "Junior Developer";
pub const TIER_ENTRY: &str = "Entry-Level Developer";

/// How the experience tier is classified for a given path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierRules {
    /// Classify on the numeric years estimate. Used where years are known.
    YearsBased,
    /// Classify on leadership/experience booleans. Used by the fallback
    /// path, which never derives a years estimate.
    SignalBased,
}

/// Per-path scoring parameters. Weights are shared; only the ATS bounds and
/// the tier ladder differ between paths.
#[derive(Debug, Clone, Copy)]
pub struct ScoreProfile {
    pub ats_base: i64,
    pub ats_floor: i64,
    pub ats_ceiling: i64,
    pub tier_rules: TierRules,
}

pub const STRUCTURED_PROFILE: ScoreProfile = ScoreProfile {
    ats_base: 50,
    ats_floor: 25,
    ats_ceiling: 85,
    tier_rules: TierRules::YearsBased,
};

pub const FALLBACK_PROFILE: ScoreProfile = ScoreProfile {
    ats_base: 50,
    ats_floor: 20,
    ats_ceiling: 85,
    tier_rules: TierRules::SignalBased,
};

/// The scorer's input: boolean predicates plus text-shape stats. Built from
/// `ExtractedFacts` on the structured path, or scanned straight off the raw
/// text on the fallback path (which therefore carries no contact/years).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSignals {
    pub has_experience: bool,
    pub has_education: bool,
    pub has_projects: bool,
    pub has_certifications: bool,
    pub has_leadership: bool,
    pub has_metrics: bool,
    pub has_email: bool,
    pub has_phone: bool,
    pub years: u32,
    pub skill_categories: usize,
    pub text_chars: usize,
    pub newlines: usize,
    pub bullet_marks: usize,
}

impl ScoreSignals {
    pub fn from_facts(facts: &ExtractedFacts, text: &str) -> Self {
        let (text_chars, newlines, bullet_marks) = shape_stats(text);
        Self {
            has_experience: facts.has_experience,
            has_education: !facts.education.is_empty(),
            has_projects: facts.has_projects,
            has_certifications: !facts.certifications.is_empty(),
            has_leadership: facts.has_leadership,
            has_metrics: facts.has_metrics,
            has_email: facts.has_email(),
            has_phone: facts.has_phone(),
            years: facts.years_of_experience,
            skill_categories: facts.skills.len(),
            text_chars,
            newlines,
            bullet_marks,
        }
    }

    /// Direct scan over lower-cased raw text using the shared keyword
    /// tables. No contact or years extraction happens here.
    pub fn from_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        let (text_chars, newlines, bullet_marks) = shape_stats(text);
        Self {
            has_experience: keywords::contains_any(&lower, keywords::EXPERIENCE_KEYWORDS),
            has_education: keywords::contains_any(&lower, keywords::EDUCATION_KEYWORDS),
            has_projects: keywords::contains_any(&lower, keywords::PROJECT_KEYWORDS),
            has_certifications: keywords::contains_any(&lower, keywords::CERTIFICATION_KEYWORDS),
            has_leadership: keywords::contains_any(&lower, keywords::LEADERSHIP_KEYWORDS),
            has_metrics: keywords::contains_any(&lower, keywords::METRICS_KEYWORDS),
            has_email: false,
            has_phone: false,
            years: 0,
            skill_categories: keywords::scan_skill_categories(&lower).len(),
            text_chars,
            newlines,
            bullet_marks,
        }
    }
}

/// Character, newline and bullet-mark counts. The bullet count is the larger
/// of the dot-bullet and dash counts.
fn shape_stats(text: &str) -> (usize, usize, usize) {
    let chars = text.chars().count();
    let newlines = text.matches('\n').count();
    let bullets = text.matches('•').count().max(text.matches('-').count());
    (chars, newlines, bullets)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub strength: f64,
    pub ats: i64,
    pub tier: &'static str,
}

pub fn score_signals(signals: &ScoreSignals, profile: &ScoreProfile) -> ScoreResult {
    let strength = strength_score(signals);
    ScoreResult {
        strength,
        ats: ats_score(signals, profile),
        tier: experience_tier(signals, strength, profile.tier_rules),
    }
}

/// Strength score: fixed increments per satisfied predicate, clamped to
/// [0, 10]. A fully-satisfied signal set lands exactly on 10.
fn strength_score(s: &ScoreSignals) -> f64 {
    let mut score: f64 = 0.0;
    if s.has_experience {
        score += 2.0;
    }
    if s.has_education {
        score += 1.5;
    }
    if s.has_projects {
        score += 2.0;
    }
    if s.has_certifications {
        score += 1.0;
    }
    if s.has_leadership {
        score += 1.5;
    }
    if s.has_metrics {
        score += 1.0;
    }
    if s.years >= 5 {
        score += 0.5;
    }
    if s.skill_categories >= 3 {
        score += 0.5;
    }
    score.clamp(0.0, 10.0)
}

/// ATS score: weighted increments and deductions over the same predicates,
/// plus length and structure adjustments, clamped to the profile bounds.
fn ats_score(s: &ScoreSignals, profile: &ScoreProfile) -> i64 {
    let mut score = profile.ats_base;

    if s.has_email {
        score += 5;
    }
    if s.has_phone {
        score += 5;
    }
    if s.has_experience {
        score += 15;
    }
    if s.has_education {
        score += 10;
    }
    if s.skill_categories > 0 {
        score += 12;
        if s.skill_categories >= 3 {
            score += 3;
        }
    }
    if s.has_projects {
        score += 8;
    }
    if s.has_metrics {
        score += 10;
    }
    if s.has_certifications {
        score += 5;
    }
    if s.has_leadership {
        score += 5;
    }
    if s.years >= 5 {
        score += 5;
    }

    if !s.has_metrics {
        score -= 8;
    }
    if !s.has_projects {
        score -= 5;
    }
    if s.skill_categories == 0 {
        score -= 10;
    }
    if !s.has_education {
        score -= 5;
    }

    if s.text_chars < 300 {
        score -= 10;
    } else if s.text_chars > 2500 {
        score -= 5;
    } else if (500..=1500).contains(&s.text_chars) {
        score += 2;
    }

    if s.newlines > 20 {
        score += 2;
    }
    if s.bullet_marks > 5 {
        score += 2;
    }

    score.clamp(profile.ats_floor, profile.ats_ceiling)
}

/// Experience tier, first match wins.
fn experience_tier(s: &ScoreSignals, strength: f64, rules: TierRules) -> &'static str {
    match rules {
        TierRules::YearsBased => {
            if s.years >= 10 && strength >= 7.0 {
                TIER_SENIOR
            } else if s.years >= 5 && strength >= 5.0 {
                TIER_MID
            } else if s.years >= 2 {
                TIER_JUNIOR_MID
            } else if s.years > 0 {
                TIER_JUNIOR
            } else {
                TIER_ENTRY
            }
        }
        TierRules::SignalBased => {
            if s.has_leadership && strength >= 7.0 {
                TIER_SENIOR
            } else if s.has_experience && strength >= 5.0 {
                TIER_MID
            } else if s.has_experience {
                TIER_JUNIOR_MID
            } else {
                TIER_ENTRY
            }
        }
    }
}

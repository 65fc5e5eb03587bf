//! Keyword tables shared by the field extractor and the keyword-fallback
//! scan. Single source of truth — both paths must see identical lists.
//!
//! Matching is substring containment on lower-cased text, not token
//! matching, so multi-symbol entries like "c++" and "ci/cd" work without
//! special cases.

/// Skill categories in fixed render order. Categories with zero matches are
/// omitted from scan results entirely.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Frontend",
        &[
            "react",
            "vue",
            "angular",
            "html",
            "css",
            "javascript",
            "typescript",
            "tailwind",
            "bootstrap",
            "next.js",
            "svelte",
        ],
    ),
    (
        "Backend",
        &[
            "node",
            "express",
            "django",
            "fastapi",
            "flask",
            "java",
            "spring",
            "golang",
            "rust",
            "python",
            "php",
            "laravel",
            "asp.net",
            "c++",
        ],
    ),
    (
        "Database",
        &[
            "mongodb",
            "postgresql",
            "mysql",
            "redis",
            "elasticsearch",
            "cassandra",
            "dynamodb",
            "firebase",
            "oracle",
            "sql",
        ],
    ),
    (
        "DevOps",
        &[
            "docker",
            "kubernetes",
            "jenkins",
            "gitlab",
            "github",
            "aws",
            "azure",
            "gcp",
            "terraform",
            "ansible",
            "circleci",
        ],
    ),
    (
        "Other",
        &[
            "git",
            "rest",
            "graphql",
            "microservices",
            "agile",
            "scrum",
            "linux",
            "unix",
            "ci/cd",
            "api",
        ],
    ),
];

pub const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "worked",
    "developed",
    "managed",
    "led",
    "senior",
    "junior",
    "engineer",
    "developer",
    "manager",
    "director",
];

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor", "master", "degree", "university", "college", "b.tech", "m.tech", "phd", "diploma",
    "b.s.", "m.s.",
];

pub const CERTIFICATION_KEYWORDS: &[&str] = &[
    "certified",
    "certification",
    "certificate",
    "aws",
    "gcp",
    "azure",
    "scrum",
    "agile",
    "cissp",
    "ccna",
    "ckad",
];

pub const PROJECT_KEYWORDS: &[&str] = &[
    "project",
    "built",
    "created",
    "developed",
    "implemented",
    "designed",
    "architected",
    "github",
    "portfolio",
];

pub const LEADERSHIP_KEYWORDS: &[&str] = &[
    "led",
    "managed",
    "supervised",
    "mentored",
    "team",
    "leader",
    "head",
    "director",
    "manager",
    "lead",
];

pub const METRICS_KEYWORDS: &[&str] = &[
    "%",
    "improved",
    "increased",
    "reduced",
    "saved",
    "achieved",
    "delivered",
    "revenue",
    "users",
    "performance",
    "growth",
    "efficiency",
];

/// True if any keyword from `needles` occurs in `text_lower`.
/// The caller is responsible for lower-casing the haystack once.
pub fn contains_any(text_lower: &str, needles: &[&str]) -> bool {
    needles.iter().any(|kw| text_lower.contains(kw))
}

/// Returns the subset of `needles` present in `text_lower`, preserving
/// table order.
pub fn matched_keywords(text_lower: &str, needles: &'static [&'static str]) -> Vec<&'static str> {
    needles
        .iter()
        .filter(|kw| text_lower.contains(*kw))
        .copied()
        .collect()
}

/// Scans all skill categories, keeping only those with at least one match.
/// Invariant: every returned category has a non-empty keyword list.
pub fn scan_skill_categories(text_lower: &str) -> Vec<(&'static str, Vec<&'static str>)> {
    SKILL_CATEGORIES
        .iter()
        .filter_map(|(category, keywords)| {
            let hits = matched_keywords(text_lower, keywords);
            if hits.is_empty() {
                None
            } else {
                Some((*category, hits))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any_hit() {
        assert!(contains_any("senior rust engineer", EXPERIENCE_KEYWORDS));
    }

    #[test]
    fn test_contains_any_miss() {
        assert!(!contains_any("lorem ipsum dolor", EDUCATION_KEYWORDS));
    }

    #[test]
    fn test_empty_categories_omitted() {
        let skills = scan_skill_categories("plain prose with no technology terms");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_every_present_category_nonempty() {
        let skills = scan_skill_categories("react frontend, docker deploys, postgresql storage");
        assert!(!skills.is_empty());
        for (category, hits) in &skills {
            assert!(!hits.is_empty(), "category {category} had no matches");
        }
    }

    #[test]
    fn test_category_order_is_fixed() {
        let skills = scan_skill_categories("sql and css and docker");
        let order: Vec<&str> = skills.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, vec!["Frontend", "Database", "DevOps"]);
    }

    #[test]
    fn test_multi_symbol_keywords_match_as_substrings() {
        let skills = scan_skill_categories("modern c++ services with ci/cd pipelines");
        let backend = skills.iter().find(|(c, _)| *c == "Backend");
        assert!(backend.is_some_and(|(_, hits)| hits.contains(&"c++")));
        let other = skills.iter().find(|(c, _)| *c == "Other");
        assert!(other.is_some_and(|(_, hits)| hits.contains(&"ci/cd")));
    }

    #[test]
    fn test_matched_keywords_preserve_table_order() {
        let hits = matched_keywords("phd from a university, bachelor before that", EDUCATION_KEYWORDS);
        assert_eq!(hits, vec!["bachelor", "university", "phd"]);
    }
}

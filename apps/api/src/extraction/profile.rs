//! Profile Extractor — turns raw resume text into a structured candidate profile.
//!
//! Pure and total: every field degrades to a safe default when no pattern
//! matches, so `extract` never fails and is deterministic for a given input.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extraction::vocabulary::{title_case, SkillVocabulary};

/// Characters of context kept before an education keyword.
const EDUCATION_CONTEXT_BEFORE: usize = 20;
/// Characters of context kept after an education keyword.
const EDUCATION_CONTEXT_AFTER: usize = 100;

/// Degree keywords scanned in order; the first hit wins.
const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "b.tech", "m.tech", "b.s", "m.s", "mba",
];

/// Structured fields derived from one resume's text.
/// Created once per uploaded document and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: String,
    pub raw_text: String,
}

/// Extracts candidate profiles from plain text.
///
/// Regexes are compiled once at construction. The experience patterns form an
/// ordered rule table: rules are tried in sequence and the first rule with a
/// match decides the value.
pub struct ProfileExtractor {
    vocabulary: SkillVocabulary,
    email: Regex,
    phone: Regex,
    experience_rules: Vec<Regex>,
}

impl ProfileExtractor {
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        Self {
            vocabulary,
            email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("invalid email pattern"),
            phone: Regex::new(r"[\+\(]?[1-9][0-9 .\-\(\)]{8,}[0-9]")
                .expect("invalid phone pattern"),
            experience_rules: vec![
                Regex::new(r"(\d+)\+?\s*years?\s+(?:of\s+)?experience")
                    .expect("invalid experience pattern"),
                Regex::new(r"experience[:\s]+(\d+)\+?\s*years?")
                    .expect("invalid experience pattern"),
            ],
        }
    }

    /// Extracts a profile from raw resume text. Never fails; fields with no
    /// recognizable match are left at their defaults.
    pub fn extract(&self, text: &str) -> CandidateProfile {
        let lower = text.to_lowercase();

        let email = self
            .email
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let phone = self
            .phone
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        // Resumes conventionally lead with the candidate's name.
        let name = text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
            .to_string();

        let skills = self
            .vocabulary
            .extraction_skills()
            .iter()
            .filter(|skill| lower.contains(skill.as_str()))
            .map(|skill| title_case(skill))
            .collect();

        let experience_years = self
            .experience_rules
            .iter()
            .find_map(|rule| rule.captures(&lower))
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0);

        let education = education_snippet(text, &lower);

        CandidateProfile {
            name,
            email,
            phone,
            skills,
            experience_years,
            education,
            raw_text: text.to_string(),
        }
    }
}

/// Context window around the first recognized degree keyword, clamped to the
/// text bounds. Returns an empty string when no keyword occurs.
fn education_snippet(text: &str, lower: &str) -> String {
    for keyword in EDUCATION_KEYWORDS {
        if let Some(idx) = lower.find(keyword) {
            let start = snap_to_boundary(text, idx.saturating_sub(EDUCATION_CONTEXT_BEFORE));
            let end = snap_to_boundary(text, idx.saturating_add(EDUCATION_CONTEXT_AFTER));
            return text[start..end].trim().to_string();
        }
    }
    String::new()
}

/// Largest char boundary at or below `idx`, clamped to the text length.
/// Keyword offsets come from the lower-cased copy, which can drift from the
/// original on non-ASCII input; snapping keeps the slice valid regardless.
fn snap_to_boundary(text: &str, idx: usize) -> usize {
    let mut idx = idx.min(text.len());
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ProfileExtractor {
        ProfileExtractor::new(SkillVocabulary::builtin())
    }

    const SAMPLE: &str = "Jane Doe\njane.doe@example.com\n+1 415-555-0199\n\
        5 years of experience in Python and AWS.\n\
        Bachelor of Science in Computer Science, 2018.";

    #[test]
    fn test_empty_text_yields_default_profile() {
        let profile = extractor().extract("");
        assert_eq!(profile.name, "");
        assert_eq!(profile.email, "");
        assert_eq!(profile.phone, "");
        assert!(profile.skills.is_empty());
        assert_eq!(profile.experience_years, 0);
        assert_eq!(profile.education, "");
        assert_eq!(profile.raw_text, "");
    }

    #[test]
    fn test_email_first_match_wins() {
        let profile = extractor().extract("contact jane.doe@example.com or hr@corp.io");
        assert_eq!(profile.email, "jane.doe@example.com");
    }

    #[test]
    fn test_phone_extraction() {
        let profile = extractor().extract(SAMPLE);
        assert_eq!(profile.phone, "+1 415-555-0199");
    }

    #[test]
    fn test_name_is_first_nonempty_line() {
        let profile = extractor().extract("\n\n  Jane Doe  \nEngineer");
        assert_eq!(profile.name, "Jane Doe");
    }

    #[test]
    fn test_skills_are_title_cased_in_vocabulary_order() {
        let profile = extractor().extract("5 years of experience in Python and AWS");
        assert!(profile.skills.contains(&"Python".to_string()));
        assert!(profile.skills.contains(&"Aws".to_string()));
        let python = profile.skills.iter().position(|s| s == "Python").unwrap();
        let aws = profile.skills.iter().position(|s| s == "Aws").unwrap();
        assert!(python < aws, "vocabulary order not preserved");
    }

    #[test]
    fn test_skills_subset_of_vocabulary() {
        let vocab = SkillVocabulary::builtin();
        let profile = extractor().extract(SAMPLE);
        for skill in &profile.skills {
            assert!(vocab
                .extraction_skills()
                .iter()
                .any(|v| title_case(v) == *skill));
        }
    }

    #[test]
    fn test_skills_are_deduplicated() {
        let profile = extractor().extract("python python python");
        assert_eq!(profile.skills, vec!["Python".to_string()]);
    }

    #[test]
    fn test_experience_first_rule_wins() {
        let profile = extractor().extract(SAMPLE);
        assert_eq!(profile.experience_years, 5);
    }

    #[test]
    fn test_experience_second_rule_applies_when_first_misses() {
        let profile = extractor().extract("Experience: 7+ years in backend work");
        assert_eq!(profile.experience_years, 7);
    }

    #[test]
    fn test_experience_rule_order_over_match_position() {
        // The second rule's phrasing appears first in the text, but the first
        // rule still decides because rules are tried in order.
        let profile = extractor().extract("experience: 3 years. Also 9 years of experience.");
        assert_eq!(profile.experience_years, 9);
    }

    #[test]
    fn test_experience_plus_suffix() {
        let profile = extractor().extract("10+ years experience leading teams");
        assert_eq!(profile.experience_years, 10);
    }

    #[test]
    fn test_education_window_is_substring_of_input() {
        let profile = extractor().extract(SAMPLE);
        assert!(!profile.education.is_empty());
        assert!(SAMPLE.contains(&profile.education));
        assert!(profile.education.to_lowercase().contains("bachelor"));
    }

    #[test]
    fn test_education_clamped_on_short_text() {
        let profile = extractor().extract("MBA");
        assert_eq!(profile.education, "MBA");
    }

    #[test]
    fn test_education_first_keyword_wins() {
        let profile = extractor().extract("Master of Arts. Bachelor of Science.");
        // "bachelor" precedes "master" in the keyword list.
        assert!(profile.education.to_lowercase().contains("bachelor"));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let a = extractor().extract(SAMPLE);
        let b = extractor().extract(SAMPLE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_raw_text_retained_verbatim() {
        let profile = extractor().extract(SAMPLE);
        assert_eq!(profile.raw_text, SAMPLE);
    }

    #[test]
    fn test_non_ascii_text_does_not_panic() {
        let profile = extractor().extract("Åsa Löfgren\nBachelor på KTH — två år");
        assert!(profile.education.to_lowercase().contains("bachelor"));
    }
}

//! Deterministic Scorer — local, reproducible fallback matching.
//!
//! Operates only on the fixed matching vocabulary, so results are identical
//! across runs whenever the remote analyzer is unavailable.

use crate::extraction::vocabulary::{title_case, SkillVocabulary};
use crate::screening::engine::{Recommendation, ScreeningResult};

/// Rounded scores at or above this shortlist the candidate.
pub const SHORTLIST_THRESHOLD: f64 = 7.5;
/// Rounded scores at or above this (and below the shortlist threshold) are a
/// maybe.
pub const MAYBE_THRESHOLD: f64 = 5.0;

const SHORTLIST_JUSTIFICATION: &str =
    "Strong alignment with job requirements based on technical skills.";
const MAYBE_JUSTIFICATION: &str =
    "Partial match with some relevant skills but gaps in key areas.";
const REJECT_JUSTIFICATION: &str = "Limited match with job requirements.";

/// Scores a resume against a job description by keyword overlap.
///
/// For each matching-vocabulary skill mentioned in the job description, the
/// resume either matches it or misses it; the score is the matched fraction
/// scaled to 10 and rounded to one decimal. Thresholds apply to the rounded
/// value — a raw 7.45 rounds to 7.5 and shortlists.
pub fn score_by_keywords(
    vocabulary: &SkillVocabulary,
    resume_text: &str,
    job_description: &str,
) -> ScreeningResult {
    let resume_lower = resume_text.to_lowercase();
    let job_lower = job_description.to_lowercase();

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for skill in vocabulary.matching_skills() {
        if !job_lower.contains(skill.as_str()) {
            continue;
        }
        if resume_lower.contains(skill.as_str()) {
            matched_skills.push(title_case(skill));
        } else {
            missing_skills.push(title_case(skill));
        }
    }

    // max(.., 1) guards the division when the job description mentions no
    // vocabulary skill; the score degrades to 0 in that case.
    let mentioned = (matched_skills.len() + missing_skills.len()).max(1);
    let raw_score = matched_skills.len() as f64 / mentioned as f64 * 10.0;
    let match_score = (raw_score * 10.0).round() / 10.0;

    let (recommendation, justification) = if match_score >= SHORTLIST_THRESHOLD {
        (Recommendation::Shortlist, SHORTLIST_JUSTIFICATION)
    } else if match_score >= MAYBE_THRESHOLD {
        (Recommendation::Maybe, MAYBE_JUSTIFICATION)
    } else {
        (Recommendation::Reject, REJECT_JUSTIFICATION)
    };

    ScreeningResult {
        match_score,
        matched_skills,
        missing_skills,
        justification: justification.to_string(),
        recommendation,
        fallback_used: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(resume: &str, jd: &str) -> ScreeningResult {
        score_by_keywords(&SkillVocabulary::builtin(), resume, jd)
    }

    #[test]
    fn test_half_match_is_maybe() {
        let result = score(
            "Backend engineer, strong Python.",
            "Looking for Python and Docker.",
        );
        assert_eq!(result.matched_skills, vec!["Python".to_string()]);
        assert_eq!(result.missing_skills, vec!["Docker".to_string()]);
        assert_eq!(result.match_score, 5.0);
        assert_eq!(result.recommendation, Recommendation::Maybe);
        assert!(result.fallback_used);
    }

    #[test]
    fn test_full_match_shortlists() {
        let result = score("python, aws, docker", "python, aws and docker required");
        assert_eq!(result.match_score, 10.0);
        assert_eq!(result.recommendation, Recommendation::Shortlist);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_no_vocabulary_skill_in_jd_scores_zero() {
        let result = score("python expert", "Looking for a Haskell wizard.");
        assert_eq!(result.match_score, 0.0);
        assert_eq!(result.recommendation, Recommendation::Reject);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_no_overlap_rejects() {
        let result = score("frontend designer", "python, aws, docker");
        assert_eq!(result.match_score, 0.0);
        assert_eq!(result.recommendation, Recommendation::Reject);
        assert_eq!(result.matched_skills.len(), 0);
        assert_eq!(result.missing_skills.len(), 3);
    }

    #[test]
    fn test_matched_and_missing_are_disjoint() {
        let result = score("python and sql", "python, sql, aws, docker, kubernetes");
        for skill in &result.matched_skills {
            assert!(!result.missing_skills.contains(skill));
        }
        assert_eq!(
            result.matched_skills.len() + result.missing_skills.len(),
            5
        );
    }

    #[test]
    fn test_three_of_four_rounds_to_7_5_and_shortlists() {
        // 3/4 * 10 = 7.5 exactly, on the shortlist boundary.
        let result = score("python, sql, aws", "python, sql, aws, docker");
        assert_eq!(result.match_score, 7.5);
        assert_eq!(result.recommendation, Recommendation::Shortlist);
    }

    #[test]
    fn test_two_of_three_is_maybe() {
        // 2/3 * 10 = 6.666... rounds to 6.7.
        let result = score("python, sql", "python, sql, docker");
        assert_eq!(result.match_score, 6.7);
        assert_eq!(result.recommendation, Recommendation::Maybe);
    }

    #[test]
    fn test_skills_keep_vocabulary_order() {
        let result = score("", "kubernetes then docker then python");
        assert_eq!(
            result.missing_skills,
            vec![
                "Python".to_string(),
                "Docker".to_string(),
                "Kubernetes".to_string()
            ]
        );
    }

    #[test]
    fn test_score_has_one_decimal() {
        let result = score("python", "python, java, sql, docker, kubernetes, aws, mongodb");
        // 1/7 * 10 = 1.428... rounds to 1.4.
        assert_eq!(result.match_score, 1.4);
    }

    #[test]
    fn test_justifications_are_fixed_strings() {
        assert!(score("python, aws", "python, aws")
            .justification
            .starts_with("Strong alignment"));
        assert!(score("python", "python and docker")
            .justification
            .starts_with("Partial match"));
        assert!(score("", "python")
            .justification
            .starts_with("Limited match"));
    }
}

//! Skill vocabularies — fixed, ordered keyword lists shared by extraction and
//! fallback matching.
//!
//! Both lists are lower-case tokens; scan order is significant and becomes the
//! order of skills in extracted profiles and screening results.

/// Skills recognized during profile extraction.
const EXTRACTION_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "node.js",
    "angular",
    "vue",
    "sql",
    "mongodb",
    "postgresql",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "git",
    "ci/cd",
    "machine learning",
    "deep learning",
    "tensorflow",
    "pytorch",
    "rest api",
    "graphql",
    "typescript",
    "go",
    "rust",
    "c++",
    "html",
    "css",
    "tailwind",
    "bootstrap",
    "flask",
    "django",
    "spring boot",
    "express",
    "fastapi",
    "redis",
    "elasticsearch",
];

/// Curated subset used by the deterministic fallback scorer.
///
/// Intentionally smaller than the extraction list and independent of the
/// remote analyzer's free-form skill lists, so fallback results stay
/// reproducible when the analyzer is unavailable.
const MATCHING_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "node.js",
    "angular",
    "sql",
    "mongodb",
    "aws",
    "docker",
    "kubernetes",
];

/// Immutable skill vocabulary, loaded once at startup and injected into the
/// extractor and the screening engine.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    extraction: Vec<String>,
    matching: Vec<String>,
}

impl SkillVocabulary {
    /// The built-in vocabulary. Tokens are already lower-case.
    pub fn builtin() -> Self {
        Self {
            extraction: EXTRACTION_SKILLS.iter().map(|s| s.to_string()).collect(),
            matching: MATCHING_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Ordered tokens scanned during profile extraction.
    pub fn extraction_skills(&self) -> &[String] {
        &self.extraction
    }

    /// Ordered tokens scanned by the fallback scorer.
    pub fn matching_skills(&self) -> &[String] {
        &self.matching
    }
}

/// Canonical display form of a skill token.
///
/// A letter is upper-cased when the previous character is not a letter,
/// lower-cased otherwise: "node.js" → "Node.Js", "aws" → "Aws",
/// "machine learning" → "Machine Learning".
pub fn title_case(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut prev_alpha = false;
    for ch in token.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
        } else {
            out.push(ch);
        }
        prev_alpha = ch.is_alphabetic();
    }
    out
}

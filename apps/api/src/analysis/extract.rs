//! Feature extraction: pulls contact fields and keyword hits out of raw resume text.
//!
//! Every extractor is total: absence is `None` or an empty list, never an error.
//!
//! The phone and location patterns are loose heuristics. The phone pattern
//! accepts any `NNN-NNN-NNNN`-shaped run of digits, and the location pattern
//! only fires after a small set of lead-in phrases ("based in", "at", ...).
//! Both are kept as-is; tightening them changes scores for existing resumes.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::vocabulary::Vocabulary;

/// Maximum number of skills / missing keywords reported.
pub const KEYWORD_LIMIT: usize = 10;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap()
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").unwrap()
});

static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:based in|located in|from|at|city|state)\s+([A-Za-z\s,]+?)(?:\.|,|$)")
        .unwrap()
});

static METRICS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{2,}%|\$[\d,]+").unwrap());

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().trim().to_string())
}

/// First line that looks like a person's name: 3–59 chars, no `@` or `http`,
/// at most four whitespace-separated tokens.
pub fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find(|line| {
            let len = line.chars().count();
            len > 2
                && len < 60
                && !line.contains('@')
                && !line.contains("http")
                && line.split_whitespace().count() <= 4
        })
        .map(str::to_string)
}

pub fn extract_location(text: &str) -> Option<String> {
    LOCATION_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Technical vocabulary terms present in `text`, in vocabulary order, capped at 10.
pub fn extract_skills(text: &str, vocabulary: &Vocabulary) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut seen = HashSet::new();
    vocabulary
        .technical
        .iter()
        .filter(|term| contains_term(&lower, term))
        .filter(|term| seen.insert(term.to_lowercase()))
        .take(KEYWORD_LIMIT)
        .cloned()
        .collect()
}

/// Terms from all three vocabularies that do not occur in `text`, shuffled,
/// capped at 10. Repeated calls on the same text may return different terms.
#[allow(dead_code)]
pub fn extract_missing_keywords(text: &str, vocabulary: &Vocabulary) -> Vec<String> {
    extract_missing_keywords_with(text, vocabulary, &mut fastrand::Rng::new())
}

pub fn extract_missing_keywords_with(
    text: &str,
    vocabulary: &Vocabulary,
    rng: &mut fastrand::Rng,
) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut missing: Vec<String> = vocabulary
        .all_terms()
        .filter(|term| !contains_term(&lower, term))
        .map(str::to_string)
        .collect();
    rng.shuffle(&mut missing);
    missing.truncate(KEYWORD_LIMIT);
    missing
}

/// Number of distinct action verbs that appear anywhere in `text`.
pub fn count_action_verbs(text: &str, vocabulary: &Vocabulary) -> usize {
    let lower = text.to_lowercase();
    vocabulary
        .action_verbs
        .iter()
        .filter(|verb| contains_term(&lower, verb))
        .count()
}

/// A percentage with at least two digits, or a dollar amount.
pub fn has_quantified_metrics(text: &str) -> bool {
    METRICS_RE.is_match(text)
}

/// Case-insensitive marker check; `lower` must already be lowercased.
pub fn contains_any(lower: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| lower.contains(m))
}

fn contains_term(lower: &str, term: &str) -> bool {
    lower.contains(&term.to_lowercase())
}

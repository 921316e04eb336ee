use crate::analysis::extract::{
    contains_any, count_action_verbs, extract_email, extract_location, extract_name,
    extract_phone, extract_skills, has_quantified_metrics,
};
use crate::analysis::vocabulary::Vocabulary;

const SUMMARY_MARKERS: &[&str] = &["summary", "objective", "profile"];
const SUMMARY_STATEMENT_MARKERS: &[&str] = &["summary", "objective"];
const EXPERIENCE_MARKERS: &[&str] = &["experience", "work history", "employment"];
const WORK_MENTION_MARKERS: &[&str] = &["experience", "work", "employment"];
const SKILLS_MARKERS: &[&str] = &["skills", "technical"];
const EDUCATION_MARKERS: &[&str] = &["education", "degree", "university", "bachelor", "master"];
const EDUCATION_MENTION_MARKERS: &[&str] = &["education", "degree", "university"];
const CERTIFICATION_MARKERS: &[&str] = &["certif", "license"];
const PORTFOLIO_MARKERS: &[&str] = &["project", "portfolio"];

/// Every feature the scorer and aggregator look at, computed once per resume.
#[derive(Debug, Clone, Default)]
pub struct Signals {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub action_verb_count: usize,
    pub has_metrics: bool,
    /// "summary", "objective" or "profile" anywhere in the text.
    pub has_summary_marker: bool,
    /// "summary" or "objective"; "profile" alone does not count as a statement.
    pub has_summary_statement: bool,
    pub has_experience_marker: bool,
    pub mentions_work: bool,
    pub has_skills_marker: bool,
    pub has_education_marker: bool,
    pub mentions_education: bool,
    pub has_certifications: bool,
    pub has_portfolio: bool,
    pub title: &'static str,
}

impl Signals {
    pub fn collect(text: &str, vocabulary: &Vocabulary) -> Self {
        let lower = text.to_lowercase();
        Self {
            email: extract_email(text),
            phone: extract_phone(text),
            name: extract_name(text),
            location: extract_location(text),
            skills: extract_skills(text, vocabulary),
            action_verb_count: count_action_verbs(text, vocabulary),
            has_metrics: has_quantified_metrics(text),
            has_summary_marker: contains_any(&lower, SUMMARY_MARKERS),
            has_summary_statement: contains_any(&lower, SUMMARY_STATEMENT_MARKERS),
            has_experience_marker: contains_any(&lower, EXPERIENCE_MARKERS),
            mentions_work: contains_any(&lower, WORK_MENTION_MARKERS),
            has_skills_marker: contains_any(&lower, SKILLS_MARKERS),
            has_education_marker: contains_any(&lower, EDUCATION_MARKERS),
            mentions_education: contains_any(&lower, EDUCATION_MENTION_MARKERS),
            has_certifications: contains_any(&lower, CERTIFICATION_MARKERS),
            has_portfolio: contains_any(&lower, PORTFOLIO_MARKERS),
            title: infer_title(&lower),
        }
    }

    pub fn has_complete_contact(&self) -> bool {
        self.email.is_some() && self.phone.is_some()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}

fn infer_title(lower: &str) -> &'static str {
    if lower.contains("senior") {
        "Senior Professional"
    } else if lower.contains("manager") {
        "Manager"
    } else if lower.contains("director") {
        "Director"
    } else {
        "Professional"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_markers() {
        let v = Vocabulary::default();
        let s = Signals::collect("PROFILE\nWork History\nMaster of Science\nAWS Certified", &v);
        assert!(s.has_summary_marker);
        assert!(!s.has_summary_statement);
        assert!(s.has_experience_marker);
        assert!(s.mentions_work);
        assert!(s.has_education_marker);
        assert!(!s.mentions_education);
        assert!(s.has_certifications);
        assert!(!s.has_portfolio);
        assert!(!s.has_skills_marker);
    }

    #[test]
    fn test_title_precedence() {
        assert_eq!(infer_title("senior manager"), "Senior Professional");
        assert_eq!(infer_title("engineering manager"), "Manager");
        assert_eq!(infer_title("director of ops"), "Director");
        assert_eq!(infer_title("engineer"), "Professional");
    }

    #[test]
    fn test_complete_contact() {
        let v = Vocabulary::default();
        let s = Signals::collect("a@b.io 555-123-4567", &v);
        assert!(s.has_complete_contact());
        let s = Signals::collect("a@b.io", &v);
        assert!(!s.has_complete_contact());
    }
}

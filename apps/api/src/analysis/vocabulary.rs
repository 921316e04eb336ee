//! Keyword vocabularies used for substring matching.
//!
//! The built-in tables live here as data; scoring code only ever reads them
//! through `Vocabulary`. An operator can replace them at startup with a TOML
//! file (see `ATS_VOCABULARY_PATH`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisError;

const TECHNICAL: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "C++",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "Git",
    "CI/CD",
    "REST API",
    "GraphQL",
    "HTML",
    "CSS",
    "Vue",
    "Angular",
    "Express",
    "Django",
    "Flask",
    "Spring Boot",
    "Microservices",
    "API",
    "Database",
    "Cloud",
    "Linux",
    "Windows",
    "MacOS",
    "PHP",
    "Ruby",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "collaboration",
    "problem solving",
    "critical thinking",
    "project management",
    "agile",
    "scrum",
    "organization",
    "time management",
    "adaptability",
    "creativity",
    "analytical",
];

const ACTION_VERBS: &[&str] = &[
    "developed",
    "designed",
    "implemented",
    "managed",
    "led",
    "created",
    "built",
    "engineered",
    "architected",
    "optimized",
    "improved",
    "increased",
    "reduced",
    "achieved",
    "delivered",
    "deployed",
    "launched",
    "established",
    "coordinated",
    "collaborated",
];

/// The three read-only keyword tables the analyzer matches against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub technical: Vec<String>,
    pub soft_skills: Vec<String>,
    pub action_verbs: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            technical: to_owned(TECHNICAL),
            soft_skills: to_owned(SOFT_SKILLS),
            action_verbs: to_owned(ACTION_VERBS),
        }
    }
}

impl Vocabulary {
    /// Loads a vocabulary override from a TOML file with `technical`,
    /// `soft_skills` and `action_verbs` arrays.
    pub fn from_toml_file(path: &Path) -> Result<Self, AnalysisError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::Vocabulary(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, AnalysisError> {
        let vocabulary: Vocabulary =
            toml::from_str(raw).map_err(|e| AnalysisError::Vocabulary(e.to_string()))?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        for (name, terms) in [
            ("technical", &self.technical),
            ("soft_skills", &self.soft_skills),
            ("action_verbs", &self.action_verbs),
        ] {
            if terms.is_empty() {
                return Err(AnalysisError::Vocabulary(format!("`{name}` must not be empty")));
            }
            if terms.iter().any(|t| t.trim().is_empty()) {
                return Err(AnalysisError::Vocabulary(format!(
                    "`{name}` contains a blank term"
                )));
            }
        }
        Ok(())
    }

    /// Technical, then soft skills, then action verbs, each in table order.
    pub fn all_terms(&self) -> impl Iterator<Item = &str> {
        self.technical
            .iter()
            .chain(&self.soft_skills)
            .chain(&self.action_verbs)
            .map(String::as_str)
    }
}

fn to_owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_table_sizes() {
        let v = Vocabulary::default();
        assert_eq!(v.technical.len(), 39);
        assert_eq!(v.soft_skills.len(), 14);
        assert_eq!(v.action_verbs.len(), 20);
        assert_eq!(v.all_terms().count(), 73);
    }

    #[test]
    fn test_all_terms_order_starts_with_technical_ends_with_verbs() {
        let v = Vocabulary::default();
        let terms: Vec<&str> = v.all_terms().collect();
        assert_eq!(terms.first(), Some(&"JavaScript"));
        assert_eq!(terms[39], "leadership");
        assert_eq!(terms.last(), Some(&"collaborated"));
    }

    #[test]
    fn test_from_toml_str_loads_override() {
        let raw = r#"
            technical = ["Rust", "Tokio"]
            soft_skills = ["mentoring"]
            action_verbs = ["shipped"]
        "#;
        let v = Vocabulary::from_toml_str(raw).unwrap();
        assert_eq!(v.technical, vec!["Rust", "Tokio"]);
        assert_eq!(v.action_verbs, vec!["shipped"]);
    }

    #[test]
    fn test_shipped_vocabulary_file_matches_builtin() {
        let shipped = include_str!("../../config/vocabulary.toml");
        assert_eq!(Vocabulary::from_toml_str(shipped).unwrap(), Vocabulary::default());
    }

    #[test]
    fn test_from_toml_str_rejects_empty_list() {
        let raw = r#"
            technical = []
            soft_skills = ["mentoring"]
            action_verbs = ["shipped"]
        "#;
        let err = Vocabulary::from_toml_str(raw).unwrap_err();
        assert!(err.to_string().contains("technical"));
    }

    #[test]
    fn test_from_toml_str_rejects_missing_table() {
        let raw = r#"technical = ["Rust"]"#;
        assert!(Vocabulary::from_toml_str(raw).is_err());
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "technical = [\"Elixir\"]\nsoft_skills = [\"empathy\"]\naction_verbs = [\"scaled\"]"
        )
        .unwrap();
        let v = Vocabulary::from_toml_file(file.path()).unwrap();
        assert_eq!(v.technical, vec!["Elixir"]);
    }

    #[test]
    fn test_from_toml_file_missing_path() {
        let err = Vocabulary::from_toml_file(Path::new("/nonexistent/vocab.toml")).unwrap_err();
        assert!(matches!(err, AnalysisError::Vocabulary(_)));
    }
}

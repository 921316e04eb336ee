//! Resume analyzer: the entry point that runs extraction, section scoring and
//! aggregation in one synchronous pass.
//!
//! Everything except `keywords.missing` is a pure function of the text. The
//! missing-keyword sample is shuffled on every call, so two analyses of the
//! same resume can report different missing terms.

use std::sync::LazyLock;

use tracing::debug;

use crate::analysis::aggregate::{improvements, overall_score, strengths, summarize};
use crate::analysis::extract::extract_missing_keywords_with;
use crate::analysis::models::{AnalysisResult, ContactDetails, KeywordReport, ResumeSummary};
use crate::analysis::sections::score_sections;
use crate::analysis::signals::Signals;
use crate::analysis::vocabulary::Vocabulary;
use crate::analysis::AnalysisError;

#[allow(dead_code)]
static DEFAULT_ANALYZER: LazyLock<ResumeAnalyzer> = LazyLock::new(ResumeAnalyzer::default);

/// Analyzes `text` with the built-in vocabulary. The server goes through the
/// shared `ResumeAnalyzer` in `AppState` instead.
#[allow(dead_code)]
pub fn analyze_resume(text: &str, file_name: &str) -> Result<AnalysisResult, AnalysisError> {
    DEFAULT_ANALYZER.analyze(text, file_name)
}

/// Holds the read-only vocabulary. Cheap to share behind an `Arc`; `analyze`
/// takes `&self` and touches no other state.
#[derive(Debug, Clone, Default)]
pub struct ResumeAnalyzer {
    vocabulary: Vocabulary,
}

impl ResumeAnalyzer {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn analyze(&self, text: &str, file_name: &str) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_with_rng(text, file_name, &mut fastrand::Rng::new())
    }

    /// Same as `analyze`, drawing the missing-keyword sample from `rng`.
    pub fn analyze_with_rng(
        &self,
        text: &str,
        file_name: &str,
        rng: &mut fastrand::Rng,
    ) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyText {
                file_name: file_name.to_string(),
            });
        }

        let signals = Signals::collect(text, &self.vocabulary);
        let sections = score_sections(&signals);
        let score = overall_score(&sections);
        let missing = extract_missing_keywords_with(text, &self.vocabulary, rng);

        debug!(
            "Analyzed {file_name}: score={score}, skills={}, action_verbs={}",
            signals.skill_count(),
            signals.action_verb_count
        );

        let resume_summary = build_resume_summary(&signals);
        Ok(AnalysisResult {
            score,
            summary: summarize(score),
            resume_summary,
            strengths: strengths(&signals),
            improvements: improvements(&signals),
            keywords: KeywordReport {
                found: signals.skills,
                missing,
            },
            sections,
        })
    }
}

fn build_resume_summary(signals: &Signals) -> ResumeSummary {
    let skills = if signals.skills.is_empty() {
        vec!["Add technical skills".to_string()]
    } else {
        signals.skills.clone()
    };

    ResumeSummary {
        name: signals
            .name
            .clone()
            .unwrap_or_else(|| "Professional".to_string()),
        title: signals.title.to_string(),
        experience: if signals.mentions_work {
            "Experience details found"
        } else {
            "No experience section detected"
        }
        .to_string(),
        education: if signals.mentions_education {
            "Education details found"
        } else {
            "No education section detected"
        }
        .to_string(),
        skills,
        contact: ContactDetails {
            email: signals.email.clone(),
            phone: signals.phone.clone(),
            location: signals.location.clone(),
        },
    }
}

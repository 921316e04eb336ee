//! Section scorer: maps detected features to a 0–100 score per resume section.
//!
//! Each section is an ordered rule table; the first rule whose predicate holds
//! sets the score and feedback. Scores only reflect substring and count checks,
//! not the quality of the section's content: the word "experience" anywhere in
//! the text earns the full experience score.

use serde::{Deserialize, Serialize};

use crate::analysis::signals::Signals;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Contact,
    Summary,
    Experience,
    Skills,
    Education,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Contact,
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Skills,
        SectionKind::Education,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            SectionKind::Contact => "Contact Information",
            SectionKind::Summary => "Professional Summary",
            SectionKind::Experience => "Work Experience",
            SectionKind::Skills => "Skills",
            SectionKind::Education => "Education",
        }
    }

    fn rules(self) -> &'static SectionRules {
        match self {
            SectionKind::Contact => &CONTACT,
            SectionKind::Summary => &SUMMARY,
            SectionKind::Experience => &EXPERIENCE,
            SectionKind::Skills => &SKILLS,
            SectionKind::Education => &EDUCATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub name: String,
    pub score: u8,
    pub feedback: String,
}

struct SectionRule {
    when: fn(&Signals) -> bool,
    score: u8,
    feedback: fn(&Signals) -> String,
}

struct SectionRules {
    rules: &'static [SectionRule],
    otherwise: SectionRule,
}

impl SectionRules {
    fn evaluate(&self, signals: &Signals) -> (u8, String) {
        let rule = self
            .rules
            .iter()
            .find(|r| (r.when)(signals))
            .unwrap_or(&self.otherwise);
        (rule.score, (rule.feedback)(signals))
    }
}

fn always(_: &Signals) -> bool {
    true
}

fn missing_contact(_: &Signals) -> String {
    "Missing email or phone".to_string()
}

fn skills_feedback(s: &Signals) -> String {
    let n = s.skill_count();
    if n >= 6 {
        format!("Excellent skills coverage ({n} found)")
    } else {
        format!("Add more skills (found: {n})")
    }
}

static CONTACT: SectionRules = SectionRules {
    rules: &[
        SectionRule {
            when: |s| s.has_complete_contact(),
            score: 100,
            feedback: |_| "Complete contact information".to_string(),
        },
        SectionRule {
            when: |s| s.email.is_some() || s.phone.is_some(),
            score: 50,
            feedback: missing_contact,
        },
    ],
    otherwise: SectionRule {
        when: always,
        score: 0,
        feedback: missing_contact,
    },
};

static SUMMARY: SectionRules = SectionRules {
    rules: &[SectionRule {
        when: |s| s.has_summary_marker,
        score: 75,
        feedback: |_| "Good professional summary".to_string(),
    }],
    otherwise: SectionRule {
        when: always,
        score: 40,
        feedback: |_| "Add a professional summary".to_string(),
    },
};

static EXPERIENCE: SectionRules = SectionRules {
    rules: &[SectionRule {
        when: |s| s.has_experience_marker,
        score: 85,
        feedback: |_| "Strong experience section".to_string(),
    }],
    otherwise: SectionRule {
        when: always,
        score: 30,
        feedback: |_| "Add work experience details".to_string(),
    },
};

static SKILLS: SectionRules = SectionRules {
    rules: &[
        SectionRule {
            when: |s| s.has_skills_marker && s.skill_count() >= 6,
            score: 90,
            feedback: skills_feedback,
        },
        SectionRule {
            when: |s| s.has_skills_marker,
            score: 70,
            feedback: skills_feedback,
        },
        SectionRule {
            when: |s| s.skill_count() > 3,
            score: 60,
            feedback: skills_feedback,
        },
    ],
    otherwise: SectionRule {
        when: always,
        score: 35,
        feedback: skills_feedback,
    },
};

static EDUCATION: SectionRules = SectionRules {
    rules: &[SectionRule {
        when: |s| s.has_education_marker,
        score: 85,
        feedback: |_| "Well-structured education".to_string(),
    }],
    otherwise: SectionRule {
        when: always,
        score: 50,
        feedback: |_| "Include education details".to_string(),
    },
};

pub fn score_section(kind: SectionKind, signals: &Signals) -> SectionScore {
    let (score, feedback) = kind.rules().evaluate(signals);
    SectionScore {
        name: kind.display_name().to_string(),
        score,
        feedback,
    }
}

/// Scores all five sections in their fixed order.
pub fn score_sections(signals: &Signals) -> Vec<SectionScore> {
    SectionKind::ALL
        .iter()
        .map(|kind| score_section(*kind, signals))
        .collect()
}

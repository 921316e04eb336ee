//! Aggregation: overall score, summary band, strengths and improvements.

use crate::analysis::sections::SectionScore;
use crate::analysis::signals::Signals;

/// Improvements beyond this many are dropped, keeping check order.
pub const MAX_IMPROVEMENTS: usize = 5;

const DEFAULT_STRENGTHS: &[&str] = &[
    "Resume has clear structure",
    "Contains contact information",
    "Documents work history",
];

/// Checks run in this order; the first five that fire are reported.
const IMPROVEMENT_CHECKS: &[(fn(&Signals) -> bool, &str)] = &[
    (
        |s| s.email.is_none(),
        "Add a clear email address to contact section",
    ),
    (
        |s| s.phone.is_none(),
        "Include a phone number in contact information",
    ),
    (
        |s| s.skill_count() < 6,
        "Expand technical skills section with more relevant keywords",
    ),
    (
        |s| s.action_verb_count < 5,
        "Use more action verbs to describe accomplishments and impact",
    ),
    (
        |s| !s.has_metrics,
        "Add quantifiable results (e.g., 'Increased sales by 30%')",
    ),
    (
        |s| !s.has_summary_statement,
        "Add a professional summary or objective statement",
    ),
];

/// Rounded mean of the section scores.
pub fn overall_score(sections: &[SectionScore]) -> u8 {
    if sections.is_empty() {
        return 0;
    }
    let total: u32 = sections.iter().map(|s| u32::from(s.score)).sum();
    (f64::from(total) / sections.len() as f64).round() as u8
}

/// One-paragraph verdict for the score band.
pub fn summarize(score: u8) -> String {
    let verdict = if score >= 80 {
        "Excellent! Your resume is well-optimized for ATS systems."
    } else if score >= 65 {
        "Good structure. Consider optimizing keywords and adding quantifiable achievements to improve your score."
    } else if score >= 50 {
        "Your resume needs improvements in formatting and keyword optimization for better ATS compatibility."
    } else {
        "Significant improvements needed. Focus on adding industry keywords, contact info, and organizing sections clearly."
    };
    format!("Your resume scores {score}/100 on ATS compatibility. {verdict}")
}

pub fn strengths(signals: &Signals) -> Vec<String> {
    let mut strengths = Vec::new();

    if signals.has_complete_contact() {
        strengths.push("Complete contact information provided".to_string());
    }

    let skills = signals.skill_count();
    if skills >= 8 {
        strengths.push(format!(
            "Strong technical skills section ({skills} technologies found)"
        ));
    } else if skills > 0 {
        strengths.push(format!(
            "Multiple relevant skills identified ({skills} found)"
        ));
    }

    if signals.action_verb_count > 8 {
        strengths.push("Excellent use of action verbs and strong descriptions".to_string());
    } else if signals.action_verb_count > 4 {
        strengths.push("Good use of action verbs in achievements".to_string());
    }

    if signals.has_metrics {
        strengths.push("Includes quantifiable metrics and achievements".to_string());
    }
    if signals.has_certifications {
        strengths.push("Includes relevant certifications and credentials".to_string());
    }
    if signals.has_portfolio {
        strengths.push("Showcases project experience and portfolio".to_string());
    }

    if strengths.is_empty() {
        return DEFAULT_STRENGTHS.iter().map(|s| s.to_string()).collect();
    }
    strengths
}

pub fn improvements(signals: &Signals) -> Vec<String> {
    IMPROVEMENT_CHECKS
        .iter()
        .filter(|(fires, _)| fires(signals))
        .take(MAX_IMPROVEMENTS)
        .map(|(_, message)| message.to_string())
        .collect()
}

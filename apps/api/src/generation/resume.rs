//! Tailored resume generation: the LLM writes a JSON resume for a job
//! description, then a keyword-overlap score estimates how well it matches.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::build_generate_prompt;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;

/// The keyword score never claims a perfect match.
const MAX_KEYWORD_SCORE: u8 = 95;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedResume {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub experiences: Vec<GeneratedExperience>,
    pub education: Vec<GeneratedEducation>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedEducation {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResumeRequest {
    pub job_description: String,
    #[serde(default)]
    pub background: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResumeResponse {
    pub resume: GeneratedResume,
    pub ats_score: u8,
}

pub async fn generate_resume(
    llm: &LlmClient,
    request: &GenerateResumeRequest,
) -> Result<GenerateResumeResponse, AppError> {
    let prompt = build_generate_prompt(&request.job_description, &request.background);
    let resume: GeneratedResume = llm
        .call_json(&prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume generation failed: {e}")))?;

    let resume_text = serde_json::to_string(&resume).map_err(|e| AppError::Internal(e.into()))?;
    let ats_score = keyword_match_score(&request.job_description, &resume_text);
    info!(
        "Generated resume with {} experiences, keyword score {ats_score}",
        resume.experiences.len()
    );

    Ok(GenerateResumeResponse { resume, ats_score })
}

/// Share of job-description words (repeats included) that appear anywhere in
/// `resume_text`, as a 0–95 percentage. Matching is case-insensitive substring.
pub fn keyword_match_score(job_description: &str, resume_text: &str) -> u8 {
    let jd = job_description.to_lowercase();
    let resume = resume_text.to_lowercase();

    let words: Vec<&str> = WORD_RE.find_iter(&jd).map(|m| m.as_str()).collect();
    if words.is_empty() {
        return 0;
    }
    let matched = words.iter().filter(|w| resume.contains(*w)).count();
    let percent = matched * 100 / words.len();
    percent.min(usize::from(MAX_KEYWORD_SCORE)) as u8
}

//! Axum route handlers for the LLM-backed coaching and generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::errors::AppError;
use crate::generation::chat::{coach_reply, ChatRequest, ChatResponse};
use crate::generation::resume::{generate_resume, GenerateResumeRequest, GenerateResumeResponse};
use crate::state::AppState;

/// POST /api/v1/chat
///
/// Career-coach reply to the conversation so far.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    let llm = state.llm()?;
    let response = coach_reply(llm, &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/generate-resume
///
/// Generates a tailored JSON resume for a job description and scores its keyword overlap.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    payload: Result<Json<GenerateResumeRequest>, JsonRejection>,
) -> Result<Json<GenerateResumeResponse>, AppError> {
    let Json(request) = payload?;
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    let llm = state.llm()?;
    let response = generate_resume(llm, &request).await?;
    Ok(Json(response))
}

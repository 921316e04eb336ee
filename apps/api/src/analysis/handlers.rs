//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::analysis::AnalysisResult;
use crate::errors::AppError;
use crate::extraction::{normalize_text, Document};
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    "resume.txt".to_string()
}

/// POST /api/v1/analyze
///
/// Scores already-extracted resume text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = payload?;
    let text = normalize_text(&request.text);
    analyze_text(&state, &text, &request.file_name).map(Json)
}

/// POST /api/v1/analyze/upload
///
/// Accepts a multipart PDF/DOCX/text upload in the `file` field,
/// extracts its text and scores it.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut document = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(String::from);
        let bytes = field.bytes().await.map_err(multipart_error)?;
        document = Some(Document {
            file_name,
            content_type,
            bytes,
        });
        break;
    }

    let document = document.ok_or_else(|| {
        AppError::Validation(format!("multipart field '{UPLOAD_FIELD}' is required"))
    })?;
    if document.bytes.is_empty() {
        return Err(AppError::Validation(format!(
            "{} is an empty file",
            document.file_name
        )));
    }

    let file_name = document.file_name.clone();
    let text = state.extractor.extract(document).await?;
    analyze_text(&state, &text, &file_name).map(Json)
}

fn analyze_text(state: &AppState, text: &str, file_name: &str) -> Result<AnalysisResult, AppError> {
    if text.len() > state.config.max_text_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "resume text is {} bytes; the limit is {}",
            text.len(),
            state.config.max_text_bytes
        )));
    }

    let result = state.analyzer.analyze(text, file_name)?;
    info!("Analyzed {file_name}: ATS score {}", result.score);
    Ok(result)
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(e.body_text())
    }
}

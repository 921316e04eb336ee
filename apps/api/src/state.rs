use std::sync::Arc;

use crate::analysis::ResumeAnalyzer;
use crate::config::Config;
use crate::errors::AppError;
use crate::extraction::TextExtractor;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup; analyses share it without locking.
    pub analyzer: Arc<ResumeAnalyzer>,
    /// Pluggable document-to-text backend. Default: DocumentExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// `None` when no API key is configured.
    pub llm: Option<LlmClient>,
}

impl AppState {
    pub fn llm(&self) -> Result<&LlmClient, AppError> {
        self.llm.as_ref().ok_or(AppError::LlmUnavailable)
    }
}

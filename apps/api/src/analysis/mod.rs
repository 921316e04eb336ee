// ATS compatibility analysis: feature extraction -> section scoring -> aggregation.
// Pure, synchronous and free of I/O; handlers call it directly.

pub mod aggregate;
pub mod analyzer;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod sections;
pub mod signals;
pub mod vocabulary;

use thiserror::Error;

pub use analyzer::ResumeAnalyzer;
pub use models::AnalysisResult;
pub use vocabulary::Vocabulary;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No text content found in {file_name}")]
    EmptyText { file_name: String },

    #[error("Invalid vocabulary: {0}")]
    Vocabulary(String),
}

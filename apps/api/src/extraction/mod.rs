//! Document-to-text extraction. The analyzer only ever sees plain text; this
//! module turns uploaded bytes into that text.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>` so the backend can be swapped
//! (e.g. for an external parsing service) without touching the handlers.

mod docx;
mod normalize;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

pub use docx::extract_docx_text;
pub use normalize::normalize_text;

#[cfg(test)]
pub(crate) use docx::tests::build_docx;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported document type: {0}")]
    Unsupported(String),

    #[error("Could not read document: {0}")]
    Corrupted(String),

    #[error("No text content found in {0}")]
    Empty(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Picks a parser from the declared content type, falling back to the
    /// file extension when the type is missing or generic.
    pub fn detect(content_type: Option<&str>, file_name: &str) -> Result<Self, ExtractionError> {
        let mime = content_type
            .map(|c| c.split(';').next().unwrap_or(c).trim().to_ascii_lowercase())
            .unwrap_or_default();

        match mime.as_str() {
            "application/pdf" => return Ok(DocumentKind::Pdf),
            DOCX_MIME => return Ok(DocumentKind::Docx),
            "application/msword" => {
                return Err(ExtractionError::Unsupported(
                    "legacy .doc files; save as .docx or PDF".to_string(),
                ))
            }
            m if m.starts_with("text/") => return Ok(DocumentKind::PlainText),
            _ => {}
        }

        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            "txt" | "md" => Ok(DocumentKind::PlainText),
            "doc" => Err(ExtractionError::Unsupported(
                "legacy .doc files; save as .docx or PDF".to_string(),
            )),
            _ => Err(ExtractionError::Unsupported(if mime.is_empty() {
                file_name.to_string()
            } else {
                mime
            })),
        }
    }
}

/// An uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct Document {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns normalized, non-blank text, or an `ExtractionError`.
    async fn extract(&self, document: Document) -> Result<String, ExtractionError>;
}

/// Default extractor: pdf-extract for PDF, zip + quick-xml for DOCX,
/// lossy UTF-8 for plain text.
pub struct DocumentExtractor;

#[async_trait]
impl TextExtractor for DocumentExtractor {
    async fn extract(&self, document: Document) -> Result<String, ExtractionError> {
        let kind = DocumentKind::detect(document.content_type.as_deref(), &document.file_name)?;
        let bytes = document.bytes;

        // Parsers are CPU-bound and pdf-extract may panic on malformed input;
        // a panic surfaces here as a JoinError.
        let raw = tokio::task::spawn_blocking(move || extract_raw(kind, &bytes))
            .await
            .map_err(|e| ExtractionError::Corrupted(format!("parser aborted: {e}")))??;

        let text = normalize_text(&raw);
        debug!(
            "Extracted {} chars from {} ({kind:?})",
            text.len(),
            document.file_name
        );

        if text.trim().is_empty() {
            return Err(ExtractionError::Empty(document.file_name));
        }
        Ok(text)
    }
}

fn extract_raw(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Corrupted(format!("unreadable PDF: {e}"))),
        DocumentKind::Docx => extract_docx_text(bytes),
        DocumentKind::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

//! Document Extractor — turns an uploaded resume into plain text.
//!
//! The filename suffix decides the format. Decoders never fail outright:
//! a document with no recoverable text comes back as an empty string, and
//! `read_resume` turns that into `ExtractError::Empty` so callers stop
//! before calling the analyzer.

pub mod docx;
pub mod pdf;

use bytes::Bytes;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file format: {filename}")]
    UnsupportedFormat { filename: String },

    #[error("no text could be extracted from the document")]
    Empty,
}

impl ExtractError {
    /// Message shown to the person who uploaded the file.
    pub fn user_message(&self) -> &'static str {
        match self {
            ExtractError::UnsupportedFormat { .. } => {
                "Unsupported file format. Please upload PDF or DOCX."
            }
            ExtractError::Empty => "Unable to extract text from resume.",
        }
    }
}

/// Format tag derived from the upload's filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentFormat {
    /// Literal, case-sensitive suffix match.
    pub fn from_filename(filename: &str) -> Self {
        if filename.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if filename.ends_with(".docx") {
            DocumentFormat::Docx
        } else {
            DocumentFormat::Unsupported
        }
    }
}

/// An uploaded document, consumed once by `read_resume`.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub filename: String,
    pub bytes: Bytes,
}

impl SourceDocument {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    pub fn format(&self) -> DocumentFormat {
        DocumentFormat::from_filename(&self.filename)
    }
}

/// Best-effort text for a document; empty when the format is unsupported or
/// nothing could be recovered.
pub fn extract_text(doc: &SourceDocument) -> String {
    match doc.format() {
        DocumentFormat::Pdf => pdf::extract_pdf_text(&doc.bytes),
        DocumentFormat::Docx => docx::extract_docx_text(&doc.bytes),
        DocumentFormat::Unsupported => String::new(),
    }
}

/// Extracts resume text, consuming the document.
///
/// Returns non-empty, trimmed text or the reason the caller cannot proceed.
pub fn read_resume(doc: SourceDocument) -> Result<String, ExtractError> {
    let format = doc.format();
    if format == DocumentFormat::Unsupported {
        warn!("Rejected upload with unsupported format: {}", doc.filename);
        return Err(ExtractError::UnsupportedFormat {
            filename: doc.filename,
        });
    }

    let text = extract_text(&doc);
    info!(
        "Extracted {} chars from {:?} upload ({} bytes)",
        text.chars().count(),
        format,
        doc.bytes.len()
    );

    if text.is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}

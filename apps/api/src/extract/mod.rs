//! Resume text extraction — one implementation per document format behind a
//! common trait, selected by a format-detection step.
//!
//! Detection goes by file extension first (`.pdf`, `.docx`), then falls back
//! to magic-byte sniffing so a mislabeled upload still extracts instead of
//! silently scoring zero. Formats we cannot handle yield empty text, which
//! the ATS scorer reports as an unreadable resume.

pub mod docx;
pub mod pdf;

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Unknown,
}

/// Resolves the document format from the filename suffix, falling back to
/// content sniffing when the suffix is missing or unrecognized.
pub fn detect_format(path: &Path, bytes: &[u8]) -> DocumentFormat {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => DocumentFormat::Pdf,
        Some("docx") => DocumentFormat::Docx,
        _ => sniff_format(bytes),
    }
}

fn sniff_format(bytes: &[u8]) -> DocumentFormat {
    if bytes.starts_with(b"%PDF-") {
        DocumentFormat::Pdf
    } else if bytes.starts_with(b"PK\x03\x04") {
        // Zip container; DOCX is the only zip-based format we accept.
        DocumentFormat::Docx
    } else {
        DocumentFormat::Unknown
    }
}

/// The resume text extractor trait. Implement this to swap extraction
/// backends without touching the handlers.
///
/// Carried in `AppState` as `Arc<dyn ResumeTextExtractor>`.
#[async_trait]
pub trait ResumeTextExtractor: Send + Sync {
    /// Extracts all readable text from the file at `path`, lowercased and
    /// whitespace-normalized. Unknown formats yield an empty string rather
    /// than an error.
    async fn extract(&self, path: &Path) -> Result<String, ExtractError>;
}

/// Default extractor: dispatches on detected format to the PDF or DOCX
/// backend. Parsing is CPU-bound, so it runs on the blocking pool.
pub struct FormatDispatchExtractor;

#[async_trait]
impl ResumeTextExtractor for FormatDispatchExtractor {
    async fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let path = path.to_owned();
        tokio::task::spawn_blocking(move || extract_sync(&path))
            .await
            .map_err(|e| ExtractError::Task(e.to_string()))?
    }
}

fn extract_sync(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let raw = match detect_format(path, &bytes) {
        DocumentFormat::Pdf => pdf::extract_text(&bytes)?,
        DocumentFormat::Docx => docx::extract_text(&bytes)?,
        DocumentFormat::Unknown => {
            tracing::debug!(
                path = %path.display(),
                "unsupported resume format, returning empty text"
            );
            String::new()
        }
    };

    // Single lowercase string with runs of whitespace collapsed, so multi-word
    // keywords match across line breaks in the source document.
    Ok(normalize(&raw))
}

fn normalize(raw: &str) -> String {
    raw.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(detect_format(Path::new("cv.pdf"), b""), DocumentFormat::Pdf);
        assert_eq!(detect_format(Path::new("cv.docx"), b""), DocumentFormat::Docx);
        assert_eq!(detect_format(Path::new("CV.PDF"), b""), DocumentFormat::Pdf);
    }

    #[test]
    fn test_extension_wins_over_content() {
        assert_eq!(
            detect_format(Path::new("cv.pdf"), b"PK\x03\x04rest"),
            DocumentFormat::Pdf
        );
    }

    #[test]
    fn test_sniffing_covers_mislabeled_uploads() {
        assert_eq!(
            detect_format(Path::new("resume.bin"), b"%PDF-1.7 rest"),
            DocumentFormat::Pdf
        );
        assert_eq!(
            detect_format(Path::new("resume"), b"PK\x03\x04rest"),
            DocumentFormat::Docx
        );
        assert_eq!(
            detect_format(Path::new("resume.txt"), b"plain text"),
            DocumentFormat::Unknown
        );
    }

    #[test]
    fn test_unknown_format_yields_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "python sql statistics").unwrap();
        assert_eq!(extract_sync(&path).unwrap(), "");
    }

    #[test]
    fn test_corrupt_pdf_is_an_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.7 definitely not a real pdf").unwrap();
        assert!(matches!(extract_sync(&path), Err(ExtractError::Pdf(_))));
    }

    #[test]
    fn test_corrupt_docx_is_an_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, b"PK\x03\x04 not a real zip").unwrap();
        assert!(matches!(extract_sync(&path), Err(ExtractError::Docx(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = extract_sync(Path::new("/nonexistent/resume.pdf"));
        assert!(matches!(result, Err(ExtractError::Io { .. })));
    }

    #[test]
    fn test_normalize_lowercases_and_collapses_whitespace() {
        assert_eq!(
            normalize("Machine\nLearning  with   PyTorch\t"),
            "machine learning with pytorch"
        );
    }
}

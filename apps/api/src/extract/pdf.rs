//! PDF text extraction backed by `pdf-extract`.
//!
//! The library walks pages in order and concatenates their text; pages with
//! no extractable text (scanned images) contribute nothing, which the caller
//! treats as an unreadable resume.

use super::ExtractError;

pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

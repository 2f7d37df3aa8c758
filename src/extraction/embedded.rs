//! In-process extraction with the `pdf-extract` crate.

use super::TextExtractor;
use crate::error::{RedactorError, RedactorResult};
use std::path::Path;

/// Extracts text without any external tool.
///
/// Output differs from `pdftotext -layout`: columns are not aligned and
/// table cells may land on separate lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedExtractor;

impl EmbeddedExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for EmbeddedExtractor {
    fn extract_text(&self, input: &Path) -> RedactorResult<String> {
        let bytes = std::fs::read(input).map_err(|e| RedactorError::TextExtraction {
            path: input.to_path_buf(),
            reason: e.to_string(),
        })?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| RedactorError::TextExtraction {
            path: input.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn name(&self) -> &str {
        "embedded"
    }
}

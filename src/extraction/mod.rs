//! Text extraction from PDF documents.
//!
//! The redaction engine works on plain text. Extractors turn a document
//! path into that text; they are the only place the crate talks to PDF
//! tooling.

pub mod embedded;
pub mod pdftotext;

pub use embedded::EmbeddedExtractor;
pub use pdftotext::PdftotextExtractor;

use crate::error::RedactorResult;
use std::path::Path;

/// Strategy for obtaining the text content of a document.
///
/// Implementations must not treat an empty document as an error; deciding
/// what to do with blank text is up to the caller.
pub trait TextExtractor: Send + Sync {
    /// Extracts the full text of `input` as a single string.
    fn extract_text(&self, input: &Path) -> RedactorResult<String>;

    /// Returns a human-readable name for this extractor.
    fn name(&self) -> &str;
}

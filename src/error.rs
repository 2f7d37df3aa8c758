//! Error types for the Form-16 redactor.
//!
//! The redaction engine itself cannot fail: its patterns are fixed literals
//! and matching arbitrary text never errors. Every variant here comes from
//! one of the I/O collaborators around the engine (extraction, dictionary
//! loading, report writing).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for redactor operations.
pub type RedactorResult<T> = Result<T, RedactorError>;

/// Error type for all collaborator failures.
///
/// Any of these aborts the run. An empty extraction is not an error; see
/// [`RunOutcome::NothingToProcess`](crate::redaction::RunOutcome).
#[derive(Debug, Error)]
pub enum RedactorError {
    /// The input document does not exist
    #[error("Input document does not exist: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The external extraction program could not be started
    #[error("Text extraction tool '{tool}' is unavailable: {source}")]
    ToolUnavailable {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The extractor ran but produced no usable text
    #[error("Text extraction failed for '{}': {reason}", path.display())]
    TextExtraction { path: PathBuf, reason: String },

    /// The dictionary file is missing or unreadable
    #[error("Failed to load dictionary '{}': {source}", path.display())]
    DictionaryLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output file could not be created or written
    #[error("Failed to write output '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RedactorError {
    /// Returns true if the failure happened while obtaining the document text.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            Self::ToolUnavailable { .. } | Self::TextExtraction { .. }
        )
    }
}

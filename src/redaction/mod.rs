//! The redaction engine and the service that drives it.
//!
//! The engine is split into three stages, each a pure function of its input
//! text and the injected [`PatternSet`]:
//!
//! 1. [`scrubber`]: token-level substitution (phone, email, Aadhaar, PAN, GST, TAN)
//! 2. [`classifier`]: whole-line organization and address redaction
//! 3. [`lexical`]: dictionary-based redaction of unknown words
//!
//! [`RedactionService`] wraps the engine with the I/O around one document:
//! extraction, dictionary loading and report writing.

pub mod classifier;
pub mod lexical;
pub mod pipeline;
pub mod result;
pub mod scrubber;

pub use classifier::LineClassifier;
pub use lexical::LexicalFilter;
pub use pipeline::Redactor;
pub use result::FilterResult;
pub use scrubber::TokenScrubber;

use crate::domain::{Dictionary, PatternSet};
use crate::error::{RedactorError, RedactorResult};
use crate::extraction::{PdftotextExtractor, TextExtractor};
use crate::report;
use std::path::PathBuf;

/// Paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub dictionary: PathBuf,
    pub filtered_output: PathBuf,
    pub raw_output: PathBuf,
}

impl RunConfig {
    pub const DEFAULT_INPUT: &'static str = "Form16_AKJPC0334Q_2025-26.pdf";
    pub const DEFAULT_DICTIONARY: &'static str = "english_words.txt";
    pub const DEFAULT_FILTERED_OUTPUT: &'static str = "filtered_output.txt";
    pub const DEFAULT_RAW_OUTPUT: &'static str = "extracted_text.txt";
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(Self::DEFAULT_INPUT),
            dictionary: PathBuf::from(Self::DEFAULT_DICTIONARY),
            filtered_output: PathBuf::from(Self::DEFAULT_FILTERED_OUTPUT),
            raw_output: PathBuf::from(Self::DEFAULT_RAW_OUTPUT),
        }
    }
}

/// How a run ended when no collaborator failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Extraction produced only whitespace; nothing was written
    NothingToProcess,

    /// Both output files were written
    Completed(RunReport),
}

/// Statistics about a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Length of the extracted text, in characters
    pub original_chars: usize,

    pub result: FilterResult,
}

impl RunReport {
    pub fn filtered_chars(&self) -> usize {
        self.result.cleaned_text.chars().count()
    }
}

/// Redaction service coordinating extraction, filtering and output.
pub struct RedactionService {
    extractor: Box<dyn TextExtractor>,
    patterns: PatternSet,
}

impl RedactionService {
    /// Creates a service with the given extractor and rule set.
    pub fn new(extractor: Box<dyn TextExtractor>, patterns: PatternSet) -> Self {
        Self {
            extractor,
            patterns,
        }
    }

    /// Creates a service using `pdftotext` and the standard rules.
    pub fn with_pdftotext() -> Self {
        Self::new(Box::new(PdftotextExtractor::new()), PatternSet::new())
    }

    pub fn extractor_name(&self) -> &str {
        self.extractor.name()
    }

    /// Processes one document end to end.
    ///
    /// The dictionary is loaded before any file is written, and a failed
    /// report write removes the raw file again, so a failed run leaves no
    /// partial output behind.
    pub fn run(&self, config: &RunConfig) -> RedactorResult<RunOutcome> {
        if !config.input.exists() {
            return Err(RedactorError::InputNotFound {
                path: config.input.clone(),
            });
        }

        tracing::info!(
            input = %config.input.display(),
            extractor = self.extractor.name(),
            "Reading document"
        );
        let text = self.extractor.extract_text(&config.input)?;

        if text.trim().is_empty() {
            tracing::warn!(input = %config.input.display(), "No text could be extracted");
            return Ok(RunOutcome::NothingToProcess);
        }
        let original_chars = text.chars().count();
        tracing::info!(chars = original_chars, "Extracted text");

        let dictionary = Dictionary::load(&config.dictionary)?;

        tracing::info!("Filtering PII data");
        let redactor = Redactor::new(&self.patterns);
        let mut result = redactor.filter_pii(&text);

        tracing::info!(words = dictionary.len(), "Redacting non-dictionary words");
        redactor.redact_unknown_words(&mut result, &dictionary);

        report::write_outputs(&text, &result, &config.raw_output, &config.filtered_output)?;
        tracing::info!(
            filtered = %config.filtered_output.display(),
            raw = %config.raw_output.display(),
            "Wrote outputs"
        );

        Ok(RunOutcome::Completed(RunReport {
            original_chars,
            result,
        }))
    }
}

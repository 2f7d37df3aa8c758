//! PII redaction for text extracted from Indian Form-16 tax documents.
//!
//! The crate turns a Form-16 PDF into a text artifact that is safe to share:
//! government identifiers, contact details, addresses, employer names and
//! any word not found in an English dictionary are replaced by bracketed
//! placeholders such as `[PAN_REDACTED]`.
//!
//! # Features
//!
//! - **Token scrubbing**: phone, email, Aadhaar, PAN, GSTIN and TAN values
//! - **Line classification**: whole-line redaction of organizations and addresses
//! - **Lexical filtering**: unknown words become `[WORD_REDACTED]`
//! - **Retention policy**: selected identifiers (e.g. GSTIN) can be kept and reported
//!
//! # Architecture
//!
//! - [`domain`]: rule tables, categories and the dictionary
//! - [`redaction`]: the engine stages and the run orchestration service
//! - [`extraction`]: PDF text extractors
//! - [`report`]: output file formats
//! - [`error`]: error handling
//!
//! # Quick Start
//!
//! ```no_run
//! use form16_redactor::{RedactionService, RunConfig, RunOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RedactionService::with_pdftotext();
//!
//! match service.run(&RunConfig::default())? {
//!     RunOutcome::Completed(report) => println!("{:?}", report.result.removed_labels()),
//!     RunOutcome::NothingToProcess => println!("empty document"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Redacting Text Directly
//!
//! ```
//! use form16_redactor::{Dictionary, PatternSet, Redactor};
//!
//! let patterns = PatternSet::new();
//! let dictionary: Dictionary = ["the", "cat", "sat"].into_iter().collect();
//!
//! let result = Redactor::new(&patterns).redact("The cat satt", &dictionary);
//! assert_eq!(result.cleaned_text, "The cat [WORD_REDACTED]");
//! ```

pub mod domain;
pub mod error;
pub mod extraction;
pub mod redaction;
pub mod report;

pub use domain::{Category, Dictionary, Disposition, PatternMatcher, PatternSet};
pub use error::{RedactorError, RedactorResult};
pub use extraction::{EmbeddedExtractor, PdftotextExtractor, TextExtractor};
pub use redaction::{
    FilterResult, RedactionService, Redactor, RunConfig, RunOutcome, RunReport,
};

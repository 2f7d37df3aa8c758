//! The redaction engine: scrubber, classifier and lexical filter in sequence.

use super::classifier::LineClassifier;
use super::lexical::LexicalFilter;
use super::result::FilterResult;
use super::scrubber::TokenScrubber;
use crate::domain::{Category, Dictionary, PatternSet};

/// Runs the redaction stages against an injected [`PatternSet`].
///
/// The engine holds no state of its own; one `Redactor` can serve any number
/// of documents, from any number of threads.
///
/// # Example
///
/// ```
/// use form16_redactor::{Dictionary, PatternSet, Redactor};
///
/// let patterns = PatternSet::new();
/// let dictionary: Dictionary = ["contact"].into_iter().collect();
/// let result = Redactor::new(&patterns).redact("Contact: 9876543210", &dictionary);
/// assert_eq!(result.cleaned_text, "Contact: [PHONE_REDACTED]");
/// assert_eq!(result.removed_labels(), vec!["Phone Numbers"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Redactor<'a> {
    patterns: &'a PatternSet,
}

impl<'a> Redactor<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// Token scrubbing followed by line classification.
    pub fn filter_pii(&self, text: &str) -> FilterResult {
        let mut result = FilterResult::new(String::new());

        let scrubbed = TokenScrubber::new(self.patterns).scrub(text);
        for category in scrubbed.removed {
            result.mark_removed(category);
        }
        for (category, value) in &scrubbed.retained {
            result.retain(*category, value);
        }

        let classified = LineClassifier::new(self.patterns).classify(&scrubbed.text);
        for category in classified.removed {
            result.mark_removed(category);
        }

        result.cleaned_text = classified.text;
        result
    }

    /// Replaces non-dictionary words in an already PII-filtered result.
    pub fn redact_unknown_words(&self, result: &mut FilterResult, dictionary: &Dictionary) {
        let filtered = LexicalFilter::new(self.patterns, dictionary).filter(&result.cleaned_text);
        result.cleaned_text = filtered.text;
        if !filtered.redacted_words.is_empty() {
            result.mark_removed(Category::NonDictionaryWord);
        }
        result.redacted_words.extend(filtered.redacted_words);
    }

    /// Full pipeline over one document.
    pub fn redact(&self, text: &str, dictionary: &Dictionary) -> FilterResult {
        let mut result = self.filter_pii(text);
        self.redact_unknown_words(&mut result, dictionary);
        result
    }
}

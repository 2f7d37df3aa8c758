//! Dictionary-based lexical filtering.

use crate::domain::{is_placeholder, Category, Dictionary, PatternSet};
use regex::Captures;
use std::collections::BTreeSet;

/// Tokens this short or shorter are never redacted.
pub const SHORT_WORD_MAX: usize = 3;

/// Text and the unique words the filter replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicalOutput {
    pub text: String,
    pub redacted_words: BTreeSet<String>,
}

/// Redacts alphabetic tokens that are not dictionary words.
#[derive(Debug, Clone, Copy)]
pub struct LexicalFilter<'a> {
    patterns: &'a PatternSet,
    dictionary: &'a Dictionary,
}

impl<'a> LexicalFilter<'a> {
    pub fn new(patterns: &'a PatternSet, dictionary: &'a Dictionary) -> Self {
        Self {
            patterns,
            dictionary,
        }
    }

    /// Returns the lowercase form of `token` if it must be redacted.
    pub fn judge(&self, token: &str) -> Option<String> {
        if is_placeholder(token) {
            return None;
        }
        let lower = token.to_lowercase();
        if lower.chars().count() <= SHORT_WORD_MAX || self.dictionary.contains(&lower) {
            return None;
        }
        Some(lower)
    }

    pub fn filter(&self, text: &str) -> LexicalOutput {
        let mut redacted_words = BTreeSet::new();
        let placeholder = Category::NonDictionaryWord.placeholder();

        let text = self
            .patterns
            .word_pattern()
            .replace_all(text, |caps: &Captures<'_>| {
                let token = &caps[0];
                match self.judge(token) {
                    Some(lower) => {
                        redacted_words.insert(lower);
                        placeholder.to_string()
                    }
                    None => token.to_string(),
                }
            })
            .into_owned();

        tracing::debug!(unique = redacted_words.len(), "Redacted non-dictionary words");

        LexicalOutput {
            text,
            redacted_words,
        }
    }
}

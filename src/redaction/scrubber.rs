//! Token-level scrubbing.
//!
//! Each token rule is applied to the whole text in registry order. A rule
//! only sees the text left by the rules before it, so it can never match
//! inside a placeholder it did not produce.

use crate::domain::{Category, Disposition, PatternMatcher, PatternSet};
use regex::NoExpand;

/// Text and metadata produced by the scrubber.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrubOutput {
    pub text: String,

    /// Masked categories, in rule order
    pub removed: Vec<Category>,

    /// Values of retained categories, in rule order then text order
    pub retained: Vec<(Category, String)>,
}

/// Applies the token rules of a [`PatternSet`].
#[derive(Debug, Clone, Copy)]
pub struct TokenScrubber<'a> {
    patterns: &'a PatternSet,
}

impl<'a> TokenScrubber<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// Scrubs phone, email, Aadhaar, PAN, GST and TAN values from `text`.
    pub fn scrub(&self, text: &str) -> ScrubOutput {
        let mut output = ScrubOutput {
            text: text.to_string(),
            ..Default::default()
        };

        for rule in self.patterns.token_rules() {
            if !rule.is_match(&output.text) {
                continue;
            }

            match rule.disposition() {
                Disposition::Mask => {
                    let hits = rule.pattern().find_iter(&output.text).count();
                    output.text = rule
                        .pattern()
                        .replace_all(&output.text, NoExpand(rule.placeholder()))
                        .into_owned();
                    output.removed.push(rule.category());
                    tracing::debug!(category = %rule.category(), hits, "Masked token values");
                }
                Disposition::Retain => {
                    let values: Vec<String> = rule
                        .extract_all(&output.text)
                        .into_iter()
                        .map(str::to_string)
                        .collect();
                    tracing::debug!(
                        category = %rule.category(),
                        hits = values.len(),
                        "Retained token values"
                    );
                    output
                        .retained
                        .extend(values.into_iter().map(|v| (rule.category(), v)));
                }
            }
        }

        output
    }
}

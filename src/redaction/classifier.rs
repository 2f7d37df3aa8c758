//! Whole-line classification.
//!
//! Lines are matched on their trimmed form and, when classified, replaced in
//! full by the rule's placeholder. Rules are tried in registry order and the
//! first hit wins, so an organization line is never also an address.

use crate::domain::{Category, PatternMatcher, PatternSet};
use std::collections::BTreeSet;

/// Text and metadata produced by the classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyOutput {
    pub text: String,

    /// Classified categories, in category order
    pub removed: Vec<Category>,
}

/// Applies the line rules of a [`PatternSet`].
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'a> {
    patterns: &'a PatternSet,
}

impl<'a> LineClassifier<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// Returns the category of the first line rule matching `line`.
    pub fn classify_line(&self, line: &str) -> Option<Category> {
        let trimmed = line.trim();
        self.patterns
            .line_rules()
            .iter()
            .find(|rule| rule.is_match(trimmed))
            .map(|rule| rule.category())
    }

    /// Redacts every classified line of `text`. Line count is unchanged.
    pub fn classify(&self, text: &str) -> ClassifyOutput {
        let mut fired = BTreeSet::new();

        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| match self.classify_line(line) {
                Some(category) => {
                    fired.insert(category);
                    category.placeholder()
                }
                None => line,
            })
            .collect();

        if !fired.is_empty() {
            tracing::debug!(categories = ?fired, "Redacted classified lines");
        }

        ClassifyOutput {
            text: lines.join("\n"),
            removed: fired.into_iter().collect(),
        }
    }
}

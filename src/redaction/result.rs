//! The per-document filtering record.

use crate::domain::Category;
use std::collections::{BTreeMap, BTreeSet};

/// Outcome of running the redaction engine over one document.
///
/// Created once per document and filled in by successive stages. Removed
/// categories only ever grow, keep insertion order and never repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterResult {
    /// The fully redacted text
    pub cleaned_text: String,

    /// Retained values keyed by field label
    pub retained_fields: BTreeMap<String, Vec<String>>,

    /// Unique lowercase words replaced by the lexical filter
    pub redacted_words: BTreeSet<String>,

    removed_categories: Vec<Category>,
}

impl FilterResult {
    /// Starts a record for `text` with nothing redacted yet.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            cleaned_text: text.into(),
            ..Default::default()
        }
    }

    /// Records that at least one value of `category` was redacted.
    pub fn mark_removed(&mut self, category: Category) {
        if !self.removed_categories.contains(&category) {
            self.removed_categories.push(category);
        }
    }

    /// Records a value that was intentionally kept.
    pub fn retain(&mut self, category: Category, value: &str) {
        let values = self
            .retained_fields
            .entry(category.label().to_string())
            .or_default();
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }

    pub fn removed_categories(&self) -> &[Category] {
        &self.removed_categories
    }

    pub fn removed_labels(&self) -> Vec<&'static str> {
        self.removed_categories.iter().map(|c| c.label()).collect()
    }

    pub fn has_removed(&self, category: Category) -> bool {
        self.removed_categories.contains(&category)
    }

    /// Field labels of retained data, sorted.
    pub fn retained_field_types(&self) -> Vec<&str> {
        self.retained_fields.keys().map(String::as_str).collect()
    }

    /// Returns true if any redaction was applied.
    pub fn has_redactions(&self) -> bool {
        !self.removed_categories.is_empty()
    }
}

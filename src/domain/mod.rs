//! Domain models and business logic for PII detection.
//!
//! This module holds the fixed rule tables that drive the redaction engine:
//! the PII categories, the compiled pattern registry, the address and
//! organization vocabularies, and the English dictionary used by the
//! lexical filter.

pub mod dictionary;
pub mod identifiers;
pub mod locality;
pub mod patterns;

pub use dictionary::Dictionary;
pub use patterns::{Disposition, LineRule, PatternSet, TokenRule};

use regex::Regex;
use std::fmt;

/// A category of sensitive data the engine knows how to redact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Phone,
    Email,
    Aadhaar,
    Pan,
    Gst,
    Tan,
    Address,
    Organization,
    NonDictionaryWord,
}

impl Category {
    /// Token-level categories, in the order the scrubber applies them.
    pub const TOKEN_ORDER: [Category; 6] = [
        Category::Phone,
        Category::Email,
        Category::Aadhaar,
        Category::Pan,
        Category::Gst,
        Category::Tan,
    ];

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Phone => "Phone Numbers",
            Self::Email => "Email Addresses",
            Self::Aadhaar => "Aadhaar Numbers",
            Self::Pan => "PAN Numbers",
            Self::Gst => "GST Numbers",
            Self::Tan => "TAN Numbers",
            Self::Address => "Addresses",
            Self::Organization => "Organizations",
            Self::NonDictionaryWord => "Non-Dictionary Words",
        }
    }

    /// Literal substituted for a redacted span of this category.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Phone => "[PHONE_REDACTED]",
            Self::Email => "[EMAIL_REDACTED]",
            Self::Aadhaar => "[AADHAAR_REDACTED]",
            Self::Pan => "[PAN_REDACTED]",
            Self::Gst => "[GST_REDACTED]",
            Self::Tan => "[TAN_REDACTED]",
            Self::Address => "[ADDRESS_REDACTED]",
            Self::Organization => "[ORG_REDACTED]",
            Self::NonDictionaryWord => "[WORD_REDACTED]",
        }
    }

    /// Returns true for categories redacted as isolated substrings.
    pub fn is_token_level(self) -> bool {
        Self::TOKEN_ORDER.contains(&self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns true if `token` is one of the bracketed placeholders.
pub fn is_placeholder(token: &str) -> bool {
    token.starts_with('[') && token.ends_with(']')
}

/// Trait shared by every entry of the rule tables.
pub trait PatternMatcher: Send + Sync {
    fn category(&self) -> Category;
    fn placeholder(&self) -> &'static str;
    fn patterns(&self) -> &[Regex];

    fn is_match(&self, text: &str) -> bool {
        self.patterns().iter().any(|p| p.is_match(text))
    }

    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.patterns()
            .iter()
            .flat_map(|p| p.find_iter(text).map(|m| m.as_str()))
            .collect()
    }
}

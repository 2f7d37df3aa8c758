//! The pattern registry.
//!
//! A [`PatternSet`] is built once and never mutated afterwards. It holds the
//! ordered token rules, the ordered line rules and the tokenizer used by the
//! lexical filter. Order in each table is the order of evaluation.

use super::{identifiers, locality, Category, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// What happens to text matched by a token rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disposition {
    /// Replace every match with the category placeholder
    #[default]
    Mask,

    /// Leave matches in place and report them as retained business data
    Retain,
}

/// A whole-text substitution rule for one token-level category.
#[derive(Debug, Clone)]
pub struct TokenRule {
    category: Category,
    patterns: [Regex; 1],
    disposition: Disposition,
}

impl TokenRule {
    fn new(category: Category, source: &str) -> Self {
        Self {
            category,
            patterns: [Regex::new(source).expect("Valid token pattern")],
            disposition: Disposition::Mask,
        }
    }

    pub fn pattern(&self) -> &Regex {
        &self.patterns[0]
    }

    pub fn disposition(&self) -> Disposition {
        self.disposition
    }
}

impl PatternMatcher for TokenRule {
    fn category(&self) -> Category {
        self.category
    }

    fn placeholder(&self) -> &'static str {
        self.category.placeholder()
    }

    fn patterns(&self) -> &[Regex] {
        &self.patterns
    }
}

/// A whole-line classification rule. Any of its patterns matching is a hit.
#[derive(Debug, Clone)]
pub struct LineRule {
    category: Category,
    patterns: Vec<Regex>,
}

impl LineRule {
    fn new(category: Category, sources: &[String]) -> Self {
        Self {
            category,
            patterns: sources
                .iter()
                .map(|s| Regex::new(s).expect("Valid line pattern"))
                .collect(),
        }
    }
}

impl PatternMatcher for LineRule {
    fn category(&self) -> Category {
        self.category
    }

    fn placeholder(&self) -> &'static str {
        self.category.placeholder()
    }

    fn patterns(&self) -> &[Regex] {
        &self.patterns
    }
}

/// Immutable collection of every rule the engine applies.
///
/// # Example
///
/// ```
/// use form16_redactor::domain::{Category, PatternMatcher, PatternSet};
///
/// let patterns = PatternSet::new();
/// let order: Vec<Category> = patterns.token_rules().iter().map(|r| r.category()).collect();
/// assert_eq!(order, Category::TOKEN_ORDER);
/// ```
#[derive(Debug, Clone)]
pub struct PatternSet {
    token_rules: Vec<TokenRule>,
    line_rules: Vec<LineRule>,
    word_pattern: Regex,
}

impl PatternSet {
    /// Builds the standard rule set: every token category masked,
    /// organization lines checked before address lines.
    pub fn new() -> Self {
        let token_rules = Category::TOKEN_ORDER
            .iter()
            .filter_map(|&c| identifiers::source(c).map(|src| TokenRule::new(c, src)))
            .collect();

        let line_rules = vec![
            LineRule::new(Category::Organization, &[locality::organization_source()]),
            LineRule::new(
                Category::Address,
                &[locality::places_source(), locality::address_keywords_source()],
            ),
        ];

        Self {
            token_rules,
            line_rules,
            // ASCII boundaries, so non-ASCII letters split a word instead of hiding it
            word_pattern: Regex::new(r"(?-u:\b)[[:alpha:]]+(?-u:\b)").expect("Valid word pattern"),
        }
    }

    /// Process-wide standard rule set, compiled on first use.
    pub fn shared() -> &'static PatternSet {
        static SHARED: Lazy<PatternSet> = Lazy::new(PatternSet::new);
        &SHARED
    }

    /// Switches a token category from masking to retention.
    ///
    /// Has no effect on line-level categories.
    pub fn retain(mut self, category: Category) -> Self {
        if !category.is_token_level() {
            tracing::warn!(%category, "Only token categories can be retained");
            return self;
        }
        for rule in self.token_rules.iter_mut().filter(|r| r.category == category) {
            rule.disposition = Disposition::Retain;
        }
        self
    }

    pub fn token_rules(&self) -> &[TokenRule] {
        &self.token_rules
    }

    pub fn line_rules(&self) -> &[LineRule] {
        &self.line_rules
    }

    /// Tokenizer for the lexical filter: maximal word-bounded alphabetic runs.
    pub fn word_pattern(&self) -> &Regex {
        &self.word_pattern
    }

    pub fn token_rule(&self, category: Category) -> Option<&TokenRule> {
        self.token_rules.iter().find(|r| r.category == category)
    }

    pub fn line_rule(&self, category: Category) -> Option<&LineRule> {
        self.line_rules.iter().find(|r| r.category == category)
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new()
    }
}

//! Custom assertions for redaction testing.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

/// Asserts that none of `values` survives in `text`.
///
/// # Panics
/// Panics listing every value still present.
pub fn assert_all_redacted(text: &str, values: &[&str]) {
    let found: Vec<&str> = values.iter().copied().filter(|v| text.contains(v)).collect();
    assert!(
        found.is_empty(),
        "The following values should be redacted but were found: {:?}\n--- text ---\n{}",
        found,
        text
    );
}

/// Asserts that `value` is still present in `text`.
pub fn assert_preserved(text: &str, value: &str) {
    assert!(
        text.contains(value),
        "'{}' should be preserved but was not found in:\n{}",
        value,
        text
    );
}

/// Asserts that two texts have the same number of line separators.
pub fn assert_same_line_count(before: &str, after: &str) {
    assert_eq!(
        before.matches('\n').count(),
        after.matches('\n').count(),
        "Line count changed.\n--- before ---\n{}\n--- after ---\n{}",
        before,
        after
    );
}

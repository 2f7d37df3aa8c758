//! Indian identifier shapes.
//!
//! Pattern sources for the token-level categories. None of them can match a
//! line break, so substituting a match never changes the line count.

use super::Category;

/// Mobile numbers: 10 digits starting 6-9, optionally after `+91`/`91`.
///
/// The separator is only consumed together with a country prefix, so the
/// text before a bare number is left alone.
pub const PHONE: &str = r"(?:(?:\+91|91)[-. ]?)?[6-9][0-9]{9}|\b[6-9][0-9]{9}\b";

pub const EMAIL: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// 12 digits, either contiguous or as three blocks of four.
pub const AADHAAR: &str = r"\b[0-9]{4} ?[0-9]{4} ?[0-9]{4}\b|\b[0-9]{12}\b";

/// Permanent Account Number: AAAAA9999A.
pub const PAN: &str = r"\b[A-Z]{5}[0-9]{4}[A-Z]\b";

/// GSTIN: state code, embedded PAN, entity digit, literal `Z`, checksum.
pub const GST: &str = r"\b[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][A-Z0-9]Z[A-Z0-9]\b";

/// Tax Deduction Account Number: AAAA99999A, any case.
pub const TAN: &str = r"(?i)\b[A-Z]{4}[0-9]{5}[A-Z]\b";

/// Returns the pattern source for a token-level category.
pub fn source(category: Category) -> Option<&'static str> {
    match category {
        Category::Phone => Some(PHONE),
        Category::Email => Some(EMAIL),
        Category::Aadhaar => Some(AADHAAR),
        Category::Pan => Some(PAN),
        Category::Gst => Some(GST),
        Category::Tan => Some(TAN),
        _ => None,
    }
}

//! Edge case tests for line classification, lexical filtering and the
//! full redaction pipeline.

use form16_redactor::domain::{Category, Dictionary, PatternSet};
use form16_redactor::redaction::{LexicalFilter, LineClassifier, Redactor};

mod common;
use common::*;

fn dictionary(words: &[&str]) -> Dictionary {
    words.iter().collect()
}

// ---------------------------------------------------------------------------
// Line classification
// ---------------------------------------------------------------------------

#[test]
fn test_city_line_is_address() {
    let out = LineClassifier::new(PatternSet::shared()).classify("123, MG Road, Bangalore");
    assert_eq!(out.text, "[ADDRESS_REDACTED]");
    assert_eq!(out.removed, vec![Category::Address]);
}

#[test]
fn test_state_name_alone_is_address() {
    let classifier = LineClassifier::new(PatternSet::shared());
    assert_eq!(
        classifier.classify_line("Mumbai, Maharashtra 400001"),
        Some(Category::Address)
    );
    assert_eq!(
        classifier.classify_line("Andhra Pradesh"),
        Some(Category::Address)
    );
}

#[test]
fn test_keyword_without_place_is_address() {
    let classifier = LineClassifier::new(PatternSet::shared());
    for line in [
        "Flat No. 12",
        "2nd Floor, Tower B",
        "Opp. Railway Station",
        "Behind Ganesh Temple",
        "Plot 7, Sector 21",
        "Rd. No. 5",
    ] {
        assert_eq!(
            classifier.classify_line(line),
            Some(Category::Address),
            "'{line}' should be an address"
        );
    }
}

#[test]
fn test_organization_short_circuits_address() {
    let text = "Infosys Limited, Electronics City, Bengaluru";
    let out = LineClassifier::new(PatternSet::shared()).classify(text);
    assert_eq!(out.text, "[ORG_REDACTED]");
    assert_eq!(out.removed, vec![Category::Organization]);
}

#[test]
fn test_organization_suffix_variants() {
    let classifier = LineClassifier::new(PatternSet::shared());
    for line in [
        "Acme Pvt. Ltd.",
        "Acme Private Limited",
        "Acme Ltd",
        "Acme LLP",
        "Acme L.L.P.",
        "Acme Inc.",
        "Acme Corporation",
        "Acme Co. Ltd.",
        "ACME PLC",
        "acme pte ltd",
    ] {
        assert_eq!(
            classifier.classify_line(line),
            Some(Category::Organization),
            "'{line}' should be an organization"
        );
    }
}

#[test]
fn test_words_containing_keywords_are_not_matched() {
    let classifier = LineClassifier::new(PatternSet::shared());
    for line in [
        "Total Income",
        "Standard deduction",
        "Limitedness",
        "Blocked amount",
        "Nearly done",
    ] {
        assert_eq!(classifier.classify_line(line), None, "'{line}' matched");
    }
}

#[test]
fn test_indentation_is_replaced_with_line() {
    let text = "Employer:\n      Acme Software Pvt Ltd      \nEmployee:";
    let out = LineClassifier::new(PatternSet::shared()).classify(text);
    assert_eq!(out.text, "Employer:\n[ORG_REDACTED]\nEmployee:");
}

#[test]
fn test_crlf_lines_keep_their_separators() {
    let text = "Near Bus Stand\r\nSalary\r\n";
    let out = LineClassifier::new(PatternSet::shared()).classify(text);
    assert_eq!(out.text, "[ADDRESS_REDACTED]\nSalary\r\n");
    assert_same_line_count(text, &out.text);
}

// ---------------------------------------------------------------------------
// Lexical filtering
// ---------------------------------------------------------------------------

#[test]
fn test_dictionary_scenario() {
    let dict = dictionary(&["the", "cat", "sat"]);
    let out = LexicalFilter::new(PatternSet::shared(), &dict).filter("The cat satt");
    assert_eq!(out.text, "The cat [WORD_REDACTED]");
    assert!(out.redacted_words.contains("satt"));
}

#[test]
fn test_short_word_boundary() {
    let dict = Dictionary::default();
    let filter = LexicalFilter::new(PatternSet::shared(), &dict);
    assert_eq!(filter.filter("xqz").text, "xqz");
    assert_eq!(filter.filter("xqzw").text, "[WORD_REDACTED]");
}

#[test]
fn test_redacted_words_are_unique_and_lowercase() {
    let dict = Dictionary::default();
    let out = LexicalFilter::new(PatternSet::shared(), &dict).filter("Ramesh RAMESH ramesh Kumar");
    assert_eq!(
        out.text,
        "[WORD_REDACTED] [WORD_REDACTED] [WORD_REDACTED] [WORD_REDACTED]"
    );
    assert_eq!(
        out.redacted_words.into_iter().collect::<Vec<_>>(),
        vec!["kumar", "ramesh"]
    );
}

#[test]
fn test_alphanumeric_identifiers_are_not_tokens() {
    let dict = Dictionary::default();
    let text = "Ref FY2024 Q4abc 26AS form_16";
    let out = LexicalFilter::new(PatternSet::shared(), &dict).filter(text);
    assert_eq!(out.text, text);
    assert!(out.redacted_words.is_empty());
}

#[test]
fn test_punctuation_splits_tokens() {
    let dict = dictionary(&["income"]);
    let out = LexicalFilter::new(PatternSet::shared(), &dict).filter("Income-Zyxwv, (income)");
    assert_eq!(out.text, "Income-[WORD_REDACTED], (income)");
}

#[test]
fn test_accented_names_are_split_and_redacted() {
    let dict = dictionary(&["employee", "name"]);
    let result =
        Redactor::new(PatternSet::shared()).redact("Employee Name Françoise Müllerova", &dict);

    assert_eq!(
        result.cleaned_text,
        "Employee Name [WORD_REDACTED]ç[WORD_REDACTED] M[WORD_REDACTED]"
    );
    assert!(result.has_removed(Category::NonDictionaryWord));
    assert_eq!(
        result.redacted_words.into_iter().collect::<Vec<_>>(),
        vec!["fran", "llerova", "oise"]
    );
}

#[test]
fn test_non_ascii_letters_break_words() {
    let dict = Dictionary::default();
    let out = LexicalFilter::new(PatternSet::shared(), &dict).filter("Résumé naïve café Béngaluru");
    assert_eq!(out.text, "Résumé naïve café B[WORD_REDACTED]");
    assert_eq!(
        out.redacted_words.into_iter().collect::<Vec<_>>(),
        vec!["ngaluru"]
    );
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

#[test]
fn test_sample_form16() {
    let dict = sample_dictionary();
    let result = Redactor::new(PatternSet::shared()).redact(SAMPLE_FORM16, &dict);

    let expected = "\
FORM NO. 16
[See rule 31(1)(a)]
PART A
Certificate under section 203 of the Income-tax Act, 1961
Name and address of the Employer
[ORG_REDACTED]
[ADDRESS_REDACTED]
[ADDRESS_REDACTED]
Contact: [PHONE_REDACTED], [EMAIL_REDACTED]
PAN of the Deductor: [PAN_REDACTED]
TAN of the Deductor: [TAN_REDACTED]
GSTIN: [GST_REDACTED]
Employee PAN: [PAN_REDACTED]
Aadhaar: [AADHAAR_REDACTED]
Employee Reference [WORD_REDACTED]
Gross salary 12,34,567.00
Assessment Year 2025-26
";
    assert_eq!(result.cleaned_text, expected);
    assert_all_redacted(&result.cleaned_text, SAMPLE_IDENTIFIERS);
    assert_eq!(
        result.removed_labels(),
        vec![
            "Phone Numbers",
            "Email Addresses",
            "Aadhaar Numbers",
            "PAN Numbers",
            "GST Numbers",
            "TAN Numbers",
            "Addresses",
            "Organizations",
            "Non-Dictionary Words",
        ]
    );
    assert!(result.retained_fields.is_empty());
    assert_eq!(result.redacted_words.len(), 1);
}

#[test]
fn test_sample_form16_retaining_gst() {
    let patterns = PatternSet::new().retain(Category::Gst);
    let result = Redactor::new(&patterns).redact(SAMPLE_FORM16, &sample_dictionary());

    assert_preserved(&result.cleaned_text, "GSTIN: 29AACCA1234K1Z5");
    assert!(!result.has_removed(Category::Gst));
    assert!(result.has_removed(Category::Pan));
    assert_eq!(
        result.retained_fields.get("GST Numbers"),
        Some(&vec!["29AACCA1234K1Z5".to_string()])
    );
}

#[test]
fn test_empty_text() {
    let result = Redactor::new(PatternSet::shared()).redact("", &Dictionary::default());
    assert_eq!(result.cleaned_text, "");
    assert!(!result.has_redactions());
}

//! Test fixtures: sample documents, dictionaries, extractors and PDF builders.

use anyhow::Result;
use form16_redactor::{Dictionary, RedactorError, RedactorResult, TextExtractor};
use printpdf::*;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// A condensed Form-16 Part A, as `pdftotext -layout` would produce it.
pub const SAMPLE_FORM16: &str = "\
FORM NO. 16
[See rule 31(1)(a)]
PART A
Certificate under section 203 of the Income-tax Act, 1961
Name and address of the Employer
Acme Software Pvt Ltd
4th Floor, Prestige Tower, MG Road
Bengaluru, Karnataka 560001
Contact: 9876543210, payroll@acme.example.com
PAN of the Deductor: AACCA1234K
TAN of the Deductor: BLRA12345B
GSTIN: 29AACCA1234K1Z5
Employee PAN: ABCPQ1234L
Aadhaar: 2345 6789 0123
Employee Reference Zorblax
Gross salary 12,34,567.00
Assessment Year 2025-26
";

/// Every identifier planted in [`SAMPLE_FORM16`].
pub const SAMPLE_IDENTIFIERS: &[&str] = &[
    "9876543210",
    "payroll@acme.example.com",
    "AACCA1234K",
    "BLRA12345B",
    "29AACCA1234K1Z5",
    "ABCPQ1234L",
    "2345 6789 0123",
];

/// Words that appear in the sample and should survive the lexical filter.
pub const SAMPLE_WORDS: &[&str] = &[
    "form",
    "rule",
    "part",
    "certificate",
    "under",
    "section",
    "income",
    "name",
    "address",
    "employer",
    "contact",
    "deductor",
    "employee",
    "reference",
    "gross",
    "salary",
    "assessment",
    "year",
    "aadhaar",
    "gstin",
];

pub fn sample_dictionary() -> Dictionary {
    SAMPLE_WORDS.iter().collect()
}

/// Writes a newline-separated word list into `dir`.
pub fn write_dictionary(dir: &Path, words: &[&str]) -> Result<PathBuf> {
    let path = dir.join("english_words.txt");
    fs::write(&path, words.join("\n"))?;
    Ok(path)
}

/// Extractor returning fixed text, for driving the service without PDFs.
#[derive(Debug, Clone)]
pub struct StaticExtractor {
    text: String,
}

impl StaticExtractor {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl TextExtractor for StaticExtractor {
    fn extract_text(&self, _input: &Path) -> RedactorResult<String> {
        Ok(self.text.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Extractor that always fails, as a crashed external tool would.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingExtractor;

impl TextExtractor for FailingExtractor {
    fn extract_text(&self, input: &Path) -> RedactorResult<String> {
        Err(RedactorError::TextExtraction {
            path: input.to_path_buf(),
            reason: "Syntax Error: Couldn't find trailer dictionary".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Builder for creating test PDFs, one text line per call.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// let pdf = TestPdfBuilder::new()
///     .with_line("FORM NO. 16")
///     .with_line("Employee PAN: ABCPQ1234L")
///     .build(Path::new("/tmp/form16.pdf"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TestPdfBuilder {
    title: String,
    lines: Vec<String>,
    page_width: Mm,
    page_height: Mm,
}

impl TestPdfBuilder {
    pub fn new() -> Self {
        Self {
            title: "Form 16".to_string(),
            lines: Vec::new(),
            page_width: Mm(210.0),  // A4 width
            page_height: Mm(297.0), // A4 height
        }
    }

    pub fn with_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn with_lines(mut self, text: &str) -> Self {
        self.lines.extend(text.lines().map(str::to_string));
        self
    }

    /// Builds the PDF and writes it to the specified path.
    pub fn build(self, output_path: &Path) -> Result<PathBuf> {
        let (doc, page1, layer1) =
            PdfDocument::new(&self.title, self.page_width, self.page_height, "Layer 1");
        let current_layer = doc.get_page(page1).get_layer(layer1);
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

        let mut y = 280.0;
        for line in &self.lines {
            current_layer.use_text(line.as_str(), 11.0, Mm(15.0), Mm(y), &font);
            y -= 7.0;
        }

        doc.save(&mut BufWriter::new(fs::File::create(output_path)?))?;
        Ok(output_path.to_path_buf())
    }
}

impl Default for TestPdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Output file formats.
//!
//! Two artifacts are written per run: the filtered report, with a summary of
//! what was removed followed by the cleaned text, and the raw extracted text
//! kept for comparison.

use crate::error::{RedactorError, RedactorResult};
use crate::redaction::FilterResult;
use std::path::Path;

pub const FILTERED_HEADER: &str = "=== FILTERED PDF DATA ===";
pub const RAW_HEADER: &str = "=== RAW PDF TEXT (NO REDACTIONS) ===";
const RULE_WIDTH: usize = 50;

fn bracketed<S: AsRef<str>>(items: &[S]) -> String {
    let joined: Vec<&str> = items.iter().map(|s| s.as_ref()).collect();
    format!("[{}]", joined.join(", "))
}

/// Renders the filtered report for `result`.
pub fn render_filtered(result: &FilterResult) -> String {
    let mut out = String::with_capacity(result.cleaned_text.len() + 256);

    out.push_str(FILTERED_HEADER);
    out.push_str("\n\n");

    out.push_str("FILTERING SUMMARY:\n");
    out.push_str(&format!(
        "- Removed PII Fields: {}\n",
        bracketed(&result.removed_labels())
    ));
    out.push_str(&format!(
        "- Retained Business Fields: {}\n",
        bracketed(&result.retained_field_types())
    ));
    out.push('\n');

    if !result.retained_fields.is_empty() {
        out.push_str("RETAINED BUSINESS DATA:\n");
        for (field_type, values) in &result.retained_fields {
            out.push_str(&format!("{}:\n", field_type));
            for value in values {
                out.push_str(&format!("  - {}\n", value));
            }
        }
        out.push('\n');
    }

    out.push_str("CLEANED TEXT CONTENT:\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&result.cleaned_text);
    out
}

/// Renders the unredacted text with its header.
pub fn render_raw(text: &str) -> String {
    format!("{}\n\n{}", RAW_HEADER, text)
}

fn write(path: &Path, contents: &str) -> RedactorResult<()> {
    std::fs::write(path, contents).map_err(|source| RedactorError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes both artifacts for one run.
///
/// Both are rendered up front. If the filtered report cannot be written the
/// raw file is removed again, so a run never leaves only half its output.
pub fn write_outputs(
    text: &str,
    result: &FilterResult,
    raw_path: &Path,
    filtered_path: &Path,
) -> RedactorResult<()> {
    let raw = render_raw(text);
    let filtered = render_filtered(result);

    write(raw_path, &raw)?;
    if let Err(err) = write(filtered_path, &filtered) {
        if let Err(cleanup) = std::fs::remove_file(raw_path) {
            tracing::warn!(
                path = %raw_path.display(),
                error = %cleanup,
                "Could not remove raw output after failed write"
            );
        }
        return Err(err);
    }
    Ok(())
}

//! Extraction through the external `pdftotext` program (poppler-utils).

use super::TextExtractor;
use crate::error::{RedactorError, RedactorResult};
use std::path::Path;
use std::process::Command;

/// Runs `pdftotext -layout <input> -` and captures its standard output.
///
/// Layout mode keeps table columns on the same line, which is what the
/// line classifier expects from a Form-16.
#[derive(Debug, Clone)]
pub struct PdftotextExtractor {
    program: String,
    layout: bool,
}

impl PdftotextExtractor {
    pub const DEFAULT_PROGRAM: &'static str = "pdftotext";

    pub fn new() -> Self {
        Self {
            program: Self::DEFAULT_PROGRAM.to_string(),
            layout: true,
        }
    }

    /// Uses a different executable, e.g. an absolute path to `pdftotext`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Toggles the `-layout` flag.
    pub fn with_layout(mut self, layout: bool) -> Self {
        self.layout = layout;
        self
    }

    fn command(&self, input: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        if self.layout {
            cmd.arg("-layout");
        }
        cmd.arg(input).arg("-");
        cmd
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdftotextExtractor {
    fn extract_text(&self, input: &Path) -> RedactorResult<String> {
        tracing::debug!(program = %self.program, input = %input.display(), "Running extractor");

        let output = self
            .command(input)
            .output()
            .map_err(|source| RedactorError::ToolUnavailable {
                tool: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RedactorError::TextExtraction {
                path: input.to_path_buf(),
                reason: format!("{} exited with {}: {}", self.program, output.status, stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn name(&self) -> &str {
        "pdftotext"
    }
}

//! Form-16 redaction CLI.
//!
//! Extracts the text of a Form-16 PDF, writes it unmodified for reference,
//! and writes a redacted copy with a summary of what was removed.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use form16_redactor::{
    Category, EmbeddedExtractor, PatternSet, PdftotextExtractor, RedactionService, RunConfig,
    RunOutcome, RunReport, TextExtractor,
};

/// Form-16 PII Redaction Tool
///
/// Redacts personal data and non-dictionary words from the text of an
/// Indian Form-16 tax document.
#[derive(Parser)]
#[command(name = "form16-redactor")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Filtered output file path
    #[arg(value_name = "FILTERED_OUTPUT", default_value = RunConfig::DEFAULT_FILTERED_OUTPUT)]
    filtered_output: PathBuf,

    /// Raw extracted text file path
    #[arg(value_name = "RAW_OUTPUT", default_value = RunConfig::DEFAULT_RAW_OUTPUT)]
    raw_output: PathBuf,

    /// Input PDF file path
    #[arg(short, long, value_name = "FILE", default_value = RunConfig::DEFAULT_INPUT)]
    input: PathBuf,

    /// English word list, one word per line
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "FORM16_DICTIONARY",
        default_value = RunConfig::DEFAULT_DICTIONARY
    )]
    dictionary: PathBuf,

    /// Text extraction backend
    #[arg(long, value_enum, default_value_t = ExtractorKind::Pdftotext)]
    extractor: ExtractorKind,

    /// Keep GST numbers in the text and list them as retained business data
    #[arg(long)]
    retain_gst: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExtractorKind {
    /// External `pdftotext -layout` (poppler-utils)
    Pdftotext,
    /// Built-in extractor, no external tools required
    Embedded,
}

impl ExtractorKind {
    fn build(self) -> Box<dyn TextExtractor> {
        match self {
            Self::Pdftotext => Box::new(PdftotextExtractor::new()),
            Self::Embedded => Box::new(EmbeddedExtractor::new()),
        }
    }
}

/// Run command handler with dependency injection.
struct RedactionHandler {
    service: RedactionService,
}

impl RedactionHandler {
    fn new(extractor: ExtractorKind, retain_gst: bool) -> Self {
        let mut patterns = PatternSet::new();
        if retain_gst {
            patterns = patterns.retain(Category::Gst);
        }
        Self {
            service: RedactionService::new(extractor.build(), patterns),
        }
    }

    fn run(&self, config: &RunConfig) -> Result<()> {
        println!("Reading PDF file: {}", config.input.display());

        let outcome = self
            .service
            .run(config)
            .with_context(|| format!("Failed to process {}", config.input.display()))?;

        match outcome {
            RunOutcome::NothingToProcess => {
                println!("No text could be extracted from the PDF. Exiting.");
            }
            RunOutcome::Completed(report) => print_summary(config, &report),
        }

        Ok(())
    }
}

fn print_summary(config: &RunConfig, report: &RunReport) {
    let result = &report.result;

    println!("\n=== PROCESSING COMPLETE ===");
    println!("Input file: {}", config.input.display());
    println!("Filtered output file: {}", config.filtered_output.display());
    println!("Raw text file: {}", config.raw_output.display());
    println!("Original text length: {} characters", report.original_chars);
    println!("Filtered text length: {} characters", report.filtered_chars());

    if result.has_redactions() {
        println!("Removed PII fields: {}", result.removed_labels().join(", "));
    }

    if !result.retained_fields.is_empty() {
        println!(
            "Retained business data: {}",
            result.retained_field_types().join(", ")
        );
    }

    if !result.redacted_words.is_empty() {
        tracing::debug!(
            unique = result.redacted_words.len(),
            "Distinct non-dictionary words redacted"
        );
    }

    println!("\nFiltered data has been saved successfully!");
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = RunConfig {
        input: cli.input,
        dictionary: cli.dictionary,
        filtered_output: cli.filtered_output,
        raw_output: cli.raw_output,
    };

    let handler = RedactionHandler::new(cli.extractor, cli.retain_gst);
    if let Err(err) = handler.run(&config) {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}

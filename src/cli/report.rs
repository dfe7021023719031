//! Report formatting and printing utilities.
//!
//! Keys and JSON go to stdout so they can be piped; summaries and warnings go
//! to stderr. Separate from core logic to allow keysweep to be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary, TypesSummary},
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::{ExtractionResult, SkippedPath},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// JSON shape of an extraction run.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtractReport<'a> {
    project_type: &'a str,
    #[serde(flatten)]
    result: &'a ExtractionResult,
}

/// Print a command result to stdout/stderr.
pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Print a command result to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, verbose, out, err),
        CommandSummary::Types(summary) => {
            print_types(summary, out);
            Ok(())
        }
        CommandSummary::Init(summary) => {
            print_init(summary, out);
            Ok(())
        }
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_extract<O: Write, E: Write>(
    summary: &ExtractSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    let result = &summary.result;

    if verbose && !summary.config_from_file {
        let _ = writeln!(
            err,
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    match summary.format {
        OutputFormat::Text => {
            for key in result.sorted_keys() {
                let _ = writeln!(out, "{}", key);
            }
        }
        OutputFormat::Json => {
            let report = ExtractReport {
                project_type: &summary.project_type,
                result,
            };
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize extraction result")?;
            let _ = writeln!(out, "{}", json);
        }
    }

    print_skipped_to(result.skipped(), verbose, err);

    let keys = result.keys().len();
    let files = result.scanned_files().len();
    let _ = writeln!(
        err,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Found {} {} in {} {} ({})",
            keys,
            if keys == 1 { "key" } else { "keys" },
            files,
            if files == 1 { "file" } else { "files" },
            summary.project_type
        )
        .green()
    );

    Ok(())
}

/// Print skipped paths: one line each when verbose, a count otherwise.
pub fn print_skipped_to<W: Write>(skipped: &[SkippedPath], verbose: bool, writer: &mut W) {
    if skipped.is_empty() {
        return;
    }

    if verbose {
        for entry in skipped {
            let _ = writeln!(
                writer,
                "{} skipped {}: {}",
                "warning:".bold().yellow(),
                entry.path.display(),
                entry.reason
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            skipped.len(),
            "-v".cyan()
        );
    }
}

fn print_types<W: Write>(summary: &TypesSummary, writer: &mut W) {
    for project_type in &summary.project_types {
        let _ = writeln!(writer, "{}", project_type);
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

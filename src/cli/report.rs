//! Report formatting and printing utilities.
//!
//! Separate from the export logic to allow i18n-js to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ExportSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Export(summary) => {
            print_export_to(summary, verbose, &mut io::stdout().lock());
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Print an export summary to a custom writer.
pub fn print_export_to<W: Write>(summary: &ExportSummary, verbose: bool, writer: &mut W) {
    for segment in &summary.segments {
        if summary.is_dry_run {
            let _ = writeln!(
                writer,
                "Would write {} ({})",
                segment.path,
                plural(segment.top_level_keys, "top-level key")
            );
        } else {
            let _ = writeln!(writer, "Saving to file {}", segment.path);
        }
    }

    if summary.segments.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            "warning:".bold().yellow(),
            "No translations matched, nothing to export"
        );
        return;
    }

    let counts = format!(
        "{} from {}",
        plural(summary.segments.len(), "segment"),
        plural(summary.locale_file_count, "locale file")
    );
    let msg = if summary.is_dry_run {
        format!("Planned {} (dry run, nothing written)", counts)
    } else {
        format!("Exported {}", counts)
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());

    if verbose {
        let _ = writeln!(writer, "Output format: {}", summary.format.as_str());
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else if let Some(error) = &summary.error {
        eprintln!("{} {}", FAILURE_MARK.red(), error);
    }
}

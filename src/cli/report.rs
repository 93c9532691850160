//! Status output for the CLI.
//!
//! Kept apart from the pipeline so citylist can be used as a library without
//! printing anything.

use std::io::{self, Write};

use colored::Colorize;

use crate::pipeline::TransformSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the confirmation line for a finished run to stdout.
///
/// With `verbose`, a short breakdown follows and skipped empty values are
/// reported on stderr.
pub fn print_generated(summary: &TransformSummary, verbose: bool) {
    print_generated_to(summary, verbose, &mut io::stdout().lock());
    if verbose {
        print_empty_warning_to(summary, &mut io::stderr().lock());
    }
}

/// Print the confirmation line to a custom writer.
pub fn print_generated_to<W: Write>(summary: &TransformSummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("{} file has been created.", summary.output.display()).green()
    );

    if verbose {
        let _ = writeln!(
            writer,
            "  {} {} row(s) from {}",
            "read".bold(),
            summary.rows_read,
            summary.input.display()
        );
        let _ = writeln!(
            writer,
            "  {} {} distinct value(s) of column \"{}\" ({} duplicate(s) dropped)",
            "wrote".bold(),
            summary.city_count,
            summary.column,
            summary.duplicates
        );
    }
}

/// Warn about rows whose value was empty.
pub fn print_empty_warning_to<W: Write>(summary: &TransformSummary, writer: &mut W) {
    if summary.empty_skipped > 0 {
        let _ = writeln!(
            writer,
            "{} {} row(s) had an empty \"{}\" value and were skipped",
            "warning:".bold().yellow(),
            summary.empty_skipped,
            summary.column
        );
    }
}

/// Print the confirmation line for `init`.
pub fn print_init(file_name: &str) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", file_name).green()
    );
}

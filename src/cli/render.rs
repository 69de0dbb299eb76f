//! Report rendering for the `scan` command
//!
//! Text output mirrors the per-file progress lines of a scan followed by the failure list
//! and the sorted bookmarks. Every string taken from an export file is passed through
//! [`strip_ansi_codes`] first.

use std::io::{self, Write};

use crate::harvester::HarvestReport;
use crate::utils::strip_ansi_codes;

/// Write the human-readable report
pub fn render_text(report: &HarvestReport, out: &mut impl Write) -> io::Result<()> {
    for file in &report.files {
        writeln!(out, "{}", strip_ansi_codes(&file.path.display().to_string()))?;
        writeln!(
            out,
            "\tScraped {} bookmarks successfully, {} unsuccessfully.",
            file.bookmarks, file.failures
        )?;
    }

    for error in &report.file_errors {
        writeln!(
            out,
            "!!! Failed to read {}: {}",
            strip_ansi_codes(&error.path.display().to_string()),
            strip_ansi_codes(&error.message)
        )?;
    }

    for failure in &report.failures {
        writeln!(
            out,
            "!!! Failed to parse bookmark text \"{}\": {}",
            strip_ansi_codes(&failure.fragment.to_string()),
            strip_ansi_codes(&failure.reason)
        )?;
    }

    if !report.bookmarks.is_empty() {
        writeln!(out)?;
    }
    for bookmark in report.sorted_bookmarks() {
        writeln!(
            out,
            "{}\t{}",
            strip_ansi_codes(bookmark.link()),
            strip_ansi_codes(bookmark.text())
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Total: {} bookmarks, {} failures ({} files scanned, {} skipped, {} unreadable)",
        report.bookmarks.len(),
        report.failures.len(),
        report.files.len(),
        report.skipped.len(),
        report.file_errors.len()
    )?;

    Ok(())
}

/// Write the report as pretty-printed JSON, bookmarks sorted by link
pub fn render_json(report: &HarvestReport, out: &mut impl Write) -> io::Result<()> {
    let sorted = HarvestReport { bookmarks: report.sorted_bookmarks(), ..report.clone() };
    serde_json::to_writer_pretty(&mut *out, &sorted)?;
    writeln!(out)
}
